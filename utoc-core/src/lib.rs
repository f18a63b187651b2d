//! utoc-core
//!
//! Readers for IO Store container metadata plus the hashing helpers the
//! engine uses for asset names and imported files.
//!
//! Nothing here writes the format. [`container::scan`] takes a fully
//! buffered container header and returns a [`container::ParsedContainer`];
//! [`report::write_report`] renders it for humans.

pub mod container;
pub mod error;
pub mod hash;
pub mod reader;
pub mod report;

pub use container::{scan, scan_reader, BundleAnomaly, ContainerHeader, PackageStoreEntry, ParsedContainer};
pub use error::{ContainerError, Result};
pub use hash::{sha1_hex, NameHash};
pub use reader::{ArrayElement, ByteReader};
