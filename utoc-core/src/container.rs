//! Container header parsing.
//!
//! Layout (little-endian, no padding):
//! - u64 container id
//! - u32 package count
//! - TArray<u8>  names
//! - TArray<u8>  name hashes
//! - TArray<u64> package ids
//! - TArray<u8>  store entries, holding one 32-byte record per package id
//!   followed by the imported package id lists the records point into
//!
//! Store entry record:
//! - 0x00: u64 export bundle size
//! - 0x08: u32 export count
//! - 0x0C: u32 export bundle count
//! - 0x10: u32 load order
//! - 0x14: u32 unused
//! - 0x18: u32 imported package count
//! - 0x1C: u32 trailing slot, not read

use std::fmt;
use std::io::Read;

use crate::error::{ContainerError, Result};
use crate::reader::ByteReader;

pub const CONTAINER_HEADER_SIZE: usize = 12;
pub const STORE_ENTRY_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub container_id: u64,
    pub package_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageStoreEntry {
    pub export_bundle_size: u64,
    pub export_count: u32,
    pub export_bundle_count: u32,
    pub load_order: u32,
    pub imported_package_count: u32,
}

/// Everything one pass over a container header yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedContainer {
    pub header: ContainerHeader,
    pub names: Vec<u8>,
    pub name_hashes: Vec<u8>,
    pub package_ids: Vec<u64>,
    /// Parallel to `package_ids`.
    pub entries: Vec<PackageStoreEntry>,
}

/// A package whose store entry claims more than one export bundle.
///
/// Export bundle count is assumed to be `max(LocalExportIndex) + 1`, which
/// is 1 for almost every package. A few engine-default assets break that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleAnomaly {
    pub package_id: u64,
    pub export_bundle_count: u32,
}

impl fmt::Display for BundleAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WARNING: File {:#x} has {} export bundles",
            self.package_id, self.export_bundle_count
        )
    }
}

impl ParsedContainer {
    /// Package ids paired with their store entries, in file order.
    pub fn packages(&self) -> impl Iterator<Item = (u64, &PackageStoreEntry)> + '_ {
        self.package_ids.iter().copied().zip(self.entries.iter())
    }

    pub fn anomalies(&self) -> Vec<BundleAnomaly> {
        self.packages()
            .filter(|(_, entry)| entry.export_bundle_count > 1)
            .map(|(package_id, entry)| BundleAnomaly {
                package_id,
                export_bundle_count: entry.export_bundle_count,
            })
            .collect()
    }
}

pub fn read_header(reader: &mut ByteReader<'_>) -> Result<ContainerHeader> {
    let container_id = reader.read_u64()?;
    let package_count = reader.read_u32()?;
    Ok(ContainerHeader {
        container_id,
        package_count,
    })
}

pub fn read_store_entry(reader: &mut ByteReader<'_>) -> Result<PackageStoreEntry> {
    // take the whole record up front so a short tail fails before any field is read
    let mut record = reader.sub_reader(STORE_ENTRY_SIZE)?;

    let export_bundle_size = record.read_u64()?;
    let export_count = record.read_u32()?;
    let export_bundle_count = record.read_u32()?;
    let load_order = record.read_u32()?;
    record.skip(4)?;
    let imported_package_count = record.read_u32()?;
    record.skip(4)?;

    Ok(PackageStoreEntry {
        export_bundle_size,
        export_count,
        export_bundle_count,
        load_order,
        imported_package_count,
    })
}

/// Parse a fully buffered container header.
pub fn scan(bytes: &[u8]) -> Result<ParsedContainer> {
    let mut reader = ByteReader::new(bytes);

    let header = read_header(&mut reader)?;
    let names: Vec<u8> = reader.read_typed_array()?;
    let name_hashes: Vec<u8> = reader.read_typed_array()?;
    let package_ids: Vec<u64> = reader.read_typed_array()?;
    log::debug!(
        "container {:#x}: {} name bytes, {} name hash bytes, {} package ids",
        header.container_id,
        names.len(),
        name_hashes.len(),
        package_ids.len()
    );

    let blob_len = reader.read_u32()? as usize;
    let mut blob = reader.sub_reader(blob_len)?;

    let records_len = package_ids.len().saturating_mul(STORE_ENTRY_SIZE);
    if blob_len < records_len {
        return Err(ContainerError::Truncated {
            offset: blob.position(),
            needed: records_len,
            remaining: blob_len,
        });
    }

    let mut entries = Vec::with_capacity(package_ids.len());
    for _ in 0..package_ids.len() {
        entries.push(read_store_entry(&mut blob)?);
    }

    if !blob.is_empty() {
        log::debug!("{} store entry bytes past the fixed records", blob.remaining());
    }
    if !reader.is_empty() {
        log::debug!("{} bytes left unread after store entries", reader.remaining());
    }

    Ok(ParsedContainer {
        header,
        names,
        name_hashes,
        package_ids,
        entries,
    })
}

/// Buffer `source` to the end, then [`scan`] it.
pub fn scan_reader<R: Read>(mut source: R) -> Result<ParsedContainer> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    scan(&bytes)
}
