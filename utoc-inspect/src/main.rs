use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use utoc_core::report::write_report;
use utoc_core::{scan, sha1_hex, NameHash};

/// Inspect IO Store container metadata
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump a container header blob extracted from a .ucas
    Header {
        /// Path to the raw container header
        input: PathBuf,
    },
    /// Print the CityHash64 of an asset name in both encodings and byte orders
    Hash {
        /// Asset name, e.g. /Game/Maps/Entry
        name: String,
    },
    /// Print the SHA-1 of a file
    Sha1 {
        input: PathBuf,
    },
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("unable to read {:?}", path))
}

fn dump_header(path: &Path) -> Result<()> {
    let bytes = read_input(path)?;
    log::debug!("read {} bytes from {:?}", bytes.len(), path);

    let parsed = scan(&bytes).with_context(|| format!("failed to parse container header {:?}", path))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&parsed, &mut out)?;
    out.flush()?;
    Ok(())
}

fn hash_name(name: &str) {
    println!("{}", NameHash::of(name));
}

fn checksum(path: &Path) -> Result<()> {
    let bytes = read_input(path)?;
    println!("SHA1 value for import file: {}", sha1_hex(&bytes));
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Header { input } => dump_header(&input),
        Command::Hash { name } => {
            hash_name(&name);
            Ok(())
        }
        Command::Sha1 { input } => checksum(&input),
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
