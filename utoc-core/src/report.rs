use std::io::{self, Write};

use crate::container::ParsedContainer;

/// Render a parsed container header as the line-oriented dump.
///
/// Warnings for packages with several export bundles come last, after every
/// package line.
pub fn write_report<W: Write>(parsed: &ParsedContainer, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "container hash: {:#x} package count: {:#x}",
        parsed.header.container_id, parsed.header.package_count
    )?;
    writeln!(out, "names: {:?}", parsed.names)?;
    writeln!(out, "name hashes: {:?}", parsed.name_hashes)?;
    writeln!(out, "package ids: {:?}", parsed.package_ids)?;

    for (package_id, entry) in parsed.packages() {
        writeln!(
            out,
            "file {:#x}, bundle size: {}, exports: {}, export bundles: {}, load order: {}, imports: {}",
            package_id,
            entry.export_bundle_size,
            entry.export_count,
            entry.export_bundle_count,
            entry.load_order,
            entry.imported_package_count
        )?;
    }

    for anomaly in parsed.anomalies() {
        writeln!(out, "{}", anomaly)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ContainerHeader, PackageStoreEntry};

    fn render(parsed: &ParsedContainer) -> String {
        let mut out = Vec::new();
        write_report(parsed, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_container() {
        let parsed = ParsedContainer {
            header: ContainerHeader {
                container_id: 0,
                package_count: 0,
            },
            names: vec![],
            name_hashes: vec![],
            package_ids: vec![],
            entries: vec![],
        };
        assert_eq!(
            render(&parsed),
            "container hash: 0x0 package count: 0x0\n\
             names: []\n\
             name hashes: []\n\
             package ids: []\n"
        );
    }

    #[test]
    fn warnings_follow_package_lines() {
        let entry = |bundles| PackageStoreEntry {
            export_bundle_size: 64,
            export_count: 2,
            export_bundle_count: bundles,
            load_order: 0,
            imported_package_count: 1,
        };
        let parsed = ParsedContainer {
            header: ContainerHeader {
                container_id: 0xB9F6_6C62_C549_F00C,
                package_count: 2,
            },
            names: vec![],
            name_hashes: vec![0, 0, 0, 0, 0, 0, 0, 0xC1],
            package_ids: vec![0xABCD, 0x10],
            entries: vec![entry(2), entry(1)],
        };
        assert_eq!(
            render(&parsed),
            "container hash: 0xb9f66c62c549f00c package count: 0x2\n\
             names: []\n\
             name hashes: [0, 0, 0, 0, 0, 0, 0, 193]\n\
             package ids: [43981, 16]\n\
             file 0xabcd, bundle size: 64, exports: 2, export bundles: 2, load order: 0, imports: 1\n\
             file 0x10, bundle size: 64, exports: 2, export bundles: 1, load order: 0, imports: 1\n\
             WARNING: File 0xabcd has 2 export bundles\n"
        );
    }
}
