//! Name hashing and file digests.

use std::fmt;

use sha1::{Digest, Sha1};

/// CityHash64 of an asset name, computed the two ways the engine does it.
///
/// Names are lowercased first. `utf8` hashes the UTF-8 bytes; `utf16` hashes
/// UTF-16LE code units with no BOM and no terminator, which is what package
/// ids and chunk ids are derived from on wide-char platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameHash {
    pub utf8: u64,
    pub utf16: u64,
}

impl NameHash {
    pub fn of(name: &str) -> Self {
        let lower = name.to_lowercase();
        let wide: Vec<u8> = lower.encode_utf16().flat_map(u16::to_le_bytes).collect();
        Self {
            utf8: cityhasher::hash(lower.as_bytes()),
            utf16: cityhasher::hash(wide.as_slice()),
        }
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "little endian UTF-8: {}", hex::encode(self.utf8.to_le_bytes()))?;
        writeln!(f, "big endian UTF-8: {}", hex::encode(self.utf8.to_be_bytes()))?;
        writeln!(f, "little endian UTF-16: {}", hex::encode(self.utf16.to_le_bytes()))?;
        write!(f, "big endian UTF-16: {}", hex::encode(self.utf16.to_be_bytes()))
    }
}

pub fn sha1_digest(bytes: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Lowercase hex SHA-1 of `bytes`.
pub fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(sha1_digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_hash_ignores_case() {
        assert_eq!(NameHash::of("/Game/Maps/Entry"), NameHash::of("/game/maps/entry"));
    }

    #[test]
    fn utf8_and_utf16_differ() {
        let h = NameHash::of("Game");
        assert_ne!(h.utf8, h.utf16);
    }

    #[test]
    fn utf16_hash_uses_little_endian_units() {
        let h = NameHash::of("ab");
        assert_eq!(h.utf16, cityhasher::hash(&[b'a', 0, b'b', 0][..]));
        assert_eq!(h.utf8, cityhasher::hash(&b"ab"[..]));
    }

    #[test]
    fn display_prints_both_byte_orders() {
        let h = NameHash {
            utf8: 0x0102_0304_0506_0708,
            utf16: 0xB9F6_6C62_C549_F00C,
        };
        assert_eq!(
            h.to_string(),
            "little endian UTF-8: 0807060504030201\n\
             big endian UTF-8: 0102030405060708\n\
             little endian UTF-16: 0cf049c5626cf6b9\n\
             big endian UTF-16: b9f66c62c549f00c"
        );
    }

    #[test]
    fn sha1_known_vectors() {
        assert_eq!(sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }
}
