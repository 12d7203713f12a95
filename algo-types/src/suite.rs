//! The 2-byte TLS cipher-suite identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cipher-suite identifier exactly as it appears on the wire.
///
/// The first byte selects a family; the catalog only populates
/// [`CipherSuite::FAMILY_STANDARD`] and [`CipherSuite::FAMILY_EXTENSION`].
/// Ordering is byte-wise and carries no preference meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CipherSuite([u8; 2]);

impl CipherSuite {
    /// Registry family for suites assigned by the TLS registry.
    pub const FAMILY_STANDARD: u8 = 0x00;
    /// Private-use family carrying the Twofish and extra SRP suites.
    pub const FAMILY_EXTENSION: u8 = 0xF6;
    /// The families that carry catalog entries.
    pub const POPULATED_FAMILIES: [u8; 2] = [Self::FAMILY_STANDARD, Self::FAMILY_EXTENSION];

    /// Creates a suite id from its two wire bytes.
    #[must_use]
    pub const fn new(family: u8, index: u8) -> Self {
        Self([family, index])
    }

    /// Creates a suite id from a wire buffer.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Reads a suite id from the start of a slice, if at least two bytes are present.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [family, index, ..] => Some(Self([*family, *index])),
            _ => None,
        }
    }

    /// Returns the wire bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0
    }

    /// Returns the family (first) byte.
    #[must_use]
    pub const fn family(self) -> u8 {
        self.0[0]
    }

    /// Returns the index (second) byte.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0[1]
    }
}

impl From<[u8; 2]> for CipherSuite {
    fn from(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }
}

impl From<u16> for CipherSuite {
    fn from(value: u16) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<CipherSuite> for u16 {
    fn from(suite: CipherSuite) -> u16 {
        u16::from_be_bytes(suite.0)
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{0x{:02X},0x{:02X}}}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_conversion_is_big_endian() {
        let suite = CipherSuite::from(0x002F_u16);
        assert_eq!(suite.to_bytes(), [0x00, 0x2F]);
        assert_eq!(u16::from(CipherSuite::new(0xF6, 0x50)), 0xF650);
    }

    #[test]
    fn test_from_slice_requires_two_bytes() {
        assert_eq!(CipherSuite::from_slice(&[0x00]), None);
        assert_eq!(CipherSuite::from_slice(&[0x00, 0x35, 0xAA]), Some(CipherSuite::new(0x00, 0x35)));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(CipherSuite::new(0xF6, 0x62).to_string(), "{0xF6,0x62}");
    }
}
