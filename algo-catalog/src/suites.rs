//! Cipher-suite lookups and enumeration.
//!
//! Suite ids are sparse in the 16-bit space: only two family bytes carry
//! entries. The catalog is therefore a flat list matched on the exact two
//! bytes, and enumeration probes each `(family, index)` pair for existence
//! instead of indexing a dense array.

use algo_types::{
    CipherAlgorithm, CipherSuite, CipherSuiteEntry, KxAlgorithm, MacAlgorithm, SuiteComponents,
};

use crate::lookup::display_name;
use crate::tables::{CIPHER_SUITES, SUITE_PREFIX};

/// Returns the catalog entry for a suite, matching both bytes exactly.
#[must_use]
pub fn suite(id: CipherSuite) -> Option<&'static CipherSuiteEntry> {
    CIPHER_SUITES.iter().find(|entry| entry.id == id)
}

/// Returns true if the catalog knows the suite.
#[must_use]
pub fn suite_is_known(id: CipherSuite) -> bool {
    suite(id).is_some()
}

/// Returns the bulk cipher of a suite.
#[must_use]
pub fn suite_cipher(id: CipherSuite) -> Option<CipherAlgorithm> {
    suite(id).map(|entry| entry.cipher)
}

/// Returns the key exchange of a suite.
#[must_use]
pub fn suite_kx(id: CipherSuite) -> Option<KxAlgorithm> {
    suite(id).map(|entry| entry.kx)
}

/// Returns the MAC of a suite.
#[must_use]
pub fn suite_mac(id: CipherSuite) -> Option<MacAlgorithm> {
    suite(id).map(|entry| entry.mac)
}

/// Returns all three components of a suite in one scan.
#[must_use]
pub fn suite_components(id: CipherSuite) -> Option<SuiteComponents> {
    suite(id).map(CipherSuiteEntry::components)
}

/// Returns the display name, e.g. `"RSA_AES_128_CBC_SHA"`.
#[must_use]
pub fn suite_name(id: CipherSuite) -> Option<&'static str> {
    suite(id).map(|entry| display_name(entry.name, SUITE_PREFIX))
}

/// Looks a suite up by display name (ASCII case-insensitive).
#[must_use]
pub fn suite_from_name(name: &str) -> Option<CipherSuite> {
    CIPHER_SUITES
        .iter()
        .find(|entry| display_name(entry.name, SUITE_PREFIX).eq_ignore_ascii_case(name))
        .map(|entry| entry.id)
}

/// Counts catalog suites by probing every id in the populated families.
///
/// This walks 512 candidate ids against the table, so callers that need
/// the number repeatedly should keep it.
#[must_use]
pub fn count_all_suites() -> usize {
    CipherSuite::POPULATED_FAMILIES
        .iter()
        .flat_map(|&family| (0..=u8::MAX).map(move |index| CipherSuite::new(family, index)))
        .filter(|&id| suite_is_known(id))
        .count()
}

/// Iterates over every catalog suite id in declaration order.
pub fn all_suites() -> impl Iterator<Item = CipherSuite> {
    CIPHER_SUITES.iter().map(|entry| entry.id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rsa_aes_128_components() {
        let components = suite_components(CipherSuite::new(0x00, 0x2F)).unwrap();
        assert_eq!(components.cipher, CipherAlgorithm::Aes128Cbc);
        assert_eq!(components.kx, KxAlgorithm::Rsa);
        assert_eq!(components.mac, MacAlgorithm::Sha);
        assert_eq!(suite_name(CipherSuite::new(0x00, 0x2F)), Some("RSA_AES_128_CBC_SHA"));
    }

    #[test]
    fn test_rsa_aes_256_components() {
        let id = CipherSuite::new(0x00, 0x35);
        assert_eq!(suite_cipher(id), Some(CipherAlgorithm::Aes256Cbc));
        assert_eq!(suite_kx(id), Some(KxAlgorithm::Rsa));
        assert_eq!(suite_mac(id), Some(MacAlgorithm::Sha));
    }

    #[test]
    fn test_extension_family_lookup() {
        let id = CipherSuite::new(0xF6, 0x62);
        assert_eq!(suite_kx(id), Some(KxAlgorithm::Srp));
        assert_eq!(suite_cipher(id), Some(CipherAlgorithm::Aes128Cbc));
    }

    #[test]
    fn test_no_partial_match() {
        // 0x2F exists only in the standard family.
        assert!(!suite_is_known(CipherSuite::new(0xF6, 0x2F)));
        assert!(!suite_is_known(CipherSuite::new(0x01, 0x2F)));
        assert_eq!(suite_name(CipherSuite::new(0x00, 0x00)), None);
        assert_eq!(suite_components(CipherSuite::new(0xFF, 0xFF)), None);
    }

    #[test]
    fn test_count_matches_table() {
        assert_eq!(count_all_suites(), CIPHER_SUITES.len());
        assert_eq!(all_suites().count(), count_all_suites());
    }

    #[test]
    fn test_suite_from_name() {
        assert_eq!(suite_from_name("rsa_3des_ede_cbc_sha"), Some(CipherSuite::new(0x00, 0x0A)));
        assert_eq!(suite_from_name("RSA_DES_CBC_SHA"), None);
    }
}
