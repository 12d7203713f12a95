//! Lookups from algorithm ids to catalog metadata and back.
//!
//! Every lookup is a linear scan of a small static table that stops at the
//! first match. A miss is `None`; nothing here allocates or panics.

use algo_types::{
    Algorithm, AuthMethod, CipherAlgorithm, CipherEntry, CipherMode, CompressionEntry,
    CompressionMethod, DigestEntry, KxAlgorithm, KxEntry, MacAlgorithm, ProtocolVersion,
    VersionEntry,
};

use crate::tables::{
    CIPHER_PREFIX, CIPHERS, COMPRESSION_METHODS, COMPRESSION_PREFIX, KEY_EXCHANGES, KX_PREFIX,
    MAC_PREFIX, MACS, VERSIONS,
};

/// Strips a symbolic prefix from a catalog name.
pub(crate) fn display_name(name: &'static str, prefix: &str) -> &'static str {
    name.strip_prefix(prefix).unwrap_or(name)
}

/// Counts the ids in `0..=255` accepted by `is_known`.
fn count_ids(is_known: impl Fn(u8) -> bool) -> usize {
    (0..=u8::MAX).filter(|&id| is_known(id)).count()
}

/// Catalog access shared by every algorithm kind.
///
/// The priority layer is generic over this trait so that one priority-list
/// implementation serves all five categories.
pub trait CatalogLookup: Algorithm {
    /// Returns true if the catalog carries an entry for `id`.
    fn is_known_id(id: u8) -> bool;

    /// Number of catalog entries for this kind, counted over the id space.
    fn catalog_count() -> usize {
        count_ids(Self::is_known_id)
    }

    /// Display name with the symbolic prefix removed.
    fn display_name(self) -> Option<&'static str>;

    /// Parses a display name (ASCII case-insensitive).
    fn from_display_name(name: &str) -> Option<Self>;

    /// Returns true if the catalog carries an entry for this algorithm.
    fn is_cataloged(self) -> bool {
        Self::is_known_id(self.id())
    }
}

// =============================================================================
// CIPHERS
// =============================================================================

/// Returns the catalog entry for a cipher.
#[must_use]
pub fn cipher(algorithm: CipherAlgorithm) -> Option<&'static CipherEntry> {
    CIPHERS.iter().find(|entry| entry.id == algorithm)
}

/// Returns the block size in bytes.
#[must_use]
pub fn cipher_block_size(algorithm: CipherAlgorithm) -> Option<usize> {
    cipher(algorithm).map(|entry| entry.block_size)
}

/// Returns the key size in bytes.
#[must_use]
pub fn cipher_key_size(algorithm: CipherAlgorithm) -> Option<usize> {
    cipher(algorithm).map(|entry| entry.key_size)
}

/// Returns the IV size in bytes.
#[must_use]
pub fn cipher_iv_size(algorithm: CipherAlgorithm) -> Option<usize> {
    cipher(algorithm).map(|entry| entry.iv_size)
}

/// Returns true for block ciphers. Unknown ciphers are not block ciphers.
#[must_use]
pub fn cipher_is_block(algorithm: CipherAlgorithm) -> bool {
    cipher(algorithm).is_some_and(|entry| entry.mode == CipherMode::Block)
}

/// Returns the display name, e.g. `"AES_128_CBC"`.
#[must_use]
pub fn cipher_name(algorithm: CipherAlgorithm) -> Option<&'static str> {
    cipher(algorithm).map(|entry| display_name(entry.name, CIPHER_PREFIX))
}

/// Number of ciphers in the catalog.
#[must_use]
pub fn cipher_count() -> usize {
    CipherAlgorithm::catalog_count()
}

impl CatalogLookup for CipherAlgorithm {
    fn is_known_id(id: u8) -> bool {
        CIPHERS.iter().any(|entry| entry.id.id() == id)
    }

    fn display_name(self) -> Option<&'static str> {
        cipher_name(self)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        CIPHERS
            .iter()
            .find(|entry| display_name(entry.name, CIPHER_PREFIX).eq_ignore_ascii_case(name))
            .map(|entry| entry.id)
    }
}

// =============================================================================
// MACS
// =============================================================================

/// Returns the catalog entry for a MAC algorithm.
#[must_use]
pub fn mac(algorithm: MacAlgorithm) -> Option<&'static DigestEntry> {
    MACS.iter().find(|entry| entry.id == algorithm)
}

/// Returns the digest size in bytes.
#[must_use]
pub fn mac_digest_size(algorithm: MacAlgorithm) -> Option<usize> {
    mac(algorithm).map(|entry| entry.digest_size)
}

/// Returns the display name, e.g. `"SHA"`.
#[must_use]
pub fn mac_name(algorithm: MacAlgorithm) -> Option<&'static str> {
    mac(algorithm).map(|entry| display_name(entry.name, MAC_PREFIX))
}

/// Number of MAC algorithms in the catalog.
#[must_use]
pub fn mac_count() -> usize {
    MacAlgorithm::catalog_count()
}

impl CatalogLookup for MacAlgorithm {
    fn is_known_id(id: u8) -> bool {
        MACS.iter().any(|entry| entry.id.id() == id)
    }

    fn display_name(self) -> Option<&'static str> {
        mac_name(self)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        MACS.iter()
            .find(|entry| display_name(entry.name, MAC_PREFIX).eq_ignore_ascii_case(name))
            .map(|entry| entry.id)
    }
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Returns the catalog entry for a compression method.
#[must_use]
pub fn compression(method: CompressionMethod) -> Option<&'static CompressionEntry> {
    COMPRESSION_METHODS.iter().find(|entry| entry.id == method)
}

/// Returns the TLS registry number of a compression method.
#[must_use]
pub fn compression_wire_number(method: CompressionMethod) -> Option<u8> {
    compression(method).map(|entry| entry.wire_number)
}

/// Returns the compression method registered under a TLS wire number.
#[must_use]
pub fn compression_from_wire(wire_number: u8) -> Option<CompressionMethod> {
    COMPRESSION_METHODS.iter().find(|entry| entry.wire_number == wire_number).map(|entry| entry.id)
}

/// Returns the display name, e.g. `"NULL"`.
#[must_use]
pub fn compression_name(method: CompressionMethod) -> Option<&'static str> {
    compression(method).map(|entry| display_name(entry.name, COMPRESSION_PREFIX))
}

/// Number of compression methods in the catalog.
#[must_use]
pub fn compression_count() -> usize {
    CompressionMethod::catalog_count()
}

impl CatalogLookup for CompressionMethod {
    fn is_known_id(id: u8) -> bool {
        COMPRESSION_METHODS.iter().any(|entry| entry.id.id() == id)
    }

    fn display_name(self) -> Option<&'static str> {
        compression_name(self)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        COMPRESSION_METHODS
            .iter()
            .find(|entry| display_name(entry.name, COMPRESSION_PREFIX).eq_ignore_ascii_case(name))
            .map(|entry| entry.id)
    }
}

// =============================================================================
// KEY EXCHANGE
// =============================================================================

/// Returns the catalog entry for a key exchange.
#[must_use]
pub fn kx(algorithm: KxAlgorithm) -> Option<&'static KxEntry> {
    KEY_EXCHANGES.iter().find(|entry| entry.id == algorithm)
}

/// Returns the authentication routines a key exchange uses.
#[must_use]
pub fn kx_auth(algorithm: KxAlgorithm) -> Option<&'static AuthMethod> {
    kx(algorithm).map(|entry| entry.auth)
}

/// Returns the display name, e.g. `"DHE_RSA"`.
#[must_use]
pub fn kx_name(algorithm: KxAlgorithm) -> Option<&'static str> {
    kx(algorithm).map(|entry| display_name(entry.name, KX_PREFIX))
}

/// Number of key exchanges in the catalog.
#[must_use]
pub fn kx_count() -> usize {
    KxAlgorithm::catalog_count()
}

impl CatalogLookup for KxAlgorithm {
    fn is_known_id(id: u8) -> bool {
        KEY_EXCHANGES.iter().any(|entry| entry.id.id() == id)
    }

    fn display_name(self) -> Option<&'static str> {
        kx_name(self)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        KEY_EXCHANGES
            .iter()
            .find(|entry| display_name(entry.name, KX_PREFIX).eq_ignore_ascii_case(name))
            .map(|entry| entry.id)
    }
}

// =============================================================================
// PROTOCOL VERSIONS
// =============================================================================

/// Returns the catalog entry for a protocol version.
#[must_use]
pub fn version(version: ProtocolVersion) -> Option<&'static VersionEntry> {
    VERSIONS.iter().find(|entry| entry.id == version)
}

/// Returns the display name, e.g. `"TLS 1.0"`.
#[must_use]
pub fn version_name(version: ProtocolVersion) -> Option<&'static str> {
    self::version(version).map(|entry| entry.name)
}

/// Returns the wire major number.
#[must_use]
pub fn version_major(version: ProtocolVersion) -> Option<u8> {
    self::version(version).map(|entry| entry.major)
}

/// Returns the wire minor number.
#[must_use]
pub fn version_minor(version: ProtocolVersion) -> Option<u8> {
    self::version(version).map(|entry| entry.minor)
}

/// Maps wire `(major, minor)` numbers to a version id.
#[must_use]
pub fn version_from_wire(major: u8, minor: u8) -> Option<ProtocolVersion> {
    VERSIONS.iter().find(|entry| entry.major == major && entry.minor == minor).map(|entry| entry.id)
}

/// Number of version entries in the catalog, including the sentinel.
#[must_use]
pub fn version_count() -> usize {
    ProtocolVersion::catalog_count()
}

impl CatalogLookup for ProtocolVersion {
    fn is_known_id(id: u8) -> bool {
        VERSIONS.iter().any(|entry| entry.id.id() == id)
    }

    fn display_name(self) -> Option<&'static str> {
        version_name(self)
    }

    fn from_display_name(name: &str) -> Option<Self> {
        VERSIONS.iter().find(|entry| entry.name.eq_ignore_ascii_case(name)).map(|entry| entry.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_metadata() {
        let aes = cipher(CipherAlgorithm::Aes256Cbc).unwrap();
        assert_eq!(aes.block_size, 16);
        assert_eq!(aes.key_size, 32);
        assert_eq!(aes.iv_size, 16);
        assert!(cipher_is_block(CipherAlgorithm::TripleDesCbc));
        assert!(!cipher_is_block(CipherAlgorithm::Arcfour));
        assert_eq!(cipher_iv_size(CipherAlgorithm::Arcfour), Some(0));
    }

    #[test]
    fn test_names_strip_prefix() {
        assert_eq!(cipher_name(CipherAlgorithm::Aes128Cbc), Some("AES_128_CBC"));
        assert_eq!(mac_name(MacAlgorithm::Sha), Some("SHA"));
        assert_eq!(kx_name(KxAlgorithm::AnonDh), Some("ANON_DH"));
        assert_eq!(compression_name(CompressionMethod::Null), Some("NULL"));
        assert_eq!(version_name(ProtocolVersion::Tls1), Some("TLS 1.0"));
    }

    #[test]
    fn test_names_parse_back() {
        assert_eq!(
            CipherAlgorithm::from_display_name("aes_256_cbc"),
            Some(CipherAlgorithm::Aes256Cbc)
        );
        assert_eq!(KxAlgorithm::from_display_name("SRP"), Some(KxAlgorithm::Srp));
        assert_eq!(ProtocolVersion::from_display_name("SSL 3.0"), Some(ProtocolVersion::Ssl3));
        assert_eq!(CipherAlgorithm::from_display_name("TLS_CIPHER_AES_128_CBC"), None);
        assert_eq!(MacAlgorithm::from_display_name("SHA256"), None);
    }

    #[test]
    fn test_counts_match_tables() {
        assert_eq!(cipher_count(), CIPHERS.len());
        assert_eq!(mac_count(), MACS.len());
        assert_eq!(kx_count(), KEY_EXCHANGES.len());
        assert_eq!(compression_count(), COMPRESSION_METHODS.len());
        assert_eq!(version_count(), VERSIONS.len());
    }

    #[test]
    fn test_compression_wire_numbers() {
        assert_eq!(compression_wire_number(CompressionMethod::Null), Some(0));
        assert_eq!(compression_from_wire(0), Some(CompressionMethod::Null));
        assert_eq!(compression_from_wire(1), None);
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn test_zlib_registered_at_224() {
        assert_eq!(compression_wire_number(CompressionMethod::Zlib), Some(224));
        assert_eq!(compression_from_wire(224), Some(CompressionMethod::Zlib));
    }

    #[cfg(not(feature = "zlib"))]
    #[test]
    fn test_zlib_absent_without_feature() {
        assert!(compression(CompressionMethod::Zlib).is_none());
        assert!(!CompressionMethod::Zlib.is_cataloged());
    }

    #[test]
    fn test_version_wire_mapping() {
        assert_eq!(version_from_wire(3, 1), Some(ProtocolVersion::Tls1));
        assert_eq!(version_from_wire(3, 0), Some(ProtocolVersion::Ssl3));
        assert_eq!(version_from_wire(3, 3), None);
        assert_eq!(version_major(ProtocolVersion::Tls1), Some(3));
        assert_eq!(version_minor(ProtocolVersion::Tls1), Some(1));
    }

    #[test]
    fn test_kx_auth_descriptors() {
        assert_eq!(kx_auth(KxAlgorithm::Srp).map(|auth| auth.name), Some("srp"));
        assert!(kx_auth(KxAlgorithm::DheDss).is_some());
    }
}
