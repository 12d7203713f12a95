//! Catalog row types.
//!
//! All rows are plain `'static` data; the catalog crate owns the tables and
//! never mutates them.

use std::fmt;

use crate::ids::{
    CipherAlgorithm, CompressionMethod, CredentialType, KxAlgorithm, MacAlgorithm,
    ProtocolVersion,
};
use crate::suite::CipherSuite;

/// Whether a cipher processes fixed-size blocks or a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    /// Block cipher in CBC mode; records need padding and an IV.
    Block,
    /// Stream cipher; no padding and no IV.
    Stream,
}

/// Metadata for one bulk cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEntry {
    /// Fully qualified symbolic name.
    pub name: &'static str,
    /// Algorithm id.
    pub id: CipherAlgorithm,
    /// Block size in bytes (1 for stream ciphers).
    pub block_size: usize,
    /// Key size in bytes.
    pub key_size: usize,
    /// Block or stream operation.
    pub mode: CipherMode,
    /// IV size in bytes.
    pub iv_size: usize,
}

/// Metadata for one MAC algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    /// Fully qualified symbolic name.
    pub name: &'static str,
    /// Algorithm id.
    pub id: MacAlgorithm,
    /// Digest size in bytes.
    pub digest_size: usize,
}

/// Metadata for one compression method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionEntry {
    /// Fully qualified symbolic name.
    pub name: &'static str,
    /// Method id.
    pub id: CompressionMethod,
    /// The number the TLS registry reserves for the method.
    pub wire_number: u8,
}

/// Metadata for one protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Display name, e.g. `"TLS 1.0"`.
    pub name: &'static str,
    /// Version id.
    pub id: ProtocolVersion,
    /// Wire major number.
    pub major: u8,
    /// Wire minor number.
    pub minor: u8,
    /// Whether this library can speak the version at all.
    pub supported: bool,
}

/// Handle to the authentication routines a key exchange uses.
///
/// The handshake layer owns the routines; this core only hands the
/// descriptor through, so it carries nothing but a label.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthMethod {
    /// Label of the authentication routines.
    pub name: &'static str,
}

/// Metadata for one key-exchange algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KxEntry {
    /// Fully qualified symbolic name.
    pub name: &'static str,
    /// Algorithm id.
    pub id: KxAlgorithm,
    /// Authentication routines used by this key exchange.
    pub auth: &'static AuthMethod,
}

/// One cipher suite: a wire id bound to its three component algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherSuiteEntry {
    /// Fully qualified symbolic name.
    pub name: &'static str,
    /// Wire identifier.
    pub id: CipherSuite,
    /// Bulk cipher.
    pub cipher: CipherAlgorithm,
    /// Key exchange.
    pub kx: KxAlgorithm,
    /// MAC.
    pub mac: MacAlgorithm,
}

impl CipherSuiteEntry {
    /// Returns the component triple.
    #[must_use]
    pub fn components(&self) -> SuiteComponents {
        SuiteComponents { cipher: self.cipher, kx: self.kx, mac: self.mac }
    }
}

/// The algorithms a cipher suite is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiteComponents {
    /// Bulk cipher.
    pub cipher: CipherAlgorithm,
    /// Key exchange.
    pub kx: KxAlgorithm,
    /// MAC.
    pub mac: MacAlgorithm,
}

impl fmt::Display for SuiteComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}/{:?}", self.kx, self.cipher, self.mac)
    }
}

/// Association between a key exchange and the credentials it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialMapping {
    /// Key exchange.
    pub kx: KxAlgorithm,
    /// Credential family.
    pub credential: CredentialType,
}
