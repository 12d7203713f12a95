#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # tlsalgo Catalog
//!
//! The immutable registry of every cipher, MAC, key exchange, compression
//! method, protocol version and cipher suite this library knows, plus the
//! lookups that translate between ids, metadata and wire values.
//!
//! The tables are `static` data: they are built into the binary, never
//! change, and can be read from any number of threads without locking.
//!
//! ## Quick Start
//!
//! ```rust
//! use algo_catalog::{suite_components, suite_name, cipher_key_size};
//! use algo_types::{CipherAlgorithm, CipherSuite};
//!
//! let rsa_aes = CipherSuite::new(0x00, 0x2F);
//! let parts = suite_components(rsa_aes).expect("catalog suite");
//! assert_eq!(parts.cipher, CipherAlgorithm::Aes128Cbc);
//! assert_eq!(suite_name(rsa_aes), Some("RSA_AES_128_CBC_SHA"));
//! assert_eq!(cipher_key_size(parts.cipher), Some(16));
//! ```
//!
//! ## Features
//!
//! - `zlib`: registers DEFLATE compression under TLS number 224.

/// Key exchange ↔ credential type mapping.
pub mod credentials;
/// Id → metadata lookups, display names and catalog counts.
pub mod lookup;
/// Cipher-suite lookups and enumeration.
pub mod suites;
/// The static tables.
pub mod tables;

pub use credentials::{credential_type_kx, kx_credential_type};
pub use lookup::{
    CatalogLookup, cipher, cipher_block_size, cipher_count, cipher_iv_size, cipher_is_block,
    cipher_key_size, cipher_name, compression, compression_count, compression_from_wire,
    compression_name, compression_wire_number, kx, kx_auth, kx_count, kx_name, mac, mac_count,
    mac_digest_size, mac_name, version, version_count, version_from_wire, version_major,
    version_minor, version_name,
};
pub use suites::{
    all_suites, count_all_suites, suite, suite_cipher, suite_components, suite_from_name,
    suite_is_known, suite_kx, suite_mac, suite_name,
};
