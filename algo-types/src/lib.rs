//! # tlsalgo Types
//!
//! Pure-Rust identifiers, catalog entry types and errors shared by the
//! tlsalgo crates.
//!
//! This crate carries no tables and no logic beyond id conversions, so the
//! catalog, the priority engine and downstream handshake code can all depend
//! on it without pulling each other in.
//!
//! ## What's Here
//!
//! - **ids**: `CipherAlgorithm`, `MacAlgorithm`, `KxAlgorithm`,
//!   `CompressionMethod`, `ProtocolVersion`, `CredentialType`, `PriorityCategory`
//! - **suite**: `CipherSuite`, the 2-byte TLS wire identifier
//! - **entries**: immutable catalog row types (`CipherEntry`, `CipherSuiteEntry`, ...)
//! - **traits**: the `Algorithm` trait implemented by every id enum
//! - **error**: `AlgoError` and `ErrorCode`

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Catalog row types.
pub mod entries;
/// Error types for configuration and enumeration.
pub mod error;
/// Algorithm identifier enums.
pub mod ids;
/// TLS cipher-suite wire identifier.
pub mod suite;
/// Traits shared by the identifier enums.
pub mod traits;

pub use entries::{
    AuthMethod, CipherEntry, CipherMode, CipherSuiteEntry, CompressionEntry, CredentialMapping,
    DigestEntry, KxEntry, SuiteComponents, VersionEntry,
};
pub use error::{AlgoError, ErrorCode, Result};
pub use ids::{
    CipherAlgorithm, CompressionMethod, CredentialType, KxAlgorithm, MacAlgorithm,
    PriorityCategory, ProtocolVersion,
};
pub use suite::CipherSuite;
pub use traits::Algorithm;
