#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! tlsalgo - TLS Algorithm Catalog and Cipher-Suite Negotiation
//!
//! The algorithm core of a TLS 1.0 / SSL 3.0 handshake: a static catalog of
//! ciphers, MACs, key exchanges, compression methods, protocol versions and
//! cipher suites, per-session priority lists, and an engine that ranks and
//! filters suites against those priorities.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tlsalgo::{PriorityConfig, SuitePolicyEngine, suite_name};
//!
//! let priority = PriorityConfig::default().build()?;
//! let suites = SuitePolicyEngine::supported_suites(&priority)?;
//! assert_eq!(suite_name(suites[0]), Some("DHE_RSA_AES_256_CBC_SHA"));
//! # Ok::<(), tlsalgo::AlgoError>(())
//! ```
//!
//! ## Crate Layout
//!
//! - [`types`]: ids, table entry types and errors
//! - [`catalog`]: the static tables and their lookups
//! - [`priority`]: session priorities, configuration and the ranking engine
//!
//! The most used items are re-exported at the crate root.
//!
//! ## Features
//!
//! - `zlib`: registers DEFLATE compression (TLS number 224)

pub use algo_catalog as catalog;
pub use algo_priority as priority;
pub use algo_types as types;

pub use algo_types::{
    AlgoError, Algorithm, CipherAlgorithm, CipherSuite, CompressionMethod, CredentialType,
    ErrorCode, KxAlgorithm, MacAlgorithm, PriorityCategory, ProtocolVersion, Result,
    SuiteComponents,
};

pub use algo_catalog::{
    CatalogLookup, cipher, compression, count_all_suites, credential_type_kx, kx,
    kx_credential_type, mac, suite_components, suite_from_name, suite_is_known, suite_name,
    version, version_from_wire,
};

pub use algo_priority::tracing::{NegotiationSpan, TracingConfig, init_tracing};
pub use algo_priority::{
    PriorityConfig, PriorityList, SessionPriority, SuiteOrdering, SuitePolicyEngine, SuiteReport,
    SuiteScore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the default session priority and returns its suites, best first.
///
/// # Errors
///
/// Returns [`AlgoError::MemoryExhausted`] if the candidate buffer cannot be
/// reserved.
pub fn default_suites() -> Result<Vec<CipherSuite>> {
    let priority = PriorityConfig::default().build()?;
    let suites = SuitePolicyEngine::supported_suites(&priority)?;
    tracing::debug!(count = suites.len(), "Resolved default cipher suites");
    Ok(suites)
}
