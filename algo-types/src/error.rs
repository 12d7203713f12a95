//! Error types for priority configuration and suite enumeration.
//!
//! Catalog lookups never fail with an error: a miss is reported as `None`
//! because lookups sit on the handshake hot path. Errors are reserved for
//! rejected configuration and for allocation failure while enumerating.

use std::fmt;

use thiserror::Error;

use crate::ids::PriorityCategory;

/// Stable numeric codes for [`AlgoError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration errors (7000-7099)
    /// An id or name is not in the catalog.
    UnknownAlgorithm = 7001,
    /// The same algorithm is listed twice.
    DuplicatePriority = 7002,
    /// A priority list is longer than the catalog.
    PriorityTooLong = 7003,
    /// The version sentinel was listed as enabled.
    ReservedVersion = 7004,
    /// Configuration could not be parsed or serialized.
    InvalidConfig = 7005,

    // Resource errors (8000-8099)
    /// A candidate buffer could not be allocated.
    MemoryAllocationFailed = 8001,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::UnknownAlgorithm => write!(f, "UNKNOWN_ALGORITHM"),
            ErrorCode::DuplicatePriority => write!(f, "DUPLICATE_PRIORITY"),
            ErrorCode::PriorityTooLong => write!(f, "PRIORITY_TOO_LONG"),
            ErrorCode::ReservedVersion => write!(f, "RESERVED_VERSION"),
            ErrorCode::InvalidConfig => write!(f, "INVALID_CONFIG"),
            ErrorCode::MemoryAllocationFailed => write!(f, "MEMORY_ALLOCATION_FAILED"),
        }
    }
}

/// Errors raised while configuring priorities or enumerating suites.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A candidate buffer could not be reserved.
    #[error("Memory exhausted while reserving {requested} cipher-suite slots")]
    MemoryExhausted {
        /// Number of elements that were requested.
        requested: usize,
    },

    /// A raw id does not name a catalog entry.
    #[error("Unknown {category} id: {id}")]
    UnknownAlgorithm {
        /// Category the id was given for.
        category: PriorityCategory,
        /// The rejected id.
        id: u8,
    },

    /// A configured name does not match any catalog entry.
    #[error("Unknown {category} name: {name}")]
    UnknownAlgorithmName {
        /// Category the name was given for.
        category: PriorityCategory,
        /// The rejected name.
        name: String,
    },

    /// The same algorithm appears twice in one priority list.
    #[error("Duplicate {category} in priority list: {name}")]
    DuplicatePriority {
        /// Category of the list.
        category: PriorityCategory,
        /// Name (or debug form) of the duplicated algorithm.
        name: String,
    },

    /// A priority list is longer than the number of catalog entries.
    #[error("{category} priority list has {len} entries, catalog has {limit}")]
    PriorityTooLong {
        /// Category of the list.
        category: PriorityCategory,
        /// Length that was supplied.
        len: usize,
        /// Catalog size for the category.
        limit: usize,
    },

    /// The "unknown" version sentinel was listed as an enabled version.
    #[error("The unknown-version sentinel cannot be enabled")]
    ReservedVersion,

    /// Configuration could not be parsed or serialized.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AlgoError {
    /// Returns the stable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MemoryExhausted { .. } => ErrorCode::MemoryAllocationFailed,
            Self::UnknownAlgorithm { .. } | Self::UnknownAlgorithmName { .. } => {
                ErrorCode::UnknownAlgorithm
            }
            Self::DuplicatePriority { .. } => ErrorCode::DuplicatePriority,
            Self::PriorityTooLong { .. } => ErrorCode::PriorityTooLong,
            Self::ReservedVersion => ErrorCode::ReservedVersion,
            Self::ConfigurationError(_) => ErrorCode::InvalidConfig,
        }
    }
}

/// A specialized Result type for tlsalgo operations.
pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_category() {
        let err = AlgoError::UnknownAlgorithmName {
            category: PriorityCategory::Cipher,
            name: "DES_CBC".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown cipher name: DES_CBC");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AlgoError::ReservedVersion.code(), ErrorCode::ReservedVersion);
        assert_eq!(
            AlgoError::MemoryExhausted { requested: 26 }.code() as u32,
            8001
        );
        assert_eq!(ErrorCode::DuplicatePriority.to_string(), "DUPLICATE_PRIORITY");
    }

    #[test]
    fn test_too_long_message() {
        let err = AlgoError::PriorityTooLong {
            category: PriorityCategory::Mac,
            len: 4,
            limit: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }
}
