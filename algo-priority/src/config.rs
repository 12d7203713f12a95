//! Serializable priority configuration.
//!
//! [`PriorityConfig`] names algorithms by their display names so it can be
//! stored as JSON and edited by hand:
//!
//! ```json
//! {
//!   "ciphers": ["AES_256_CBC", "AES_128_CBC", "3DES_CBC"],
//!   "macs": ["SHA"],
//!   "key_exchanges": ["DHE_RSA", "RSA"],
//!   "compression": ["NULL"],
//!   "versions": ["TLS 1.0", "SSL 3.0"]
//! }
//! ```
//!
//! Names are matched ASCII case-insensitively. Missing fields take the
//! default order.

use algo_catalog::CatalogLookup;
use algo_types::{
    AlgoError, CipherAlgorithm, CompressionMethod, KxAlgorithm, MacAlgorithm, ProtocolVersion,
    Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::session::SessionPriority;

/// Named priority lists for every category, in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityConfig {
    /// Bulk cipher names.
    pub ciphers: Vec<String>,
    /// MAC names.
    pub macs: Vec<String>,
    /// Key exchange names.
    pub key_exchanges: Vec<String>,
    /// Compression method names.
    pub compression: Vec<String>,
    /// Protocol version names, e.g. `"TLS 1.0"`.
    pub versions: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            ciphers: names(&["AES_256_CBC", "AES_128_CBC", "3DES_CBC", "TWOFISH_128_CBC", "ARCFOUR"]),
            macs: names(&["SHA", "MD5"]),
            key_exchanges: names(&["DHE_RSA", "DHE_DSS", "RSA"]),
            compression: names(&["NULL"]),
            versions: names(&["TLS 1.0", "SSL 3.0"]),
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

impl PriorityConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cipher order.
    #[must_use]
    pub fn with_ciphers<I, S>(mut self, ciphers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ciphers = ciphers.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the MAC order.
    #[must_use]
    pub fn with_macs<I, S>(mut self, macs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.macs = macs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the key exchange order.
    #[must_use]
    pub fn with_key_exchanges<I, S>(mut self, key_exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_exchanges = key_exchanges.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the compression order.
    #[must_use]
    pub fn with_compression<I, S>(mut self, compression: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compression = compression.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the version order.
    #[must_use]
    pub fn with_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions = versions.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::ConfigurationError`] if the JSON is malformed or
    /// has unknown fields. Names are not checked until [`PriorityConfig::build`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "Rejected priority configuration JSON");
            AlgoError::ConfigurationError(e.to_string())
        })
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::ConfigurationError`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| AlgoError::ConfigurationError(e.to_string()))
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns the first error [`PriorityConfig::build`] would return.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Resolves every name and builds a [`SessionPriority`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownAlgorithmName` for a name that is not in the catalog,
    /// and every error the [`SessionPriority`] setters can return.
    pub fn build(&self) -> Result<SessionPriority> {
        let mut priority = SessionPriority::new();
        match self.apply(&mut priority) {
            Ok(()) => {
                debug!(
                    ciphers = self.ciphers.len(),
                    macs = self.macs.len(),
                    key_exchanges = self.key_exchanges.len(),
                    "Built session priority from configuration"
                );
                Ok(priority)
            }
            Err(err) => {
                warn!(error = %err, code = %err.code(), "Rejected priority configuration");
                Err(err)
            }
        }
    }

    fn apply(&self, priority: &mut SessionPriority) -> Result<()> {
        priority.set_ciphers(&parse_names::<CipherAlgorithm>(&self.ciphers)?)?;
        priority.set_macs(&parse_names::<MacAlgorithm>(&self.macs)?)?;
        priority.set_key_exchanges(&parse_names::<KxAlgorithm>(&self.key_exchanges)?)?;
        priority.set_compression(&parse_names::<CompressionMethod>(&self.compression)?)?;
        priority.set_versions(&parse_names::<ProtocolVersion>(&self.versions)?)?;
        Ok(())
    }
}

impl SessionPriority {
    /// Builds a session priority from a named configuration.
    ///
    /// # Errors
    ///
    /// See [`PriorityConfig::build`].
    pub fn from_config(config: &PriorityConfig) -> Result<Self> {
        config.build()
    }

    /// Renders the current lists as a named configuration.
    ///
    /// Unset categories come out as empty lists.
    #[must_use]
    pub fn to_config(&self) -> PriorityConfig {
        PriorityConfig {
            ciphers: display_names(self.ciphers()),
            macs: display_names(self.macs()),
            key_exchanges: display_names(self.key_exchanges()),
            compression: display_names(self.compression_methods()),
            versions: display_names(self.versions()),
        }
    }
}

fn parse_names<T: CatalogLookup>(names: &[String]) -> Result<Vec<T>> {
    names
        .iter()
        .map(|name| {
            T::from_display_name(name).ok_or_else(|| AlgoError::UnknownAlgorithmName {
                category: T::CATEGORY,
                name: name.clone(),
            })
        })
        .collect()
}

fn display_names<T: CatalogLookup>(algorithms: &[T]) -> Vec<String> {
    algorithms.iter().filter_map(|a| a.display_name()).map(str::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use algo_types::{ErrorCode, PriorityCategory};

    #[test]
    fn test_default_config_builds() {
        let priority = PriorityConfig::default().build().unwrap();
        assert_eq!(priority.cipher_rank(CipherAlgorithm::Aes256Cbc), Some(0));
        assert_eq!(priority.kx_rank(KxAlgorithm::Rsa), Some(2));
        assert_eq!(priority.kx_rank(KxAlgorithm::AnonDh), None);
        assert_eq!(priority.highest_version(), ProtocolVersion::Tls1);
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let config = PriorityConfig::new().with_ciphers(["ARCFOUR", "AES_128_CBC"]).with_macs(["MD5"]);
        let json = config.to_json().unwrap();
        let parsed = PriorityConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PriorityConfig::from_json(r#"{ "macs": ["sha"] }"#).unwrap();
        assert_eq!(config.macs, vec!["sha".to_string()]);
        assert_eq!(config.ciphers, PriorityConfig::default().ciphers);
        let priority = config.build().unwrap();
        assert_eq!(priority.mac_rank(MacAlgorithm::Sha), Some(0));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = PriorityConfig::from_json(r#"{ "groups": [] }"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = PriorityConfig::new().with_ciphers(["CHACHA20"]).validate().unwrap_err();
        match err {
            AlgoError::UnknownAlgorithmName { category, name } => {
                assert_eq!(category, PriorityCategory::Cipher);
                assert_eq!(name, "CHACHA20");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_version_name_rejected() {
        let err = PriorityConfig::new().with_versions(["UNKNOWN"]).build().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReservedVersion);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = PriorityConfig::new().with_macs(["SHA", "sha"]).build().unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicatePriority);
    }

    #[test]
    fn test_session_to_config_roundtrip() {
        let priority = PriorityConfig::default().build().unwrap();
        let config = priority.to_config();
        assert_eq!(config, PriorityConfig::default());
        assert_eq!(SessionPriority::from_config(&config).unwrap(), priority);
    }
}
