//! Per-session algorithm priorities.
//!
//! A [`SessionPriority`] holds one [`PriorityList`] per category. Every list
//! starts unset; an unset list behaves like an empty one for ranking, but
//! callers can tell the two apart through [`SessionPriority::is_configured`].

use algo_catalog::{CatalogLookup, compression_wire_number};
use algo_types::{
    AlgoError, Algorithm, CipherAlgorithm, CompressionMethod, KxAlgorithm, MacAlgorithm,
    PriorityCategory, ProtocolVersion, Result,
};
use tracing::debug;

use crate::priority_list::PriorityList;

// ============================================================================
// Session Priority
// ============================================================================

/// The enabled algorithms of one session, each category in preference order.
///
/// Setters validate before replacing anything: a rejected list leaves the
/// previous configuration untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPriority {
    ciphers: Option<PriorityList<CipherAlgorithm>>,
    macs: Option<PriorityList<MacAlgorithm>>,
    key_exchanges: Option<PriorityList<KxAlgorithm>>,
    compression: Option<PriorityList<CompressionMethod>>,
    versions: Option<PriorityList<ProtocolVersion>>,
}

impl SessionPriority {
    /// Creates a session with every category unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cipher preference order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has unknown or duplicate entries.
    pub fn set_ciphers(&mut self, ciphers: &[CipherAlgorithm]) -> Result<()> {
        self.ciphers = Some(PriorityList::new(ciphers)?);
        Ok(())
    }

    /// Sets the MAC preference order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has unknown or duplicate entries.
    pub fn set_macs(&mut self, macs: &[MacAlgorithm]) -> Result<()> {
        self.macs = Some(PriorityList::new(macs)?);
        Ok(())
    }

    /// Sets the key exchange preference order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has unknown or duplicate entries.
    pub fn set_key_exchanges(&mut self, key_exchanges: &[KxAlgorithm]) -> Result<()> {
        self.key_exchanges = Some(PriorityList::new(key_exchanges)?);
        Ok(())
    }

    /// Sets the compression preference order.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has unknown or duplicate entries. With
    /// the `zlib` feature off, `Zlib` is not in the catalog and is rejected.
    pub fn set_compression(&mut self, methods: &[CompressionMethod]) -> Result<()> {
        self.compression = Some(PriorityList::new(methods)?);
        Ok(())
    }

    /// Sets the enabled protocol versions in preference order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::ReservedVersion`] if the list contains
    /// [`ProtocolVersion::Unknown`], plus the usual list errors.
    pub fn set_versions(&mut self, versions: &[ProtocolVersion]) -> Result<()> {
        if versions.contains(&ProtocolVersion::Unknown) {
            return Err(AlgoError::ReservedVersion);
        }
        self.versions = Some(PriorityList::new(versions)?);
        Ok(())
    }

    /// Sets one category from raw one-byte ids.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAlgorithm` for ids outside the catalog, plus every
    /// error the typed setter for `category` can return.
    pub fn set_priority(&mut self, category: PriorityCategory, ids: &[u8]) -> Result<()> {
        debug!(%category, len = ids.len(), "Setting priority from raw ids");
        match category {
            PriorityCategory::Cipher => {
                self.ciphers = Some(PriorityList::from_ids(ids)?);
            }
            PriorityCategory::Mac => {
                self.macs = Some(PriorityList::from_ids(ids)?);
            }
            PriorityCategory::KeyExchange => {
                self.key_exchanges = Some(PriorityList::from_ids(ids)?);
            }
            PriorityCategory::Compression => {
                self.compression = Some(PriorityList::from_ids(ids)?);
            }
            PriorityCategory::Version => {
                if ids.contains(&ProtocolVersion::Unknown.id()) {
                    return Err(AlgoError::ReservedVersion);
                }
                self.versions = Some(PriorityList::from_ids(ids)?);
            }
        }
        Ok(())
    }

    /// Returns the category back to the unset state.
    pub fn clear(&mut self, category: PriorityCategory) {
        match category {
            PriorityCategory::Cipher => self.ciphers = None,
            PriorityCategory::Mac => self.macs = None,
            PriorityCategory::KeyExchange => self.key_exchanges = None,
            PriorityCategory::Compression => self.compression = None,
            PriorityCategory::Version => self.versions = None,
        }
    }

    /// Returns true if the category has been set, even to an empty list.
    #[must_use]
    pub fn is_configured(&self, category: PriorityCategory) -> bool {
        match category {
            PriorityCategory::Cipher => self.ciphers.is_some(),
            PriorityCategory::Mac => self.macs.is_some(),
            PriorityCategory::KeyExchange => self.key_exchanges.is_some(),
            PriorityCategory::Compression => self.compression.is_some(),
            PriorityCategory::Version => self.versions.is_some(),
        }
    }

    // ========================================================================
    // Ranking
    // ========================================================================

    /// Returns the rank of a raw id within a category, or `None` if disabled.
    ///
    /// Ids that do not decode to an algorithm are reported as disabled.
    #[must_use]
    pub fn priority(&self, category: PriorityCategory, id: u8) -> Option<usize> {
        match category {
            PriorityCategory::Cipher => CipherAlgorithm::from_id(id).and_then(|a| self.cipher_rank(a)),
            PriorityCategory::Mac => MacAlgorithm::from_id(id).and_then(|a| self.mac_rank(a)),
            PriorityCategory::KeyExchange => KxAlgorithm::from_id(id).and_then(|a| self.kx_rank(a)),
            PriorityCategory::Compression => {
                CompressionMethod::from_id(id).and_then(|a| self.compression_rank(a))
            }
            PriorityCategory::Version => {
                ProtocolVersion::from_id(id).and_then(|a| self.version_rank(a))
            }
        }
    }

    /// Rank of a cipher, `None` if disabled.
    #[must_use]
    pub fn cipher_rank(&self, cipher: CipherAlgorithm) -> Option<usize> {
        rank_in(self.ciphers.as_ref(), cipher)
    }

    /// Rank of a MAC, `None` if disabled.
    #[must_use]
    pub fn mac_rank(&self, mac: MacAlgorithm) -> Option<usize> {
        rank_in(self.macs.as_ref(), mac)
    }

    /// Rank of a key exchange, `None` if disabled.
    #[must_use]
    pub fn kx_rank(&self, kx: KxAlgorithm) -> Option<usize> {
        rank_in(self.key_exchanges.as_ref(), kx)
    }

    /// Rank of a compression method, `None` if disabled.
    #[must_use]
    pub fn compression_rank(&self, method: CompressionMethod) -> Option<usize> {
        rank_in(self.compression.as_ref(), method)
    }

    /// Rank of a protocol version, `None` if disabled.
    #[must_use]
    pub fn version_rank(&self, version: ProtocolVersion) -> Option<usize> {
        rank_in(self.versions.as_ref(), version)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Enabled ciphers in preference order.
    #[must_use]
    pub fn ciphers(&self) -> &[CipherAlgorithm] {
        slice_of(self.ciphers.as_ref())
    }

    /// Enabled MACs in preference order.
    #[must_use]
    pub fn macs(&self) -> &[MacAlgorithm] {
        slice_of(self.macs.as_ref())
    }

    /// Enabled key exchanges in preference order.
    #[must_use]
    pub fn key_exchanges(&self) -> &[KxAlgorithm] {
        slice_of(self.key_exchanges.as_ref())
    }

    /// Enabled compression methods in preference order.
    #[must_use]
    pub fn compression_methods(&self) -> &[CompressionMethod] {
        slice_of(self.compression.as_ref())
    }

    /// Enabled protocol versions in preference order.
    #[must_use]
    pub fn versions(&self) -> &[ProtocolVersion] {
        slice_of(self.versions.as_ref())
    }

    // ========================================================================
    // Versions and compression
    // ========================================================================

    /// Returns the enabled version with the smallest numeric id.
    ///
    /// This is the numeric id, not the preference order. With no versions
    /// enabled the result is [`ProtocolVersion::Unknown`].
    #[must_use]
    pub fn lowest_version(&self) -> ProtocolVersion {
        self.versions().iter().copied().min_by_key(|v| v.id()).unwrap_or(ProtocolVersion::Unknown)
    }

    /// Returns the enabled version with the largest numeric id.
    ///
    /// With no versions enabled the result is [`ProtocolVersion::Unknown`].
    #[must_use]
    pub fn highest_version(&self) -> ProtocolVersion {
        self.versions().iter().copied().max_by_key(|v| v.id()).unwrap_or(ProtocolVersion::Unknown)
    }

    /// Returns true if the version is implemented and enabled for this session.
    #[must_use]
    pub fn version_is_supported(&self, version: ProtocolVersion) -> bool {
        let implemented = algo_catalog::version(version).is_some_and(|entry| entry.supported);
        implemented && self.versions.as_ref().is_some_and(|list| list.contains(version))
    }

    /// Returns the TLS wire numbers of the enabled compression methods, in
    /// preference order.
    #[must_use]
    pub fn supported_compression_methods(&self) -> Vec<u8> {
        self.compression
            .iter()
            .flat_map(|list| list.iter())
            .filter_map(compression_wire_number)
            .collect()
    }
}

fn rank_in<T: CatalogLookup>(list: Option<&PriorityList<T>>, algorithm: T) -> Option<usize> {
    list.and_then(|list| list.rank(algorithm))
}

fn slice_of<T: CatalogLookup>(list: Option<&PriorityList<T>>) -> &[T] {
    list.map(PriorityList::as_slice).unwrap_or(&[])
}
