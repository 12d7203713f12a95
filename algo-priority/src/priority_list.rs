//! Ordered, duplicate-free lists of enabled algorithms.

use algo_catalog::CatalogLookup;
use algo_types::{AlgoError, Result};

/// An ordered list of enabled algorithms of one kind.
///
/// The position of an algorithm is its rank: index 0 is the most preferred.
/// An algorithm that is not in the list is disabled.
///
/// Construction validates that every entry is in the catalog, that no entry
/// repeats, and that the list is no longer than the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityList<T> {
    entries: Vec<T>,
}

impl<T: CatalogLookup> PriorityList<T> {
    /// Builds a list from algorithms in preference order.
    ///
    /// # Errors
    ///
    /// Returns `PriorityTooLong` if there are more entries than catalog
    /// entries, `UnknownAlgorithm` if an entry is not in the catalog, and
    /// `DuplicatePriority` if an entry repeats.
    pub fn new(entries: &[T]) -> Result<Self> {
        let limit = T::catalog_count();
        if entries.len() > limit {
            return Err(AlgoError::PriorityTooLong {
                category: T::CATEGORY,
                len: entries.len(),
                limit,
            });
        }

        let mut accepted: Vec<T> = Vec::with_capacity(entries.len());
        for &algorithm in entries {
            if !algorithm.is_cataloged() {
                return Err(AlgoError::UnknownAlgorithm {
                    category: T::CATEGORY,
                    id: algorithm.id(),
                });
            }
            if accepted.contains(&algorithm) {
                return Err(AlgoError::DuplicatePriority {
                    category: T::CATEGORY,
                    name: algorithm
                        .display_name()
                        .map_or_else(|| format!("{algorithm:?}"), str::to_string),
                });
            }
            accepted.push(algorithm);
        }

        Ok(Self { entries: accepted })
    }

    /// Builds a list from raw one-byte ids in preference order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAlgorithm` for an id that names no catalog entry, plus
    /// every error [`PriorityList::new`] can return.
    pub fn from_ids(ids: &[u8]) -> Result<Self> {
        let entries = ids
            .iter()
            .map(|&id| {
                T::from_id(id)
                    .filter(|algorithm| algorithm.is_cataloged())
                    .ok_or(AlgoError::UnknownAlgorithm { category: T::CATEGORY, id })
            })
            .collect::<Result<Vec<T>>>()?;
        Self::new(&entries)
    }

    /// Returns the 0-based rank of an algorithm, or `None` if it is disabled.
    #[must_use]
    pub fn rank(&self, algorithm: T) -> Option<usize> {
        self.entries.iter().position(|&entry| entry == algorithm)
    }

    /// Returns true if the algorithm is enabled.
    #[must_use]
    pub fn contains(&self, algorithm: T) -> bool {
        self.rank(algorithm).is_some()
    }

    /// Returns the enabled algorithms in preference order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Number of enabled algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the enabled algorithms in preference order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use algo_types::{CipherAlgorithm, ErrorCode, MacAlgorithm, PriorityCategory};

    #[test]
    fn test_rank_is_position() {
        let list = PriorityList::new(&[CipherAlgorithm::Aes128Cbc, CipherAlgorithm::TripleDesCbc])
            .unwrap();
        assert_eq!(list.rank(CipherAlgorithm::Aes128Cbc), Some(0));
        assert_eq!(list.rank(CipherAlgorithm::TripleDesCbc), Some(1));
        assert_eq!(list.rank(CipherAlgorithm::Aes256Cbc), None);
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = PriorityList::new(&[MacAlgorithm::Sha, MacAlgorithm::Md5, MacAlgorithm::Sha])
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicatePriority);
        assert!(err.to_string().contains("SHA"));
    }

    #[test]
    fn test_too_long_rejected() {
        let err = PriorityList::<MacAlgorithm>::from_ids(&[3, 2, 1, 3]).unwrap_err();
        assert!(matches!(
            err,
            AlgoError::PriorityTooLong { category: PriorityCategory::Mac, len: 4, limit: 3 }
        ));
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let err = PriorityList::<CipherAlgorithm>::from_ids(&[4, 99]).unwrap_err();
        assert!(matches!(
            err,
            AlgoError::UnknownAlgorithm { category: PriorityCategory::Cipher, id: 99 }
        ));
    }

    #[test]
    fn test_from_ids_preserves_order() {
        let list = PriorityList::<MacAlgorithm>::from_ids(&[2, 3]).unwrap();
        assert_eq!(list.as_slice(), &[MacAlgorithm::Md5, MacAlgorithm::Sha]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![MacAlgorithm::Md5, MacAlgorithm::Sha]);
        assert!(list.contains(MacAlgorithm::Sha));
        assert!(!list.contains(MacAlgorithm::Null));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let list = PriorityList::<CipherAlgorithm>::new(&[]).unwrap();
        assert!(list.is_empty());
        assert!(!list.contains(CipherAlgorithm::Null));
    }
}
