//! Suite Policy Engine
//!
//! Ranks catalog cipher suites against a [`SessionPriority`], drops every
//! suite with a disabled component, and picks a suite from a peer offer.
//!
//! ## Quick Start
//!
//! ```rust
//! use algo_priority::{SessionPriority, SuiteOrdering, SuitePolicyEngine};
//! use algo_types::{CipherAlgorithm, CipherSuite, KxAlgorithm, MacAlgorithm};
//!
//! let mut priority = SessionPriority::new();
//! priority.set_ciphers(&[CipherAlgorithm::Aes128Cbc, CipherAlgorithm::TripleDesCbc])?;
//! priority.set_key_exchanges(&[KxAlgorithm::Rsa])?;
//! priority.set_macs(&[MacAlgorithm::Sha])?;
//!
//! let suites = SuitePolicyEngine::enabled_suites(&priority, SuiteOrdering::Preference)?;
//! assert_eq!(suites[0], CipherSuite::new(0x00, 0x2F));
//! # Ok::<(), algo_types::AlgoError>(())
//! ```

use std::cmp::Ordering;

use algo_catalog::{
    all_suites, compression_from_wire, count_all_suites, suite_components, suite_name,
};
use algo_types::{AlgoError, CipherSuite, CompressionMethod, Result, SuiteComponents};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::session::SessionPriority;
use crate::tracing::NegotiationSpan;

// ============================================================================
// Scoring
// ============================================================================

/// Per-component ranks of one suite under one session.
///
/// Scores compare `(kx_rank, cipher_rank, mac_rank)` lexicographically. A
/// `None` rank means the component is disabled and the suite must not be
/// offered; such a score orders after every fully enabled score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuiteScore {
    /// Rank of the suite's key exchange.
    pub kx_rank: Option<usize>,
    /// Rank of the suite's bulk cipher.
    pub cipher_rank: Option<usize>,
    /// Rank of the suite's MAC.
    pub mac_rank: Option<usize>,
}

impl SuiteScore {
    /// Scores a set of suite components.
    #[must_use]
    pub fn of(priority: &SessionPriority, components: SuiteComponents) -> Self {
        Self {
            kx_rank: priority.kx_rank(components.kx),
            cipher_rank: priority.cipher_rank(components.cipher),
            mac_rank: priority.mac_rank(components.mac),
        }
    }

    /// Returns true if all three components are enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.kx_rank.is_some() && self.cipher_rank.is_some() && self.mac_rank.is_some()
    }

    /// Single-integer score `(kx+1)*100 + (cipher+1)*10 + mac`, disabled
    /// ranks counting as -1.
    ///
    /// Only orders correctly while every rank stays below 9; ranking itself
    /// uses the tuple ordering and this value is for reports.
    #[must_use]
    pub fn legacy_composite(&self) -> i64 {
        let rank = |r: Option<usize>| r.and_then(|r| i64::try_from(r).ok()).unwrap_or(-1);
        (rank(self.kx_rank) + 1) * 100 + (rank(self.cipher_rank) + 1) * 10 + rank(self.mac_rank)
    }

    fn order_key(&self) -> (bool, [(bool, Option<usize>); 3]) {
        let last_if_disabled = |r: Option<usize>| (r.is_none(), r);
        (
            !self.is_enabled(),
            [
                last_if_disabled(self.kx_rank),
                last_if_disabled(self.cipher_rank),
                last_if_disabled(self.mac_rank),
            ],
        )
    }
}

impl Ord for SuiteScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for SuiteScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order of the suites returned by [`SuitePolicyEngine::enabled_suites`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteOrdering {
    /// Best suite first.
    #[default]
    Preference,
    /// Catalog declaration order, no sorting.
    Catalog,
}

/// One row of a suite report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Wire id of the suite.
    pub suite: CipherSuite,
    /// Display name of the suite.
    pub name: &'static str,
    /// Component ranks.
    pub score: SuiteScore,
    /// Single-integer score kept for comparison with older tooling.
    pub legacy_score: i64,
}

// ============================================================================
// Engine
// ============================================================================

/// Stateless ranking and selection over the static catalog.
pub struct SuitePolicyEngine;

impl SuitePolicyEngine {
    /// Scores one suite, or `None` if the catalog does not know it.
    #[must_use]
    pub fn score(priority: &SessionPriority, suite: CipherSuite) -> Option<SuiteScore> {
        suite_components(suite).map(|components| SuiteScore::of(priority, components))
    }

    /// Returns true if the suite is known and every component is enabled.
    #[must_use]
    pub fn is_enabled(priority: &SessionPriority, suite: CipherSuite) -> bool {
        Self::score(priority, suite).is_some_and(|score| score.is_enabled())
    }

    /// Compares two suites by preference; the smaller one is better.
    ///
    /// Suites with a disabled component compare after every enabled suite,
    /// and unknown suites compare after every known suite.
    #[must_use]
    pub fn compare(priority: &SessionPriority, a: CipherSuite, b: CipherSuite) -> Ordering {
        Self::sort_key(priority, a).cmp(&Self::sort_key(priority, b))
    }

    /// Sorts suites best first in place.
    pub fn sort(priority: &SessionPriority, suites: &mut [CipherSuite]) {
        suites.sort_by_cached_key(|&suite| Self::sort_key(priority, suite));
    }

    fn sort_key(priority: &SessionPriority, suite: CipherSuite) -> (bool, Option<SuiteScore>) {
        let score = Self::score(priority, suite);
        (score.is_none(), score)
    }

    /// Returns every catalog suite id, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::MemoryExhausted`] if the buffer cannot be reserved.
    pub fn candidate_suites() -> Result<Vec<CipherSuite>> {
        let count = count_all_suites();
        let mut candidates = Vec::new();
        candidates
            .try_reserve_exact(count)
            .map_err(|_| AlgoError::MemoryExhausted { requested: count })?;
        candidates.extend(all_suites().take(count));
        Ok(candidates)
    }

    /// Returns every suite acceptable to the session.
    ///
    /// With [`SuiteOrdering::Preference`] the candidates are sorted by score
    /// and then filtered; with [`SuiteOrdering::Catalog`] they are only
    /// filtered. Both orderings yield the same set of suites.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::MemoryExhausted`] if the candidate buffer cannot
    /// be reserved.
    #[instrument(level = "debug", skip_all, fields(ordering = ?ordering))]
    pub fn enabled_suites(
        priority: &SessionPriority,
        ordering: SuiteOrdering,
    ) -> Result<Vec<CipherSuite>> {
        let mut suites = Self::candidate_suites()?;
        let candidates = suites.len();

        if ordering == SuiteOrdering::Preference {
            Self::sort(priority, &mut suites);
        }
        suites.retain(|&suite| Self::is_enabled(priority, suite));

        debug!(candidates, enabled = suites.len(), "Filtered cipher suites");
        for &suite in &suites {
            trace!(%suite, name = suite_name(suite).unwrap_or("unknown"), "Enabled suite");
        }
        Ok(suites)
    }

    /// Enabled suites, best first.
    ///
    /// # Errors
    ///
    /// See [`SuitePolicyEngine::enabled_suites`].
    pub fn supported_suites(priority: &SessionPriority) -> Result<Vec<CipherSuite>> {
        Self::enabled_suites(priority, SuiteOrdering::Preference)
    }

    /// Enabled suites in catalog order.
    ///
    /// # Errors
    ///
    /// See [`SuitePolicyEngine::enabled_suites`].
    pub fn supported_suites_unsorted(priority: &SessionPriority) -> Result<Vec<CipherSuite>> {
        Self::enabled_suites(priority, SuiteOrdering::Catalog)
    }

    /// Picks the best suite from a peer offer.
    ///
    /// Offered suites the catalog does not know, or that have a disabled
    /// component, are skipped. Returns `None` when nothing is acceptable.
    #[must_use]
    pub fn select_suite(priority: &SessionPriority, offered: &[CipherSuite]) -> Option<CipherSuite> {
        let span = NegotiationSpan::selection(offered.len());
        let selected = span.in_scope(|| {
            offered
                .iter()
                .filter_map(|&suite| {
                    Self::score(priority, suite)
                        .filter(SuiteScore::is_enabled)
                        .map(|score| (score, suite))
                })
                .min_by_key(|&(score, _)| score)
                .map(|(_, suite)| suite)
        });

        match selected {
            Some(suite) => {
                span.in_scope(|| {
                    debug!(%suite, name = suite_name(suite).unwrap_or("unknown"), "Selected suite");
                });
            }
            None => span.in_scope(|| debug!("No offered suite is acceptable")),
        }
        span.complete();
        selected
    }

    /// Picks the compression method to use from the peer's wire numbers.
    ///
    /// Walks the session's compression preference and returns the first
    /// method the peer offered.
    #[must_use]
    pub fn select_compression(
        priority: &SessionPriority,
        offered_wire_numbers: &[u8],
    ) -> Option<CompressionMethod> {
        let offered: Vec<CompressionMethod> =
            offered_wire_numbers.iter().filter_map(|&number| compression_from_wire(number)).collect();
        priority.compression_methods().iter().copied().find(|method| offered.contains(method))
    }

    /// Builds a report of the enabled suites, best first.
    ///
    /// # Errors
    ///
    /// See [`SuitePolicyEngine::enabled_suites`].
    pub fn report(priority: &SessionPriority) -> Result<Vec<SuiteReport>> {
        let span = NegotiationSpan::new("suite_report");
        let suites = match Self::supported_suites(priority) {
            Ok(suites) => suites,
            Err(err) => {
                span.error(&err);
                return Err(err);
            }
        };

        let rows = suites
            .into_iter()
            .filter_map(|suite| {
                let score = Self::score(priority, suite)?;
                Some(SuiteReport {
                    suite,
                    name: suite_name(suite)?,
                    score,
                    legacy_score: score.legacy_composite(),
                })
            })
            .collect();
        span.complete();
        Ok(rows)
    }
}
