#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # tlsalgo Priority
//!
//! Per-session algorithm preferences and the engine that turns them into an
//! ordered list of cipher suites.
//!
//! - [`SessionPriority`]: one ordered, validated list per category
//! - [`PriorityConfig`]: the same lists by name, loadable from JSON
//! - [`SuitePolicyEngine`]: scoring, filtering and selection
//!
//! A `SessionPriority` belongs to one session. It is `Send + Sync` and cheap
//! to clone, but mutation needs `&mut`, so shared sessions must be wrapped
//! by the caller.

/// Serializable priority configuration.
pub mod config;
/// Suite scoring, filtering and selection.
pub mod engine;
/// Ordered, duplicate-free algorithm lists.
pub mod priority_list;
/// Per-session priorities.
pub mod session;
/// Subscriber setup and negotiation spans.
pub mod tracing;

pub use config::PriorityConfig;
pub use engine::{SuiteOrdering, SuitePolicyEngine, SuiteReport, SuiteScore};
pub use priority_list::PriorityList;
pub use session::SessionPriority;
