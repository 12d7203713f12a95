//! Traits implemented by the algorithm identifier enums.

use std::fmt::Debug;
use std::hash::Hash;

use crate::ids::PriorityCategory;

/// An algorithm identifier that can appear in a session priority list.
///
/// Implementors map one-to-one onto a byte in the id space `0..=255`.
/// `from_id` only decides whether a byte names a variant; whether the
/// catalog actually carries an entry for it is a catalog question.
pub trait Algorithm: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The priority category this algorithm is configured under.
    const CATEGORY: PriorityCategory;

    /// Returns the one-byte identifier.
    fn id(self) -> u8;

    /// Converts a one-byte identifier back into the enum.
    fn from_id(id: u8) -> Option<Self>;
}
