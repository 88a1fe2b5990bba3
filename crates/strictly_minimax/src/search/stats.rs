//! Node counters collected during a search.

use derive_more::{Add, AddAssign};
use serde::{Deserialize, Serialize};

/// Counters for one search.
///
/// Parallel workers each keep their own and the root sums them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Add, AddAssign, Serialize, Deserialize,
)]
pub struct SearchStats {
    /// States visited, the root included.
    pub nodes: u64,
    /// Times a node stopped expanding because `alpha >= beta`.
    pub cutoffs: u64,
    /// Non-terminal states scored by the heuristic.
    pub heuristic_evals: u64,
    /// Rule errors hit while expanding. Always zero for a well-behaved game.
    pub rule_errors: u64,
}

impl std::iter::Sum for SearchStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, stats| acc + stats)
    }
}
