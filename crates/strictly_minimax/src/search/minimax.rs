//! Recursive minimax with alpha-beta pruning.

use super::cancel::CancelToken;
use super::heuristic::Heuristic;
use super::stats::SearchStats;
use super::{Score, WIN_SCORE};
use crate::game::Game;
use tracing::error;

/// Per-worker state for one subtree walk.
///
/// Only counters live here; every board is passed by value through
/// the recursion.
pub(crate) struct Minimax<'a, H> {
    heuristic: &'a H,
    pruning: bool,
    token: &'a CancelToken,
    stats: SearchStats,
}

/// One ply less of remaining depth. `None` means unbounded.
fn deeper(depth: Option<u32>) -> Option<u32> {
    depth.map(|remaining| remaining.saturating_sub(1))
}

impl<'a, H> Minimax<'a, H> {
    pub(crate) fn new(heuristic: &'a H, pruning: bool, token: &'a CancelToken) -> Self {
        Self {
            heuristic,
            pruning,
            token,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Value of `state` for the maximizing player (First to move).
    pub(crate) fn max_value<G>(
        &mut self,
        state: &G,
        depth: Option<u32>,
        mut alpha: Score,
        beta: Score,
    ) -> Score
    where
        G: Game,
        H: Heuristic<G>,
    {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf(state, depth) {
            return score;
        }

        let mut best: Option<Score> = None;
        for action in state.actions() {
            if self.token.is_cancelled() {
                break;
            }
            let Some(child) = self.child(state, action) else {
                continue;
            };

            let value = self.min_value(&child, deeper(depth), alpha, beta);
            let v = best.map_or(value, |best| best.max(value));
            best = Some(v);
            alpha = alpha.max(v);

            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best.unwrap_or_else(|| self.estimate(state))
    }

    /// Value of `state` for the minimizing player (Second to move).
    pub(crate) fn min_value<G>(
        &mut self,
        state: &G,
        depth: Option<u32>,
        alpha: Score,
        mut beta: Score,
    ) -> Score
    where
        G: Game,
        H: Heuristic<G>,
    {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf(state, depth) {
            return score;
        }

        let mut best: Option<Score> = None;
        for action in state.actions() {
            if self.token.is_cancelled() {
                break;
            }
            let Some(child) = self.child(state, action) else {
                continue;
            };

            let value = self.max_value(&child, deeper(depth), alpha, beta);
            let v = best.map_or(value, |best| best.min(value));
            best = Some(v);
            beta = beta.min(v);

            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best.unwrap_or_else(|| self.estimate(state))
    }

    /// Scores states the search does not expand: finished games, the depth
    /// cutoff, and anything reached after cancellation.
    fn leaf<G>(&mut self, state: &G, depth: Option<u32>) -> Option<Score>
    where
        G: Game,
        H: Heuristic<G>,
    {
        if state.is_terminal() {
            return Some(self.terminal_score(state));
        }
        if depth == Some(0) || self.token.is_cancelled() {
            return Some(self.estimate(state));
        }
        None
    }

    /// Scaled utility of a finished game.
    pub(crate) fn terminal_score<G: Game>(&mut self, state: &G) -> Score {
        match state.utility() {
            Ok(utility) => utility.saturating_mul(WIN_SCORE),
            Err(err) => {
                error!(%err, "Utility failed on a terminal state");
                self.stats.rule_errors += 1;
                0
            }
        }
    }

    /// Heuristic estimate, kept strictly inside the proven-result range.
    pub(crate) fn estimate<G>(&mut self, state: &G) -> Score
    where
        H: Heuristic<G>,
    {
        self.stats.heuristic_evals += 1;
        self.heuristic
            .evaluate(state)
            .clamp(-(WIN_SCORE - 1), WIN_SCORE - 1)
    }

    /// Applies an action taken from `state.actions()`.
    pub(crate) fn child<G: Game>(&mut self, state: &G, action: G::Action) -> Option<G> {
        match state.result(action) {
            Ok(child) => Some(child),
            Err(err) => {
                error!(%err, ?action, "Generated action was rejected");
                self.stats.rule_errors += 1;
                None
            }
        }
    }
}
