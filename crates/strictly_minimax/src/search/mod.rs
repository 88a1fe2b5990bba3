//! Adversarial search: minimax with alpha-beta pruning.
//!
//! [`best_action`] is the full-depth solver for the concrete game.
//! [`Searcher`] is the configurable engine behind it: it runs on any
//! [`Game`], can stop at a depth cutoff and fall back to a
//! [`Heuristic`], can fan the root out over the rayon pool, and can be
//! cancelled through a [`CancelToken`].
//!
//! Scores are from First's point of view. A finished game scores
//! `utility * WIN_SCORE`; heuristic estimates stay strictly between
//! `-WIN_SCORE` and `WIN_SCORE`.

pub mod cancel;
pub mod heuristic;
mod minimax;
pub mod stats;

use crate::config::SearchConfig;
use crate::game::Game;
use crate::types::{Action, Board, Player};
use cancel::CancelToken;
use derive_getters::Getters;
use heuristic::{Heuristic, NoHeuristic};
use minimax::Minimax;
use rayon::prelude::*;
use stats::SearchStats;
use tracing::{debug, error, info, instrument, warn};

/// Search score. Positive favors First.
pub type Score = i32;

/// Score of a won game. One unit of utility.
pub const WIN_SCORE: Score = 1_000;

/// Initial `alpha`: nothing is guaranteed to the maximizer yet.
pub const NEG_INFINITY: Score = Score::MIN;

/// Initial `beta`: nothing is guaranteed to the minimizer yet.
pub const POS_INFINITY: Score = Score::MAX;

/// The chosen move and what the search learned getting there.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SearchOutcome<A> {
    /// Best action for the player to move.
    action: A,
    /// Score of `action`.
    value: Score,
    /// Node counters summed over all workers.
    stats: SearchStats,
    /// False when the search was cancelled before it finished.
    completed: bool,
}

impl<A> SearchOutcome<A> {
    /// The value in utility units.
    ///
    /// Exact for a completed full-depth search. Heuristic estimates
    /// truncate to 0.
    pub fn utility(&self) -> i32 {
        self.value / WIN_SCORE
    }
}

/// Configurable minimax engine.
#[derive(Debug, Clone)]
pub struct Searcher<H = NoHeuristic> {
    config: SearchConfig,
    heuristic: H,
}

impl Searcher<NoHeuristic> {
    /// Creates an engine with no heuristic.
    ///
    /// Suitable for full-depth search. Pair a depth limit with
    /// [`with_heuristic`](Self::with_heuristic).
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            heuristic: NoHeuristic,
        }
    }
}

impl<H> Searcher<H> {
    /// Replaces the heuristic used at the depth cutoff.
    pub fn with_heuristic<H2>(self, heuristic: H2) -> Searcher<H2> {
        Searcher {
            config: self.config,
            heuristic,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `state`, arming a deadline if the config has a time limit.
    ///
    /// Returns `None` iff `state` is terminal.
    pub fn search<G>(&self, state: &G) -> Option<SearchOutcome<G::Action>>
    where
        G: Game,
        H: Heuristic<G>,
    {
        let token = match self.config.time_limit() {
            Some(limit) => CancelToken::after(limit),
            None => CancelToken::new(),
        };
        self.search_with_token(state, &token)
    }

    /// Searches `state` until done or until `token` fires.
    ///
    /// A cancelled search still evaluates every root action, cheaply, and
    /// returns the best of them with `completed` set to false.
    #[instrument(
        skip_all,
        fields(
            pruning = *self.config.pruning(),
            parallel = *self.config.parallel(),
            max_depth = ?self.config.max_depth(),
        )
    )]
    pub fn search_with_token<G>(
        &self,
        state: &G,
        token: &CancelToken,
    ) -> Option<SearchOutcome<G::Action>>
    where
        G: Game,
        H: Heuristic<G>,
    {
        let player = state.to_move()?;
        let actions = state.actions();
        let depth = self.config.max_depth().map(|plies| plies.saturating_sub(1));

        let evaluate = |action: &G::Action| {
            let mut minimax = Minimax::new(&self.heuristic, *self.config.pruning(), token);
            let value = minimax.child(state, *action).map(|child| match player {
                Player::First => minimax.min_value(&child, depth, NEG_INFINITY, POS_INFINITY),
                Player::Second => minimax.max_value(&child, depth, NEG_INFINITY, POS_INFINITY),
            });
            debug!(?action, ?value, "Scored root action");
            (*action, value, minimax.into_stats())
        };

        let scored: Vec<(G::Action, Option<Score>, SearchStats)> = if *self.config.parallel() {
            actions.par_iter().map(evaluate).collect()
        } else {
            actions.iter().map(evaluate).collect()
        };

        let root = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        let stats = root + scored.iter().map(|(_, _, stats)| *stats).sum::<SearchStats>();

        let mut best: Option<(G::Action, Score)> = None;
        for (action, value, _) in scored {
            let Some(value) = value else { continue };
            let improves = match (player, best) {
                (_, None) => true,
                (Player::First, Some((_, best_value))) => value > best_value,
                (Player::Second, Some((_, best_value))) => value < best_value,
            };
            if improves {
                best = Some((action, value));
            }
        }

        let Some((action, value)) = best else {
            error!("No root action could be applied");
            return None;
        };

        let completed = !token.is_cancelled();
        if completed {
            info!(?action, value, nodes = stats.nodes, cutoffs = stats.cutoffs, "Search complete");
        } else {
            warn!(?action, value, nodes = stats.nodes, "Search cancelled, returning best so far");
        }

        Some(SearchOutcome {
            action,
            value,
            stats,
            completed,
        })
    }
}

/// Returns an optimal action for the player to move, or `None` when the
/// game is over.
///
/// Runs a full-depth alpha-beta search. Among equally good actions the
/// first in row-major order wins, so the result is deterministic.
/// Full depth is only practical on small boards; use a depth-limited
/// [`Searcher`] beyond 3×3.
#[instrument(skip(board))]
pub fn best_action<const N: usize>(board: &Board<N>) -> Option<Action> {
    Searcher::new(SearchConfig::default())
        .search(board)
        .map(|outcome| outcome.action)
}
