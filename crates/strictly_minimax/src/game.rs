//! The two-player zero-sum game abstraction the search engine runs on.

use crate::error::RulesError;
use crate::rules;
use crate::types::{Action, Board, Player};
use std::fmt::Debug;

/// A two-player, zero-sum, perfect-information game state.
///
/// Implementations are immutable values: [`Game::result`] returns a new
/// state and leaves `self` alone. Utilities are from the point of view of
/// [`Player::First`], who maximizes.
pub trait Game: Clone + Send + Sync {
    /// A move in this game.
    type Action: Copy + Debug + PartialEq + Send + Sync;

    /// The player to move, or `None` on a terminal state.
    fn to_move(&self) -> Option<Player>;

    /// Legal moves in a fixed, deterministic order. Empty when terminal.
    fn actions(&self) -> Vec<Self::Action>;

    /// The state produced by playing `action`.
    fn result(&self, action: Self::Action) -> Result<Self, RulesError>;

    /// True when the game is over.
    fn is_terminal(&self) -> bool;

    /// Outcome of a terminal state: positive favors First.
    fn utility(&self) -> Result<i32, RulesError>;
}

impl<const N: usize> Game for Board<N> {
    type Action = Action;

    fn to_move(&self) -> Option<Player> {
        rules::player_to_move(self)
    }

    fn actions(&self) -> Vec<Action> {
        rules::legal_actions(self).into_iter().collect()
    }

    fn result(&self, action: Action) -> Result<Self, RulesError> {
        rules::apply(self, action)
    }

    fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    fn utility(&self) -> Result<i32, RulesError> {
        rules::utility(self)
    }
}
