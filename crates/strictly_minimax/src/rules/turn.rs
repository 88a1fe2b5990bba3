//! Turn resolution and move generation.

use super::outcome::is_terminal;
use crate::types::{Action, Board, Cell, Player};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the player whose turn it is, or `None` once the game is over.
///
/// Turn order is derived from how many cells are empty, assuming strict
/// alternation from an empty board with First to move. On a 3×3 board an
/// odd number of empty cells means First is to move.
#[instrument(skip(board))]
pub fn player_to_move<const N: usize>(board: &Board<N>) -> Option<Player> {
    if is_terminal(board) {
        return None;
    }

    if board.empty_count() % 2 == (N * N) % 2 {
        Some(Player::First)
    } else {
        Some(Player::Second)
    }
}

/// Returns every empty coordinate, ordered row-major.
///
/// A finished game has no legal actions.
#[instrument(skip(board))]
pub fn legal_actions<const N: usize>(board: &Board<N>) -> BTreeSet<Action> {
    if is_terminal(board) {
        return BTreeSet::new();
    }

    Board::<N>::coordinates()
        .filter(|action| board.get(*action) == Some(Cell::Empty))
        .collect()
}
