//! The transition function: applying a move to a board.

use super::turn::player_to_move;
use crate::error::RulesError;
use crate::types::{Action, Board, Cell};
use tracing::instrument;

/// Places the current player's mark at `action` and returns the new board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`RulesError::OutOfBounds`] if the row or the column lies outside
///   the board. Each coordinate is checked on its own.
/// - [`RulesError::CellOccupied`] if the cell already holds a mark.
/// - [`RulesError::GameOver`] if the game has already ended.
#[instrument(skip(board))]
pub fn apply<const N: usize>(board: &Board<N>, action: Action) -> Result<Board<N>, RulesError> {
    if action.row >= N || action.col >= N {
        return Err(RulesError::OutOfBounds { action, size: N });
    }

    if board.get(action) != Some(Cell::Empty) {
        return Err(RulesError::CellOccupied { action });
    }

    let player = player_to_move(board).ok_or(RulesError::GameOver)?;
    Ok(board.with(action, Cell::Occupied(player)))
}
