//! Terminal detection and utility for tic-tac-toe.

use super::win::winner;
use crate::error::RulesError;
use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}

/// True when the game is decided or no empty cell remains.
#[instrument(skip(board))]
pub fn is_terminal<const N: usize>(board: &Board<N>) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished game: `+1` First wins, `-1` Second wins, `0` draw.
///
/// # Errors
///
/// [`RulesError::NotTerminal`] if the game is still in play.
#[instrument(skip(board))]
pub fn utility<const N: usize>(board: &Board<N>) -> Result<i32, RulesError> {
    match winner(board) {
        Some(Player::First) => Ok(1),
        Some(Player::Second) => Ok(-1),
        None if is_full(board) => Ok(0),
        None => Err(RulesError::NotTerminal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TicTacToe, initial_state};

    #[test]
    fn test_empty_board_not_terminal() {
        let board = initial_state();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board), Err(RulesError::NotTerminal));
    }

    #[test]
    fn test_partial_board_not_terminal() {
        let board: TicTacToe = "X..\n.O.\n..X".parse().unwrap();
        assert!(!is_terminal(&board));
        assert_eq!(utility(&board), Err(RulesError::NotTerminal));
    }

    #[test]
    fn test_draw() {
        let board: TicTacToe = "XOX\nOXX\nOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), Ok(0));
    }

    #[test]
    fn test_win_before_full() {
        let board: TicTacToe = "XXX\nOO.\n...".parse().unwrap();
        assert!(!is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(utility(&board), Ok(1));

        let board: TicTacToe = "XX.\nOOO\nX..".parse().unwrap();
        assert_eq!(utility(&board), Ok(-1));
    }

    #[test]
    fn test_win_on_full_board() {
        let board: TicTacToe = "XOX\nOXO\nOXX".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(utility(&board), Ok(1));
    }
}
