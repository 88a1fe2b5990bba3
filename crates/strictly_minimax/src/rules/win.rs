//! Win detection logic for tic-tac-toe.

use crate::types::{Action, Board, Cell, Player};
use tracing::instrument;

/// N cells that win the game when one player holds all of them.
pub type Line<const N: usize> = [Action; N];

/// Enumerates the 2N+2 winning lines.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal.
pub fn winning_lines<const N: usize>() -> impl Iterator<Item = Line<N>> {
    let rows = (0..N).map(|row| -> Line<N> { std::array::from_fn(|col| Action::new(row, col)) });
    let cols = (0..N).map(|col| -> Line<N> { std::array::from_fn(|row| Action::new(row, col)) });
    let main: Line<N> = std::array::from_fn(|i| Action::new(i, i));
    let anti: Line<N> = std::array::from_fn(|i| Action::new(i, N - 1 - i));

    rows.chain(cols).chain([main, anti])
}

/// Returns the owner of `line` if a single player holds every cell of it.
pub(crate) fn line_owner<const N: usize>(board: &Board<N>, line: &Line<N>) -> Option<Player> {
    let head = board.get(*line.first()?)?.player()?;
    line.iter()
        .all(|action| board.get(*action) == Some(Cell::Occupied(head)))
        .then_some(head)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first winning line in [`winning_lines`] order.
/// Reachable boards have at most one winning line, so the order only
/// matters for boards built directly.
#[instrument(skip(board))]
pub fn winner<const N: usize>(board: &Board<N>) -> Option<Player> {
    winning_lines::<N>().find_map(|line| line_owner(board, &line))
}
