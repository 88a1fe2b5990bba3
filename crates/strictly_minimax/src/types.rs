//! Core domain types for N×N tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// The player who moves first (marks `X`).
    First,
    /// The player who moves second (marks `O`).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Occupied(Player::First)),
            'O' | 'o' => Some(Cell::Occupied(Player::Second)),
            _ => None,
        }
    }
}

/// A move: the coordinate of the cell to mark.
///
/// Only meaningful relative to the board it was enumerated from.
/// Orders row-major, which is the enumeration order used everywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    /// Row index, from the top.
    pub row: usize,
    /// Column index, from the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square N×N board.
///
/// Boards are plain values: every transition produces a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Cell>>", try_from = "Vec<Vec<Cell>>")]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

/// The classical 3×3 game.
pub type TicTacToe = Board<3>;

/// Returns the empty 3×3 starting board.
#[instrument]
pub fn initial_state() -> TicTacToe {
    Board::new()
}

impl<const N: usize> Board<N> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// The result need not be reachable by legal play.
    pub fn from_rows(cells: [[Cell; N]; N]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `action`, or `None` when it lies off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells.get(action.row)?.get(action.col).copied()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Empty)
            .count()
    }

    /// Iterates every coordinate in row-major order.
    pub fn coordinates() -> impl Iterator<Item = Action> {
        (0..N).flat_map(|row| (0..N).map(move |col| Action::new(row, col)))
    }

    /// Returns a copy with `action` set to `cell`. Callers check bounds.
    pub(crate) fn with(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row][action.col] = cell;
        self
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .map(|symbol| {
                        Cell::from_symbol(symbol)
                            .ok_or(BoardParseError::UnknownSymbol { row, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(rows)
    }
}

impl<const N: usize> From<Board<N>> for Vec<Vec<Cell>> {
    fn from(board: Board<N>) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl<const N: usize> TryFrom<Vec<Vec<Cell>>> for Board<N> {
    type Error = BoardParseError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != N {
            return Err(BoardParseError::RowCount {
                expected: N,
                found: rows.len(),
            });
        }

        let mut cells = [[Cell::Empty; N]; N];
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != N {
                return Err(BoardParseError::RowLength {
                    row,
                    expected: N,
                    found: values.len(),
                });
            }
            cells[row].copy_from_slice(&values);
        }
        Ok(Self { cells })
    }
}
