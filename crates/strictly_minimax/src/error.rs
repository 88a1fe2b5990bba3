//! Error types for rules, board parsing, and configuration.

use crate::types::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Precondition violations raised by the rules.
///
/// These signal a defect in whoever built the call, so nothing in the
/// crate catches or retries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", action)]
    CellOccupied {
        /// The rejected action.
        #[error(not(source))]
        action: Action,
    },

    /// A coordinate lies outside `[0, size)`.
    #[display("Action {} is outside the {}x{} board", action, size, size)]
    OutOfBounds {
        /// The rejected action.
        #[error(not(source))]
        action: Action,
        /// Side length of the board.
        size: usize,
    },

    /// The game is already over, so nobody can move.
    #[display("Game is already over")]
    GameOver,

    /// Utility was requested for a board that is still in play.
    #[display("Utility is only defined for terminal boards")]
    NotTerminal,
}

/// Failure to build a board from text or serialized rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of rows.
    #[display("Expected {} rows, found {}", expected, found)]
    RowCount {
        /// Rows required by the board size.
        expected: usize,
        /// Rows supplied.
        found: usize,
    },

    /// A row with the wrong number of cells.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Cells required by the board size.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },

    /// A character that is not `X`, `O`, or `.`.
    #[display("Unknown symbol {:?} in row {}", symbol, row)]
    UnknownSymbol {
        /// Index of the offending row.
        row: usize,
        /// The unrecognized character.
        symbol: char,
    },
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
