//! Strictly Minimax - a perfect-play tic-tac-toe solver
//!
//! Pure rules for N×N tic-tac-toe and an alpha-beta minimax engine on top
//! of them. Boards are plain `Copy` values; every operation takes a board
//! and returns a new result without touching shared state.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Action`]
//! - **Rules**: [`player_to_move`], [`legal_actions`], [`apply`],
//!   [`winner`], [`is_terminal`], [`utility`]
//! - **Search**: [`best_action`] for full-depth play, [`Searcher`] for
//!   depth limits, heuristics, a parallel root, and cancellation
//! - **Config**: [`SearchConfig`], loadable from TOML
//!
//! Driving a game loop, rendering, and input belong to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, best_action, initial_state, is_terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_action(&board) {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board)?, 0);
//! # Ok::<(), strictly_minimax::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod game;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use types::{Action, Board, Cell, Player, TicTacToe, initial_state};

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, RulesError};

// Crate-level exports - Rules
pub use rules::{
    Line, apply, is_full, is_terminal, legal_actions, player_to_move, utility, winner,
    winning_lines,
};

// Crate-level exports - Game abstraction
pub use game::Game;

// Crate-level exports - Search
pub use search::cancel::CancelToken;
pub use search::heuristic::{Heuristic, NoHeuristic, OpenLines};
pub use search::stats::SearchStats;
pub use search::{
    NEG_INFINITY, POS_INFINITY, Score, SearchOutcome, Searcher, WIN_SCORE, best_action,
};

// Crate-level exports - Configuration
pub use config::SearchConfig;
