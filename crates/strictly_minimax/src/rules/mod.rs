//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values: whose turn it is,
//! which moves exist, what a move produces, and how a game ended.

pub mod outcome;
pub mod transition;
pub mod turn;
pub mod win;

pub use outcome::{is_full, is_terminal, utility};
pub use transition::apply;
pub use turn::{legal_actions, player_to_move};
pub use win::{Line, winner, winning_lines};
