//! Static evaluators used when a depth-limited search stops early.

use super::Score;
use crate::rules::{Line, winning_lines};
use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;

/// Estimates the value of a non-terminal state.
///
/// Positive values favor [`Player::First`]. The engine clamps estimates
/// below [`WIN_SCORE`](super::WIN_SCORE) so a proven result always
/// outranks a guess.
pub trait Heuristic<G>: Send + Sync {
    /// Scores `state`.
    fn evaluate(&self, state: &G) -> Score;
}

/// Scores every unfinished state as even.
///
/// Enough for full-depth search, where the heuristic is only consulted
/// after cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHeuristic;

impl<G> Heuristic<G> for NoHeuristic {
    fn evaluate(&self, _state: &G) -> Score {
        0
    }
}

/// Rewards lines that only one player has marked.
///
/// A line holding `k` marks of a single player is worth `k²` to that
/// player. Lines both players have marked are dead and count for nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenLines;

impl OpenLines {
    fn line_score<const N: usize>(board: &Board<N>, line: &Line<N>) -> Score {
        let owners: Vec<(Player, usize)> = Player::iter()
            .map(|player| {
                let marks = line
                    .iter()
                    .filter(|action| board.get(**action) == Some(Cell::Occupied(player)))
                    .count();
                (player, marks)
            })
            .filter(|(_, marks)| *marks > 0)
            .collect();

        match owners.as_slice() {
            [(player, marks)] => {
                let weight = Score::try_from(marks * marks).unwrap_or(Score::MAX);
                match player {
                    Player::First => weight,
                    Player::Second => -weight,
                }
            }
            _ => 0,
        }
    }
}

impl<const N: usize> Heuristic<Board<N>> for OpenLines {
    fn evaluate(&self, state: &Board<N>) -> Score {
        winning_lines::<N>()
            .map(|line| Self::line_score(state, &line))
            .fold(0, Score::saturating_add)
    }
}
