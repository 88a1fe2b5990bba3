//! Rule properties checked over every reachable 3×3 position.

mod common;

use strictly_minimax::{
    Action, Cell, Player, RulesError, TicTacToe, apply, initial_state, is_terminal,
    legal_actions, player_to_move, utility, winner, winning_lines,
};
use strum::IntoEnumIterator;

#[test]
fn test_initial_state() {
    let board = initial_state();
    assert!(!is_terminal(&board));
    assert_eq!(legal_actions(&board).len(), 9);
    assert_eq!(player_to_move(&board), Some(Player::First));
    assert_eq!(winner(&board), None);
}

#[test]
fn test_reachable_position_count() {
    // The classical count of legal tic-tac-toe positions.
    assert_eq!(common::reachable::<3>().len(), 5478);
}

#[test]
fn test_turns_alternate_along_every_line_of_play() {
    common::init_tracing();
    for board in common::reachable::<3>() {
        let Some(mover) = player_to_move(&board) else {
            assert!(is_terminal(&board));
            continue;
        };
        for action in legal_actions(&board) {
            let child = apply(&board, action).unwrap();
            assert_eq!(child.get(action), Some(Cell::Occupied(mover)));
            if !is_terminal(&child) {
                assert_eq!(player_to_move(&child), Some(mover.opponent()));
            }
        }
    }
}

#[test]
fn test_terminal_iff_no_actions() {
    for board in common::reachable::<3>() {
        assert_eq!(is_terminal(&board), legal_actions(&board).is_empty());
        assert_eq!(is_terminal(&board), player_to_move(&board).is_none());
        assert_eq!(is_terminal(&board), utility(&board).is_ok());
    }
}

#[test]
fn test_reachable_boards_have_one_winner_at_most() {
    for board in common::reachable::<3>() {
        let winners: Vec<Player> = Player::iter()
            .filter(|player| {
                winning_lines::<3>().any(|line| {
                    line.iter()
                        .all(|action| board.get(*action) == Some(Cell::Occupied(*player)))
                })
            })
            .collect();
        assert!(winners.len() <= 1, "both players won on\n{}", board);
        assert_eq!(winners.first().copied(), winner(&board));
    }
}

#[test]
fn test_apply_never_mutates() {
    let board: TicTacToe = "X..\n.O.\n...".parse().unwrap();
    let snapshot = board;
    for action in legal_actions(&board) {
        let _ = apply(&board, action).unwrap();
    }
    assert_eq!(board, snapshot);
}

#[test]
fn test_apply_errors() {
    let board: TicTacToe = "X..\n...\n...".parse().unwrap();
    assert!(matches!(
        apply(&board, Action::new(0, 0)),
        Err(RulesError::CellOccupied { .. })
    ));
    assert!(matches!(
        apply(&board, Action::new(3, 1)),
        Err(RulesError::OutOfBounds { .. })
    ));
    assert!(matches!(
        apply(&board, Action::new(1, 3)),
        Err(RulesError::OutOfBounds { .. })
    ));
    assert!(matches!(
        apply(&board, Action::new(usize::MAX, 0)),
        Err(RulesError::OutOfBounds { .. })
    ));
}

#[test]
fn test_utility_signs() {
    let first: TicTacToe = "X.O\nXO.\nX..".parse().unwrap();
    let second: TicTacToe = "X.O\nXO.\nO.X".parse().unwrap();
    let draw: TicTacToe = "XOX\nXOO\nOXX".parse().unwrap();
    assert_eq!(utility(&first), Ok(1));
    assert_eq!(utility(&second), Ok(-1));
    assert_eq!(utility(&draw), Ok(0));
}

#[test]
fn test_board_serializes_as_rows() {
    let board: TicTacToe = "X..\n.O.\n...".parse().unwrap();
    let json = serde_json::to_value(board).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert_eq!(json[0][0], serde_json::json!({ "Occupied": "First" }));
    assert_eq!(json[0][1], serde_json::json!("Empty"));

    let back: TicTacToe = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_board_rejects_wrong_shape() {
    let json = serde_json::json!([["Empty", "Empty"], ["Empty", "Empty"]]);
    assert!(serde_json::from_value::<TicTacToe>(json).is_err());
}
