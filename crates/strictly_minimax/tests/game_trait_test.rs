//! The engine runs on any `Game`, not just boards.

use strictly_minimax::{Game, Player, RulesError, SearchConfig, Searcher};

/// Subtraction game: take 1 to 3 stones; whoever takes the last stone wins.
#[derive(Debug, Clone, Copy)]
struct Stones {
    left: u32,
    next: Player,
}

impl Game for Stones {
    type Action = u32;

    fn to_move(&self) -> Option<Player> {
        (!self.is_terminal()).then_some(self.next)
    }

    fn actions(&self) -> Vec<u32> {
        (1..=self.left.min(3)).collect()
    }

    fn result(&self, take: u32) -> Result<Self, RulesError> {
        if self.is_terminal() || take == 0 || take > self.left.min(3) {
            return Err(RulesError::GameOver);
        }
        Ok(Self {
            left: self.left - take,
            next: self.next.opponent(),
        })
    }

    fn is_terminal(&self) -> bool {
        self.left == 0
    }

    fn utility(&self) -> Result<i32, RulesError> {
        if !self.is_terminal() {
            return Err(RulesError::NotTerminal);
        }
        match self.next.opponent() {
            Player::First => Ok(1),
            Player::Second => Ok(-1),
        }
    }
}

#[test]
fn test_takes_to_a_multiple_of_four() {
    let searcher = Searcher::new(SearchConfig::default());
    for left in [5, 6, 7, 9, 10, 11] {
        let outcome = searcher
            .search(&Stones { left, next: Player::First })
            .unwrap();
        assert_eq!(*outcome.action(), left % 4);
        assert_eq!(outcome.utility(), 1);
    }
}

#[test]
fn test_lost_position_keeps_first_action() {
    let outcome = Searcher::new(SearchConfig::default())
        .search(&Stones { left: 8, next: Player::Second })
        .unwrap();
    assert_eq!(*outcome.action(), 1);
    // Second is lost, so First wins.
    assert_eq!(outcome.utility(), 1);
}

#[test]
fn test_pruning_agrees_on_stones() {
    let pruned = Searcher::new(SearchConfig::default());
    let exhaustive = Searcher::new(SearchConfig::default().with_pruning(false));
    for left in 1..=12 {
        for next in [Player::First, Player::Second] {
            let state = Stones { left, next };
            let a = pruned.search(&state).unwrap();
            let b = exhaustive.search(&state).unwrap();
            assert_eq!(a.action(), b.action());
            assert_eq!(a.value(), b.value());
        }
    }
}

#[test]
fn test_finished_game_has_no_move() {
    let state = Stones { left: 0, next: Player::First };
    assert!(Searcher::new(SearchConfig::default()).search(&state).is_none());
}
