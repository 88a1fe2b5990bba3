//! Shared helpers for integration tests.

use std::collections::HashSet;
use strictly_minimax::{Board, apply, legal_actions};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once. Quiet unless `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Every board reachable by alternating legal play from the empty board.
pub fn reachable<const N: usize>() -> HashSet<Board<N>> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::<N>::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        for action in legal_actions(&board) {
            let child = apply(&board, action).expect("generated action applies");
            stack.push(child);
        }
    }
    seen
}
