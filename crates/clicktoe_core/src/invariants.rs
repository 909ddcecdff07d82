//! Properties every reachable [`Game`] satisfies.
//!
//! Checked after each placement in debug builds and testable on their own.

use crate::{Board, Game, Mark, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Marks are never overwritten: replaying the history on an empty board,
/// alternating from X, reproduces the board and never lands on an occupied
/// cell.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let mut replayed = Board::new();
        let mut player = Player::X;
        for &cell in game.history() {
            if !replayed.is_vacant(cell) {
                return false;
            }
            replayed.set(cell, Mark::from(player));
            player = player.opponent();
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Cells are never overwritten between resets"
    }
}

/// The side to move agrees with the mark counts: X to move when both
/// players have the same number of marks, O when X has one more.
pub struct AlternatingTurn;

impl Invariant<Game> for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let xs = game.board().count(Player::X);
        let os = game.board().count(Player::O);
        match game.to_move() {
            Player::X => xs == os,
            Player::O => xs == os + 1,
        }
    }

    fn description() -> &'static str {
        "Turn alternates with every placement, X first"
    }
}

/// Runs every game invariant, collecting the ones that fail.
pub fn check_invariants(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();
    if !MonotonicBoard::holds(game) {
        violations.push(InvariantViolation {
            description: MonotonicBoard::description(),
        });
    }
    if !AlternatingTurn::holds(game) {
        violations.push(InvariantViolation {
            description: AlternatingTurn::description(),
        });
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
