//! Balanced marks invariant: sides alternate, so counts differ by at most one.

use super::Invariant;
use crate::{Game, Side};

/// Invariant: the two sides' mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.count(Side::Cross).abs_diff(board.count(Side::Circle)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts of both sides differ by at most one"
    }
}
