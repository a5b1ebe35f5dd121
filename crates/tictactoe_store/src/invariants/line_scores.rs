//! Line score invariant: running sums agree with the board.

use super::Invariant;
use crate::{Game, LineScores};

/// Invariant: incremental line scores equal a full rescan of the board.
///
/// A game without scores must have an empty board.
pub struct LineScoresInvariant;

impl Invariant<Game> for LineScoresInvariant {
    fn holds(game: &Game) -> bool {
        let rescanned = LineScores::rescan(game.board());
        match game.line_scores() {
            Some(scores) => *scores == rescanned,
            None => rescanned == LineScores::new(),
        }
    }

    fn description() -> &'static str {
        "Line scores match a full board rescan"
    }
}
