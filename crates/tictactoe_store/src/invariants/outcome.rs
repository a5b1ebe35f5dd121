//! Outcome invariant: a game is done exactly when it has a result.

use super::Invariant;
use crate::Game;

/// Invariant: `done` is true iff `winner` is set, and finished games are dated.
pub struct OutcomeInvariant;

impl Invariant<Game> for OutcomeInvariant {
    fn holds(game: &Game) -> bool {
        game.done() == game.winner().is_some() && (!game.done() || game.date().is_some())
    }

    fn description() -> &'static str {
        "Game is done exactly when a winner is recorded"
    }
}
