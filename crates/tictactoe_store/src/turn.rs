//! Turn alternation and move placement.

use tracing::{debug, instrument, warn};

use crate::{Game, GameError, LineScores, Side, TurnError};

/// Starts a fresh game with `side` to move.
#[instrument]
pub fn choose_turn(side: Side) -> Game {
    debug!("Starting game");
    Game {
        turn: Some(side),
        line_scores: Some(LineScores::new()),
        ..Game::new()
    }
}

/// Places the current side's mark at `(row, col)` and passes the turn.
///
/// Returns the updated game together with the side now to move. The input
/// game is left unchanged, so callers never observe a placed mark without
/// the flipped turn.
///
/// # Errors
///
/// - [`TurnError::GameOver`] if the game is already done.
/// - [`TurnError::NotStarted`] if no side has been chosen.
/// - [`crate::MoveError`] if the cell is occupied or out of range.
#[instrument(skip(game), fields(turn = ?game.turn, done = game.done))]
pub fn change_turn_and_value(
    game: &Game,
    row: usize,
    col: usize,
) -> Result<(Game, Side), GameError> {
    if game.done {
        warn!("Move submitted after the game ended");
        return Err(TurnError::GameOver.into());
    }
    let side = game.turn.ok_or_else(|| {
        warn!("Move submitted before a side was chosen");
        TurnError::NotStarted
    })?;

    let board = game.board.apply_move(row, col, side)?;
    let next = side.opponent();

    debug!(?side, ?next, "Mark placed, turn passed");
    Ok((
        Game {
            board,
            turn: Some(next),
            ..game.clone()
        },
        next,
    ))
}
