//! Starting, finishing and resetting the active game.

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::{
    ArchiveConsistencyError, Game, GameArchive, GameError, GameId, LineScores, Side, rules,
};

/// Returns the empty, not yet started game.
#[instrument]
pub fn prepare_game_data() -> Game {
    Game::new()
}

/// Resets to an empty game and gives the first turn to `side`.
#[instrument]
pub fn choose_turn_and_start(side: Side) -> Game {
    debug!("Replacing active game");
    crate::choose_turn(side)
}

/// Plays the current side's mark at `(row, col)` and settles the outcome.
///
/// Placement, turn change and line scoring happen on a copy that is only
/// returned once complete. A move that wins or fills the board stamps the
/// finish time and records the winner.
///
/// # Errors
///
/// - [`GameError::Turn`] if the game is finished or not started.
/// - [`GameError::Move`] if the cell is occupied or out of range.
/// - [`GameError::Invariant`] if a debug-build invariant check fails.
#[instrument(skip(game), fields(turn = ?game.turn()))]
pub fn record_move(game: &Game, row: usize, col: usize) -> Result<Game, GameError> {
    let (mut next, to_move) = crate::change_turn_and_value(game, row, col)?;
    let side = to_move.opponent();

    // Scores missing from a decoded game are rebuilt from the prior board
    let mut scores = game
        .line_scores
        .unwrap_or_else(|| LineScores::rescan(&game.board));
    let outcome = rules::evaluate(&mut scores, &next.board, row, col, side);
    next.line_scores = Some(scores);

    if let Some(winner) = outcome {
        next.date = Some(Utc::now());
        next.done = true;
        next.winner = Some(winner);
        info!(%winner, moves = next.moves_played(), "Game finished");
    } else {
        debug!(moves = next.moves_played(), "Game continues");
    }

    #[cfg(debug_assertions)]
    check_invariants(&next)?;

    Ok(next)
}

/// Runs the game invariant set, folding violations into one error.
#[cfg(debug_assertions)]
#[instrument(skip(game))]
fn check_invariants(game: &Game) -> Result<(), GameError> {
    use crate::invariants::{GameInvariants, InvariantSet};

    GameInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!(%descriptions, "Game invariants violated");
        GameError::Invariant(descriptions)
    })
}

/// Copies `game` into `archive` and returns its id.
///
/// # Errors
///
/// Returns [`ArchiveConsistencyError`] if the archive's last id does not
/// match its length.
#[instrument(skip(archive, game), fields(status = ?game.status()))]
pub fn save_game(
    archive: &mut GameArchive,
    game: &Game,
) -> Result<GameId, ArchiveConsistencyError> {
    archive.insert(game)
}

/// Archives `game` and returns its id with a fresh game to continue with.
///
/// # Errors
///
/// See [`save_game`]. The fresh game is only produced when the save
/// succeeds.
#[instrument(skip(archive, game))]
pub fn save_and_go_next(
    archive: &mut GameArchive,
    game: &Game,
) -> Result<(GameId, Game), ArchiveConsistencyError> {
    let id = save_game(archive, game)?;
    debug!(id, "Saved, preparing next game");
    Ok((id, prepare_game_data()))
}
