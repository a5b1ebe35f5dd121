//! The match record: board, turn, scores and result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, Board, GameStatus, LineScores, Side, Winner};

/// Identifier of an archived game, equal to its 1-based archive position.
pub type GameId = usize;

/// Complete state of one match.
///
/// A game is a value: transitions return a new `Game` and leave the input
/// alone. `done` is true exactly when `winner` is set, and `id` is only set
/// on archived copies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    pub(crate) id: Option<GameId>,
    pub(crate) turn: Option<Side>,
    pub(crate) done: bool,
    pub(crate) date: Option<DateTime<Utc>>,
    pub(crate) line_scores: Option<LineScores>,
    pub(crate) winner: Option<Winner>,
    pub(crate) board: Board,
}

impl Game {
    /// Creates an empty, not yet started game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive id, `None` while the game is active.
    pub fn id(&self) -> Option<GameId> {
        self.id
    }

    /// Side allowed to move next.
    pub fn turn(&self) -> Option<Side> {
        self.turn
    }

    /// Whether the game reached a terminal state.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Time the game finished.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Running line sums, `None` before the first move.
    pub fn line_scores(&self) -> Option<&LineScores> {
        self.line_scores.as_ref()
    }

    /// Result of a finished game.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.board.empty_cells().len()
    }

    /// Derives the game phase from its fields.
    pub fn status(&self) -> GameStatus {
        match (self.done, self.winner, self.turn) {
            (true, Some(winner), _) => winner.side().map_or(GameStatus::Draw, GameStatus::Won),
            (_, _, None) => GameStatus::NotStarted,
            _ => GameStatus::InProgress,
        }
    }
}

/// Checks if every cell of the game's board is occupied.
pub fn is_board_full(game: &Game) -> bool {
    game.board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.id(), None);
        assert_eq!(game.winner(), None);
        assert!(!game.done());
        assert!(!is_board_full(&game));
    }

    #[test]
    fn test_serializes_nulls_for_fresh_game() {
        let json = serde_json::to_value(Game::new()).unwrap();
        assert!(json["id"].is_null());
        assert!(json["turn"].is_null());
        assert!(json["winner"].is_null());
        assert_eq!(json["done"], false);
    }
}
