//! Error types for moves, turns and the archive.

use derive_more::{Display, Error};

use crate::{GameId, Side};

/// A move that cannot be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied by {occupant}")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side already holding the cell.
        occupant: Side,
    },
}

/// A move submitted when no side may act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// No side has been chosen for this game.
    #[display("Game has not been started")]
    NotStarted,
}

/// The archive's last game does not carry an id equal to the archive length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, derive_new::new)]
#[display("Archive tail has id {assigned} but holds {length} games")]
pub struct ArchiveConsistencyError {
    /// Id found on the last archived game, 0 if it has none.
    pub assigned: GameId,
    /// Archive length before the rejected insert.
    pub length: usize,
}

/// Any failure surfaced by the game store.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Rejected move.
    #[display("Invalid move: {_0}")]
    Move(#[error(source)] MoveError),

    /// Move submitted out of turn.
    #[display("Invalid turn: {_0}")]
    Turn(#[error(source)] TurnError),

    /// Archive invariant broken.
    #[display("{_0}")]
    Archive(#[error(source)] ArchiveConsistencyError),

    /// No archived game with this id.
    #[display("No archived game with id {id}")]
    NotFound {
        /// Requested id.
        id: GameId,
    },

    /// A game invariant failed after a transition.
    #[display("Invariant violation: {_0}")]
    Invariant(#[error(not(source))] String),
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<TurnError> for GameError {
    fn from(err: TurnError) -> Self {
        Self::Turn(err)
    }
}

impl From<ArchiveConsistencyError> for GameError {
    fn from(err: ArchiveConsistencyError) -> Self {
        Self::Archive(err)
    }
}
