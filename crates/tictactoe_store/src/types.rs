//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Side of the match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    /// Cross, scores +1 on every line it touches.
    Cross,
    /// Circle, scores -1 on every line it touches.
    Circle,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Cross => Side::Circle,
            Side::Circle => Side::Cross,
        }
    }

    /// Points this side contributes to a line sum.
    pub fn point(self) -> i8 {
        match self {
            Side::Cross => 1,
            Side::Circle => -1,
        }
    }

    /// Single-character symbol used in board rendering.
    pub fn symbol(self) -> char {
        match self {
            Side::Cross => 'X',
            Side::Circle => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell owned by a side.
    Marked(Side),
}

impl Cell {
    /// Returns the owning side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Result recorded on a finished game.
///
/// Serialized as `"cross"`, `"circle"` or `"No winner"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Winner {
    /// Cross completed a line.
    #[serde(rename = "cross")]
    #[strum(serialize = "cross")]
    Cross,
    /// Circle completed a line.
    #[serde(rename = "circle")]
    #[strum(serialize = "circle")]
    Circle,
    /// Board filled with no completed line.
    #[serde(rename = "No winner")]
    #[strum(serialize = "No winner")]
    NoWinner,
}

impl Winner {
    /// Returns the winning side, `None` for a draw.
    pub fn side(self) -> Option<Side> {
        match self {
            Winner::Cross => Some(Side::Cross),
            Winner::Circle => Some(Side::Circle),
            Winner::NoWinner => None,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Cross => Winner::Cross,
            Side::Circle => Winner::Circle,
        }
    }
}

/// Phase of a game, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No side has been chosen yet.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// Board filled without a completed line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}
