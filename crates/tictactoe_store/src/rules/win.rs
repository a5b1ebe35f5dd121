//! Incremental win detection over running line sums.
//!
//! Every line (rows, columns, both diagonals) carries the signed sum of the
//! points played on it. A move only touches the lines it belongs to, so a
//! move is scored in constant time and a line reaching `±BOARD_SIZE` is a
//! completed line.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::{BOARD_SIZE, Board, Side};

/// Number of lines that can be completed: rows, columns and two diagonals.
pub const LINE_COUNT: usize = BOARD_SIZE * 2 + 2;

const MAIN_DIAGONAL: usize = BOARD_SIZE * 2;
const ANTI_DIAGONAL: usize = BOARD_SIZE * 2 + 1;
const TARGET: i8 = BOARD_SIZE as i8;

/// Signed sum of points per line.
///
/// Indices `0..3` are rows, `3..6` columns, `6` the main diagonal and `7`
/// the anti-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineScores([i8; LINE_COUNT]);

impl LineScores {
    /// All lines at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes every line sum from the board contents.
    pub fn rescan(board: &Board) -> Self {
        let mut scores = Self::new();
        for (row, col, cell) in board.cells() {
            if let Some(side) = cell.side() {
                scores.record(row, col, side);
            }
        }
        scores
    }

    /// Adds the point of `side` to every line through `(row, col)`.
    pub fn record(&mut self, row: usize, col: usize, side: Side) {
        let point = side.point();
        self.0[row] += point;
        self.0[BOARD_SIZE + col] += point;
        if row == col {
            self.0[MAIN_DIAGONAL] += point;
        }
        if row + col == BOARD_SIZE - 1 {
            self.0[ANTI_DIAGONAL] += point;
        }
    }

    /// Returns the raw sums.
    pub fn as_array(&self) -> &[i8; LINE_COUNT] {
        &self.0
    }

    /// Returns the side owning a complete line.
    ///
    /// Cross is reported first if both sides somehow own a line; alternating
    /// play never produces that board.
    pub fn winner(&self) -> Option<Side> {
        let cross = self.0.iter().position(|&s| s == TARGET);
        let circle = self.0.iter().position(|&s| s == -TARGET);
        if let (Some(cross_line), Some(circle_line)) = (cross, circle) {
            error!(cross_line, circle_line, "Both sides completed a line");
        }
        match (cross, circle) {
            (Some(_), _) => Some(Side::Cross),
            (None, Some(_)) => Some(Side::Circle),
            (None, None) => None,
        }
    }
}

/// Scores the move just played and reports a completed line.
///
/// `scores` must already reflect every earlier move on the board.
#[instrument(skip(scores))]
pub fn score_move(scores: &mut LineScores, row: usize, col: usize, side: Side) -> Option<Side> {
    scores.record(row, col, side);
    let winner = scores.winner();
    debug!(scores = ?scores.as_array(), ?winner, "Line scores updated");
    winner
}

/// Checks the whole board for a completed line.
///
/// Full scan counterpart of [`score_move`].
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Side> {
    LineScores::rescan(board).winner()
}
