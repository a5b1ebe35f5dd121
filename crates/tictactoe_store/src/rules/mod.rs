//! Game rules for tic-tac-toe.
//!
//! Pure functions that decide whether a move ended the game. Rules are kept
//! apart from board storage so the lifecycle can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINE_COUNT, LineScores, check_winner, score_move};

use crate::{Board, Side, Winner};
use tracing::instrument;

/// Scores the move at `(row, col)` and decides the outcome.
///
/// `board` must already contain the move. Returns `None` while the game is
/// still in progress.
#[instrument(skip(scores, board))]
pub fn evaluate(
    scores: &mut LineScores,
    board: &Board,
    row: usize,
    col: usize,
    side: Side,
) -> Option<Winner> {
    if let Some(side) = score_move(scores, row, col, side) {
        Some(Winner::from(side))
    } else if is_full(board) {
        Some(Winner::NoWinner)
    } else {
        None
    }
}

/// Decides the outcome of `board` by scanning every line.
#[instrument(skip(board))]
pub fn evaluate_board(board: &Board) -> Option<Winner> {
    match check_winner(board) {
        Some(side) => Some(Winner::from(side)),
        None if is_full(board) => Some(Winner::NoWinner),
        None => None,
    }
}
