//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Side;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let layout = [
            [Side::Cross, Side::Circle, Side::Cross],
            [Side::Circle, Side::Cross, Side::Cross],
            [Side::Circle, Side::Cross, Side::Circle],
        ];
        let mut board = Board::new();
        for (row, sides) in layout.iter().enumerate() {
            for (col, side) in sides.iter().enumerate() {
                board = board.apply_move(row, col, *side).unwrap();
            }
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for col in 0..3 {
            board = board.apply_move(0, col, Side::Cross).unwrap();
        }
        assert!(!is_draw(&board));
    }
}
