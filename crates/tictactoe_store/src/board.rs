//! The 3x3 grid and functional move application.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{Cell, MoveError, Side};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// 3x3 tic-tac-toe board.
///
/// Boards are small values: every move yields a new board and leaves the
/// previous one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`, `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, *cell))
        })
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Number of cells held by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells()
            .filter(|(_, _, cell)| *cell == Cell::Marked(side))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, _, cell)| !cell.is_empty())
    }

    /// Returns a board with `(row, col)` set to `side`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for coordinates outside the grid and
    /// [`MoveError::CellOccupied`] when the cell already holds a mark. The
    /// receiver is never modified.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize, side: Side) -> Result<Board, MoveError> {
        match self.get(row, col) {
            None => {
                warn!("Move outside the board");
                Err(MoveError::OutOfRange { row, col })
            }
            Some(Cell::Marked(occupant)) => {
                warn!(?occupant, "Move on an occupied cell");
                Err(MoveError::CellOccupied { row, col, occupant })
            }
            Some(Cell::Empty) => {
                let mut next = *self;
                next.rows[row][col] = Cell::Marked(side);
                Ok(next)
            }
        }
    }
}

/// Free-function form of [`Board::apply_move`].
///
/// # Errors
///
/// See [`Board::apply_move`].
pub fn apply_move(board: &Board, row: usize, col: usize, side: Side) -> Result<Board, MoveError> {
    board.apply_move(row, col, side)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            let line: String = row
                .iter()
                .map(|cell| cell.side().map_or('.', Side::symbol))
                .collect();
            f.write_str(&line)?;
            if idx + 1 < BOARD_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_sets_only_target() {
        let board = Board::new();
        let next = board.apply_move(1, 2, Side::Cross).unwrap();

        assert_eq!(next.get(1, 2), Some(Cell::Marked(Side::Cross)));
        assert_eq!(next.empty_cells().len(), 8);
        // Original value untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::new().apply_move(0, 0, Side::Circle).unwrap();
        let result = board.apply_move(0, 0, Side::Cross);

        assert_eq!(
            result,
            Err(MoveError::CellOccupied {
                row: 0,
                col: 0,
                occupant: Side::Circle
            })
        );
        assert_eq!(board.get(0, 0), Some(Cell::Marked(Side::Circle)));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.apply_move(3, 0, Side::Cross),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            apply_move(&board, 0, 7, Side::Cross),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .apply_move(0, 0, Side::Cross)
            .and_then(|b| b.apply_move(1, 1, Side::Circle))
            .unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }

    #[test]
    fn test_count() {
        let board = Board::new()
            .apply_move(0, 0, Side::Cross)
            .and_then(|b| b.apply_move(2, 2, Side::Cross))
            .and_then(|b| b.apply_move(1, 1, Side::Circle))
            .unwrap();
        assert_eq!(board.count(Side::Cross), 2);
        assert_eq!(board.count(Side::Circle), 1);
    }
}
