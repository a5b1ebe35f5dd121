//! Tic-tac-toe match tracking.
//!
//! This library keeps the state of a single 3x3 match, detects wins and
//! draws incrementally, and archives finished matches in order.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with functional move application
//! - **Rules**: running line sums that detect a win in constant time per move
//! - **Turn**: alternates sides and places marks
//! - **Lifecycle**: start, record moves, save and reset
//! - **Archive**: append-only history with sequential ids
//! - **Store**: owned service publishing each new game value
//!
//! # Example
//!
//! ```
//! use tictactoe_store::{GameStore, Side, Winner};
//!
//! # fn example() -> Result<(), tictactoe_store::GameError> {
//! let mut store = GameStore::default();
//! store.start_game(Side::Cross);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     store.apply_move(row, col)?;
//! }
//! assert_eq!(store.current_game().winner(), Some(Winner::Cross));
//!
//! let id = store.save_and_continue()?;
//! assert_eq!(id, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod archive;
mod board;
mod config;
mod error;
mod game;
pub mod invariants;
mod lifecycle;
pub mod rules;
mod store;
mod turn;
mod types;

pub use archive::{GameArchive, SharedArchive};
pub use board::{BOARD_SIZE, Board, apply_move};
pub use config::{ConfigError, StoreConfig};
pub use error::{ArchiveConsistencyError, GameError, MoveError, TurnError};
pub use game::{Game, GameId, is_board_full};
pub use lifecycle::{
    choose_turn_and_start, prepare_game_data, record_move, save_and_go_next, save_game,
};
pub use rules::{LINE_COUNT, LineScores};
pub use store::GameStore;
pub use turn::{change_turn_and_value, choose_turn};
pub use types::{Cell, GameStatus, Side, Winner};
