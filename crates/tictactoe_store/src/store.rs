//! Owned game service: the active game, the archive and subscribers.

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::{
    Game, GameError, GameId, SharedArchive, Side, StoreConfig, choose_turn_and_start,
    is_board_full, prepare_game_data, record_move,
};

/// Holds the active game and publishes every new value of it.
///
/// The store is owned by whatever drives play (a UI controller, a CLI, a
/// test). Several stores may share one [`SharedArchive`].
#[derive(Debug)]
pub struct GameStore {
    current: Game,
    archive: SharedArchive,
    config: StoreConfig,
    publisher: watch::Sender<Game>,
}

impl GameStore {
    /// Creates a store with its own archive.
    #[instrument(skip(config))]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_archive(config, SharedArchive::new())
    }

    /// Creates a store that saves into an existing archive.
    #[instrument(skip(config, archive), fields(archived = archive.len()))]
    pub fn with_archive(config: StoreConfig, archive: SharedArchive) -> Self {
        let current = prepare_game_data();
        let (publisher, _) = watch::channel(current.clone());
        info!(first_side = %config.first_side(), "Creating GameStore");
        Self {
            current,
            archive,
            config,
            publisher,
        }
    }

    /// The active game.
    pub fn current_game(&self) -> &Game {
        &self.current
    }

    /// Archive handle shared by this store.
    pub fn archive(&self) -> &SharedArchive {
        &self.archive
    }

    /// Receives every new value of the active game.
    pub fn subscribe(&self) -> watch::Receiver<Game> {
        self.publisher.subscribe()
    }

    /// Gets an archived game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if no game has this id.
    #[instrument(skip(self))]
    pub fn game_by_id(&self, id: GameId) -> Result<Game, GameError> {
        self.archive.get(id).ok_or_else(|| {
            debug!("Archived game not found");
            GameError::NotFound { id }
        })
    }

    /// The active game for `None`, otherwise the archived game with that id.
    #[instrument(skip(self))]
    pub fn current_game_state(&self, id: Option<GameId>) -> Option<Game> {
        match id {
            None => Some(self.current.clone()),
            Some(id) => self.archive.get(id),
        }
    }

    /// Every archived game in order.
    #[instrument(skip(self))]
    pub fn game_history(&self) -> Vec<Game> {
        self.archive.history()
    }

    /// The most recently archived game.
    #[instrument(skip(self))]
    pub fn last_saved(&self) -> Option<Game> {
        self.archive.last()
    }

    /// Checks if every cell of the active board is occupied.
    #[instrument(skip(self))]
    pub fn is_board_full(&self) -> bool {
        is_board_full(&self.current)
    }

    /// Replaces the active game with a new one where `side` moves first.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, side: Side) -> &Game {
        if self.current.moves_played() > 0 && !self.current.done() {
            warn!(moves = self.current.moves_played(), "Abandoning unfinished game");
        }
        self.publish(choose_turn_and_start(side))
    }

    /// Starts a game with the configured first side.
    pub fn start_default_game(&mut self) -> &Game {
        let side = *self.config.first_side();
        self.start_game(side)
    }

    /// Plays the current side's mark at `(row, col)`.
    ///
    /// With `auto_save` configured, a finishing move also archives the game
    /// and starts the next one with the configured first side.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the move is rejected; the active game is
    /// left unchanged and nothing is published.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<&Game, GameError> {
        let next = record_move(&self.current, row, col)?;
        if next.done() && *self.config.auto_save() {
            self.publish(next);
            self.save_and_continue()?;
            let side = *self.config.first_side();
            return Ok(self.start_game(side));
        }
        Ok(self.publish(next))
    }

    /// Archives the active game and replaces it with an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Archive`] if the archive is inconsistent; the
    /// active game is kept in that case.
    #[instrument(skip(self), fields(status = ?self.current.status()))]
    pub fn save_and_continue(&mut self) -> Result<GameId, GameError> {
        let id = self.archive.save(&self.current)?;
        self.publish(prepare_game_data());
        Ok(id)
    }

    fn publish(&mut self, game: Game) -> &Game {
        self.current = game;
        self.publisher.send_replace(self.current.clone());
        &self.current
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
