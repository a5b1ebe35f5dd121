//! Append-only history of finished games.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, instrument};

use crate::{ArchiveConsistencyError, Game, GameId};

/// Ordered store of archived game snapshots.
///
/// Games are deep-copied on insert and only handed out by shared
/// reference afterwards. The n-th inserted game has id n.
#[derive(Debug, Clone, Default)]
pub struct GameArchive {
    games: Vec<Game>,
}

impl GameArchive {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `game` into the archive and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveConsistencyError`] if the last archived game's id
    /// does not equal the archive length; nothing is inserted in that case.
    #[instrument(skip(self, game), fields(len = self.games.len(), winner = ?game.winner()))]
    pub fn insert(&mut self, game: &Game) -> Result<GameId, ArchiveConsistencyError> {
        let len = self.games.len();
        let tail_id = self.games.last().and_then(Game::id);
        if tail_id != (len > 0).then_some(len) {
            error!(?tail_id, len, "Archive tail id does not match position");
            return Err(ArchiveConsistencyError::new(tail_id.unwrap_or_default(), len));
        }

        let id = len + 1;
        self.games.push(Game {
            id: Some(id),
            ..game.clone()
        });

        info!(id, "Game archived");
        Ok(id)
    }

    /// Gets an archived game by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: GameId) -> Option<&Game> {
        id.checked_sub(1).and_then(|idx| self.games.get(idx))
    }

    /// Most recently archived game.
    #[instrument(skip(self))]
    pub fn last(&self) -> Option<&Game> {
        self.games.last()
    }

    /// All archived games in insertion order.
    #[instrument(skip(self))]
    pub fn history(&self) -> &[Game] {
        &self.games
    }

    /// Number of archived games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Checks if nothing has been archived.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Cloneable handle to an archive shared by several owners.
///
/// Inserts go through a mutex so ids stay equal to positions when more than
/// one store saves into the same archive.
#[derive(Debug, Clone, Default)]
pub struct SharedArchive {
    inner: Arc<Mutex<GameArchive>>,
}

impl SharedArchive {
    /// Creates a handle to a new, empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, GameArchive> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies `game` into the archive and returns its id.
    ///
    /// # Errors
    ///
    /// See [`GameArchive::insert`].
    #[instrument(skip(self, game))]
    pub fn save(&self, game: &Game) -> Result<GameId, ArchiveConsistencyError> {
        let mut archive = self.lock();
        debug!(len = archive.len(), "Archive locked for insert");
        archive.insert(game)
    }

    /// Owned copy of an archived game.
    #[instrument(skip(self))]
    pub fn get(&self, id: GameId) -> Option<Game> {
        self.lock().get(id).cloned()
    }

    /// Owned copy of the most recently archived game.
    #[instrument(skip(self))]
    pub fn last(&self) -> Option<Game> {
        self.lock().last().cloned()
    }

    /// Owned copy of the whole history.
    #[instrument(skip(self))]
    pub fn history(&self) -> Vec<Game> {
        self.lock().history().to_vec()
    }

    /// Number of archived games.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if nothing has been archived.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut archive = GameArchive::new();
        for expected in 1..=4 {
            let id = archive.insert(&Game::new()).unwrap();
            assert_eq!(id, expected);
            assert_eq!(archive.len(), expected);
        }
        assert_eq!(archive.get(3).and_then(Game::id), Some(3));
        assert_eq!(archive.last().and_then(Game::id), Some(4));
    }

    #[test]
    fn test_corrupted_tail_rejects_insert() {
        let mut archive = GameArchive::new();
        archive.insert(&Game::new()).unwrap();
        archive.games[0].id = Some(5);

        let err = archive.insert(&Game::new()).unwrap_err();
        assert_eq!(err, ArchiveConsistencyError::new(5, 1));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_unnumbered_tail_rejects_insert() {
        let mut archive = GameArchive::new();
        archive.games.push(Game::new());

        let err = archive.insert(&Game::new()).unwrap_err();
        assert_eq!(err, ArchiveConsistencyError::new(0, 1));
    }

    #[test]
    fn test_get_missing_id() {
        let mut archive = GameArchive::new();
        archive.insert(&Game::new()).unwrap();
        assert!(archive.get(0).is_none());
        assert!(archive.get(2).is_none());
    }

    #[test]
    fn test_insert_copies_game() {
        let mut archive = GameArchive::new();
        let game = crate::choose_turn(Side::Cross);
        archive.insert(&game).unwrap();

        assert_eq!(game.id(), None);
        assert_eq!(archive.history()[0].turn(), Some(Side::Cross));
        assert_eq!(archive.history()[0].id(), Some(1));
    }

    #[test]
    fn test_shared_archive_serializes_inserts() {
        let archive = SharedArchive::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let archive = archive.clone();
                std::thread::spawn(move || archive.save(&Game::new()).unwrap())
            })
            .collect();

        let mut ids: Vec<GameId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());

        let history = archive.history();
        for (idx, game) in history.iter().enumerate() {
            assert_eq!(game.id(), Some(idx + 1));
        }
    }
}
