//! Tests for the owned game store and the shared archive.

use tictactoe_store::{GameError, GameStatus, GameStore, SharedArchive, Side, StoreConfig, Winner};

fn play_cross_win(store: &mut GameStore) {
    store.start_game(Side::Cross);
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        store.apply_move(row, col).expect("Valid move");
    }
}

#[test]
fn test_archive_ids_start_at_one_and_increase() {
    let mut store = GameStore::default();
    for expected in 1..=5 {
        play_cross_win(&mut store);
        let id = store.save_and_continue().expect("Save succeeds");
        assert_eq!(id, expected);
        assert_eq!(store.game_history().len(), expected);
    }

    let ids: Vec<_> = store.game_history().iter().map(|g| g.id()).collect();
    assert_eq!(ids, (1..=5).map(Some).collect::<Vec<_>>());
}

#[test]
fn test_game_lookup() {
    let mut store = GameStore::default();
    play_cross_win(&mut store);
    let id = store.save_and_continue().unwrap();

    let saved = store.game_by_id(id).unwrap();
    assert_eq!(saved.winner(), Some(Winner::Cross));
    assert_eq!(store.last_saved(), Some(saved));
    assert!(matches!(store.game_by_id(id + 1), Err(GameError::NotFound { .. })));
}

#[test]
fn test_save_resets_current_game() {
    let mut store = GameStore::default();
    play_cross_win(&mut store);
    assert_eq!(store.current_game().status(), GameStatus::Won(Side::Cross));

    store.save_and_continue().unwrap();
    assert_eq!(store.current_game().status(), GameStatus::NotStarted);
    assert!(!store.is_board_full());
}

#[test]
fn test_move_before_start_rejected() {
    let mut store = GameStore::new(StoreConfig::default());
    assert!(matches!(store.apply_move(0, 0), Err(GameError::Turn(_))));
}

#[test]
fn test_concurrent_stores_keep_ids_positional() {
    let archive = SharedArchive::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let archive = archive.clone();
            std::thread::spawn(move || {
                let mut store = GameStore::with_archive(StoreConfig::default(), archive);
                for _ in 0..10 {
                    play_cross_win(&mut store);
                    store.save_and_continue().unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let history = archive.history();
    assert_eq!(history.len(), 40);
    for (idx, game) in history.iter().enumerate() {
        assert_eq!(game.id(), Some(idx + 1));
    }
}
