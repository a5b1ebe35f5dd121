//! Exhaustive checks of incremental win detection over every reachable game.

use strum::IntoEnumIterator;
use tictactoe_store::invariants::{GameInvariants, InvariantSet};
use tictactoe_store::rules::evaluate_board;
use tictactoe_store::{
    Cell, Game, GameError, GameStatus, LineScores, Side, TurnError, choose_turn_and_start,
    record_move,
};

/// Visits every game reachable from `game`, calling `visit` on each state.
fn walk(game: &Game, visit: &mut impl FnMut(&Game)) {
    visit(game);
    if game.done() {
        return;
    }
    for (row, col) in game.board().empty_cells() {
        let next = record_move(game, row, col).expect("Empty cell accepts a move");
        walk(&next, visit);
    }
}

#[test]
fn test_incremental_matches_rescan_for_all_reachable_games() {
    let mut visited = 0usize;
    for first in Side::iter() {
        walk(&choose_turn_and_start(first), &mut |game| {
            visited += 1;
            let scores = game.line_scores().copied().unwrap_or_default();
            assert_eq!(scores, LineScores::rescan(game.board()));
            assert_eq!(game.winner(), evaluate_board(game.board()));
            assert!(GameInvariants::check_all(game).is_ok());
        });
    }
    // 549,946 move sequences per starting side
    assert_eq!(visited, 2 * 549_946);
}

#[test]
fn test_exactly_one_status_holds() {
    walk(&choose_turn_and_start(Side::Cross), &mut |game| {
        let status = game.status();
        let flags = [
            status == GameStatus::InProgress,
            status == GameStatus::Won(Side::Cross),
            status == GameStatus::Won(Side::Circle),
            status == GameStatus::Draw,
        ];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        assert_eq!(game.done(), status.is_terminal());
    });
}

#[test]
fn test_marked_cells_never_change() {
    walk(&choose_turn_and_start(Side::Cross), &mut |game| {
        if game.done() {
            assert_eq!(
                record_move(game, 0, 0),
                Err(GameError::Turn(TurnError::GameOver))
            );
            return;
        }
        for (row, col, cell) in game.board().cells() {
            if let Cell::Marked(_) = cell {
                assert!(record_move(game, row, col).is_err());
            }
        }
    });
}
