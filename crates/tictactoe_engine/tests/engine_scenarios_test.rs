//! Scenario and property tests for the game engine.

use tictactoe_engine::{
    Board, ConnectN, GameEngine, GameStatus, Mark, Player, Square, ThreeInARow,
};

/// Observable engine state, for before/after comparisons.
#[derive(Debug, Clone, PartialEq)]
struct Observed {
    board: Board,
    status: GameStatus,
    winner: Option<Mark>,
    current: usize,
    moves: usize,
}

fn observe(game: &GameEngine) -> Observed {
    Observed {
        board: game.board().clone(),
        status: game.status(),
        winner: game.winner().map(|p| *p.symbol()),
        current: game.current_player_index(),
        moves: game.move_count(),
    }
}

/// Deterministic shuffle of every square on a board, seeded per game.
fn shuffled_squares(size: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut squares: Vec<(usize, usize)> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .collect();
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    for i in (1..squares.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        squares.swap(i, j);
    }
    squares
}

fn row_symbols(game: &GameEngine, row: usize) -> Vec<String> {
    (0..game.board().size())
        .map(|col| game.board().get(row, col).map(|s| s.to_string()).unwrap_or_default())
        .collect()
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameEngine::standard(3).unwrap();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        assert!(game.make_move(row, col));
    }

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.winner().unwrap().symbol().to_string(), "X");
    assert_eq!(row_symbols(&game, 0), vec!["X", "X", "X"]);
}

#[test]
fn test_undo_after_win_scenario() {
    let mut game = GameEngine::standard(3).unwrap();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        assert!(game.make_move(row, col));
    }

    assert!(game.undo());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.board().get(0, 2), Some(Square::Empty));
    assert_eq!(game.current_player().symbol().to_string(), "X");
    assert!(game.winner().is_none());
}

#[test]
fn test_tie_scenario() {
    let mut game = GameEngine::standard(3).unwrap();
    // X O X / O O X / X X O
    let moves = [
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (2, 1),
        (1, 0),
        (1, 2),
        (2, 2),
        (2, 0),
    ];
    for (row, col) in moves {
        assert!(game.make_move(row, col));
    }

    assert_eq!(game.status(), GameStatus::Tied);
    assert!(game.winner().is_none());
    assert!(game.board().is_full());
}

#[test]
fn test_new_game_four_by_four_scenario() {
    let mut game = GameEngine::standard(3).unwrap();
    game.make_move(1, 1);
    game.new_game(4).unwrap();

    assert_eq!(game.board().size(), 4);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.current_player().symbol(), game.players().next().unwrap().symbol());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_history_matches_occupied_squares() {
    for seed in 0..200 {
        let mut game = GameEngine::standard(3).unwrap();
        for (row, col) in shuffled_squares(3, seed) {
            if !game.make_move(row, col) {
                break;
            }
            assert_eq!(game.history().len(), game.board().occupied_count());
        }
    }
}

#[test]
fn test_undo_restores_previous_state() {
    for seed in 0..200 {
        let mut game = GameEngine::standard(3).unwrap();
        for (row, col) in shuffled_squares(3, seed) {
            let before = observe(&game);
            if !game.make_move(row, col) {
                assert_eq!(observe(&game), before, "rejected move changed state");
                break;
            }
            let after = observe(&game);

            assert!(game.undo());
            assert_eq!(observe(&game), before, "seed {} undo of ({}, {})", seed, row, col);

            assert!(game.make_move(row, col));
            assert_eq!(observe(&game), after);
        }
    }
}

#[test]
fn test_undo_all_returns_to_fresh_game() {
    let fresh = observe(&GameEngine::standard(3).unwrap());
    for seed in 0..50 {
        let mut game = GameEngine::standard(3).unwrap();
        for (row, col) in shuffled_squares(3, seed) {
            if !game.make_move(row, col) {
                break;
            }
        }
        while game.undo() {}
        assert_eq!(observe(&game), fresh);
    }
}

#[test]
fn test_illegal_moves_change_nothing() {
    let mut game = GameEngine::standard(3).unwrap();
    game.make_move(0, 0);
    game.make_move(1, 1);
    let before = observe(&game);

    assert!(!game.make_move(0, 0));
    assert!(!game.make_move(1, 1));
    assert!(!game.make_move(3, 3));
    assert!(!game.make_move(usize::MAX, 0));
    assert_eq!(observe(&game), before);
}

#[test]
fn test_winning_move_properties() {
    for seed in 0..200 {
        let mut game = GameEngine::standard(3).unwrap();
        for (row, col) in shuffled_squares(3, seed) {
            let mover = game.current_player_index();
            let mark = *game.current_player().symbol();
            assert!(game.make_move(row, col));
            match game.status() {
                GameStatus::Won => {
                    assert_eq!(*game.winner().unwrap().symbol(), mark);
                    assert_eq!(game.current_player_index(), mover);
                    break;
                }
                GameStatus::Tied => {
                    assert!(game.winner().is_none());
                    assert!(game.board().is_full());
                    break;
                }
                GameStatus::InProgress => {}
            }
        }
    }
}

#[test]
fn test_is_full_iff_no_empty_square() {
    for seed in 0..20 {
        let mut game = GameEngine::new(
            4,
            vec![
                Player::human(Mark::new('A'), "A"),
                Player::human(Mark::new('B'), "B"),
                Player::human(Mark::new('C'), "C"),
                Player::human(Mark::new('D'), "D"),
            ],
            Box::new(ConnectN::new(5)),
        )
        .unwrap();
        for (row, col) in shuffled_squares(4, seed) {
            let board = game.board();
            let any_empty = (0..4).any(|r| (0..4).any(|c| board.get(r, c) == Some(Square::Empty)));
            assert_eq!(board.is_full(), !any_empty);
            assert!(game.make_move(row, col));
        }
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Tied);
    }
}

#[test]
fn test_history_is_a_copy() {
    let players = vec![
        Player::human(Mark::X, "Alice"),
        Player::bot(Mark::O, "Computer"),
    ];
    let mut game = GameEngine::new(3, players, Box::new(ThreeInARow)).unwrap();
    game.make_move(2, 1);

    let mut history = game.history();
    assert_eq!(history.len(), 1);
    assert_eq!((history[0].row(), history[0].col()), (2, 1));
    assert_eq!(history[0].player().name(), "Alice");
    history.clear();

    assert_eq!(game.move_count(), 1);
}
