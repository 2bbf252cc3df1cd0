use std::collections::BTreeSet;

use minesweeper_ai::advisor::{self, Move};
use minesweeper_ai::game::{self, Outcome};
use minesweeper_ai::rng::GameRng;
use minesweeper_ai::{Board, Cell, Dimensions, GameConfig, KnowledgeBase, MineField, SolverError};

/// Play a game by hand, checking every deduction against the real board.
fn play_checked(board: &Board, rng: &mut GameRng) -> Outcome {
    let mut kb = KnowledgeBase::new(board.dimensions()).unwrap();
    loop {
        if board.has_won(kb.mines()) {
            return Outcome::Won;
        }
        let mv = match advisor::next_move(&kb, rng) {
            Ok(mv) => mv,
            Err(SolverError::NoMovesAvailable) => return Outcome::NoMovesAvailable,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let cell = mv.cell();
        if board.is_mine(cell).unwrap() {
            assert!(matches!(mv, Move::Random(_)), "deduced-safe move {cell} was a mine");
            return Outcome::HitMine(cell);
        }
        kb.add_knowledge(cell, board.nearby_mines(cell).unwrap()).unwrap();

        assert!(kb.safes().is_disjoint(kb.mines()));
        for &mine in kb.mines() {
            assert!(board.is_mine(mine).unwrap(), "{mine} marked as a mine but is safe");
        }
        for &safe in kb.safes() {
            assert!(!board.is_mine(safe).unwrap(), "{safe} marked safe but is a mine");
        }
        for sentence in kb.sentences() {
            assert!(!sentence.is_empty());
            assert!(sentence.count() <= sentence.len());
            let actual = sentence.cells().iter().filter(|&&c| board.is_mine(c).unwrap()).count();
            assert_eq!(actual, sentence.count(), "sentence {sentence} is false");
        }
    }
}

#[test]
fn deductions_match_the_board() {
    let config = GameConfig::new(8, 8, 8);
    let mut rng = GameRng::from_seed(2024);
    for _ in 0..40 {
        let board = Board::generate(&config, &mut rng).unwrap();
        play_checked(&board, &mut rng);
    }
}

#[test]
fn deductions_match_on_dense_boards() {
    let config = GameConfig::new(6, 9, 14);
    let mut rng = GameRng::from_seed(77);
    for _ in 0..25 {
        let board = Board::generate(&config, &mut rng).unwrap();
        play_checked(&board, &mut rng);
    }
}

#[test]
fn most_sparse_games_are_won() {
    let config = GameConfig::new(8, 8, 4);
    let mut rng = GameRng::from_seed(11);
    let won = (0..30)
        .filter(|_| {
            let board = Board::generate(&config, &mut rng).unwrap();
            game::play(&board, &mut rng).unwrap().outcome == Outcome::Won
        })
        .count();
    assert!(won >= 10, "only {won} of 30 games won");
}

#[test]
fn seeded_games_replay_identically() {
    let config = GameConfig::default();
    let run = |seed| {
        let mut rng = GameRng::from_seed(seed);
        let board = Board::generate(&config, &mut rng).unwrap();
        game::play(&board, &mut rng).unwrap()
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn single_row_scenario() {
    let board = Board::with_mines(Dimensions::new(1, 3), [Cell::new(0, 2)]).unwrap();
    let mut kb = KnowledgeBase::new(board.dimensions()).unwrap();

    let first = Cell::new(0, 0);
    kb.add_knowledge(first, board.nearby_mines(first).unwrap()).unwrap();
    assert_eq!(advisor::make_safe_move(&kb), Some(Cell::new(0, 1)));

    let second = Cell::new(0, 1);
    kb.add_knowledge(second, board.nearby_mines(second).unwrap()).unwrap();

    assert_eq!(kb.safes(), &BTreeSet::from([Cell::new(0, 0), Cell::new(0, 1)]));
    assert_eq!(kb.mines(), &BTreeSet::from([Cell::new(0, 2)]));
    assert!(board.has_won(kb.mines()));
}
