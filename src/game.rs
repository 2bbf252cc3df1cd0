//! Automatic play: ask the advisor for a move, reveal it on the board,
//! feed the answer back into the knowledge base, repeat.

use serde::{Deserialize, Serialize};

use crate::advisor::{self, Move};
use crate::board::MineField;
use crate::error::{Result, SolverError};
use crate::knowledge::KnowledgeBase;
use crate::rng::GameRng;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "cell", rename_all = "snake_case")]
pub enum Outcome {
    /// Every mine on the board was identified.
    Won,
    /// A random move landed on a mine.
    HitMine(Cell),
    /// Nothing left to play that is not a known mine.
    NoMovesAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: Outcome,
    pub moves: Vec<Move>,
    pub safes_found: usize,
    pub mines_found: usize,
}

impl GameReport {
    pub fn random_moves(&self) -> usize {
        self.moves.iter().filter(|m| matches!(m, Move::Random(_))).count()
    }
}

/// Play one game on `board` until it is won, lost, or no move remains.
///
/// Every move adds a new cell to the moves made, so the loop ends after
/// at most `height * width` moves.
pub fn play<B: MineField>(board: &B, rng: &mut GameRng) -> Result<GameReport> {
    let mut kb = KnowledgeBase::new(board.dimensions())?;
    let mut moves = Vec::new();

    let outcome = loop {
        if board.has_won(kb.mines()) {
            break Outcome::Won;
        }

        let mv = match advisor::next_move(&kb, rng) {
            Ok(mv) => mv,
            Err(SolverError::NoMovesAvailable) => break Outcome::NoMovesAvailable,
            Err(e) => return Err(e),
        };
        moves.push(mv);

        let cell = mv.cell();
        if board.is_mine(cell)? {
            break Outcome::HitMine(cell);
        }
        let count = board.nearby_mines(cell)?;
        let summary = kb.add_knowledge(cell, count)?;
        tracing::debug!(
            ?mv,
            count,
            passes = summary.passes,
            safes = kb.safes().len(),
            mines = kb.mines().len(),
            "move played"
        );
    };

    tracing::info!(?outcome, moves = moves.len(), mines_found = kb.mines().len(), "game finished");

    Ok(GameReport {
        outcome,
        moves,
        safes_found: kb.safes().len(),
        mines_found: kb.mines().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::types::Dimensions;

    #[test]
    fn test_one_by_three_is_won() {
        let board = Board::with_mines(Dimensions::new(1, 3), [Cell::new(0, 2)]).unwrap();
        // Every first move on this board either wins or hits the mine
        for seed in 0..20 {
            let report = play(&board, &mut GameRng::from_seed(seed)).unwrap();
            match report.outcome {
                Outcome::Won => {
                    assert_eq!(report.mines_found, 1);
                    assert_eq!(report.safes_found, 2);
                }
                Outcome::HitMine(cell) => assert_eq!(cell, Cell::new(0, 2)),
                Outcome::NoMovesAvailable => panic!("1x3 board cannot run out of moves"),
            }
        }
    }

    #[test]
    fn test_mine_free_board_is_won_immediately() {
        let board = Board::with_mines(Dimensions::new(4, 4), []).unwrap();
        let report = play(&board, &mut GameRng::from_seed(0)).unwrap();
        assert_eq!(report.outcome, Outcome::Won);
        assert!(report.moves.is_empty());
    }

    #[test]
    fn test_first_zero_reveal_cascades_to_win() {
        // One mine in the corner: any safe reveal leads to a full deduction
        let board = Board::with_mines(Dimensions::new(3, 3), [Cell::new(0, 0)]).unwrap();
        let mut won = 0;
        for seed in 0..30 {
            let report = play(&board, &mut GameRng::from_seed(seed)).unwrap();
            if report.outcome == Outcome::Won {
                won += 1;
                assert_eq!(report.mines_found, 1);
            }
        }
        assert!(won > 0);
    }

    #[test]
    fn test_all_mines_board() {
        let dims = Dimensions::new(1, 2);
        let board = Board::with_mines(dims, dims.cells()).unwrap();
        let report = play(&board, &mut GameRng::from_seed(4)).unwrap();
        assert!(matches!(report.outcome, Outcome::HitMine(_)));
        assert_eq!(report.random_moves(), 1);
    }
}
