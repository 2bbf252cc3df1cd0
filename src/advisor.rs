//! Move selection over a knowledge base. Read-only: nothing here mutates
//! the knowledge it is given.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};
use crate::knowledge::KnowledgeBase;
use crate::rng::GameRng;
use crate::types::Cell;

/// A chosen move and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cell", rename_all = "lowercase")]
pub enum Move {
    /// Deduced to be safe.
    Safe(Cell),
    /// A guess among the cells not known to be mines.
    Random(Cell),
}

impl Move {
    pub fn cell(&self) -> Cell {
        match *self {
            Move::Safe(cell) | Move::Random(cell) => cell,
        }
    }
}

/// The smallest cell known to be safe that has not been played yet.
pub fn make_safe_move(kb: &KnowledgeBase) -> Option<Cell> {
    kb.safes().difference(kb.moves_made()).next().copied()
}

/// Cells that are neither played nor known mines, in row-major order.
pub fn eligible_moves(kb: &KnowledgeBase) -> Vec<Cell> {
    kb.dimensions()
        .cells()
        .filter(|cell| !kb.mines().contains(cell) && !kb.moves_made().contains(cell))
        .collect()
}

/// A uniformly random cell among [`eligible_moves`].
pub fn make_random_move(kb: &KnowledgeBase, rng: &mut GameRng) -> Result<Cell> {
    let eligible = eligible_moves(kb);
    rng.choose(&eligible).copied().ok_or(SolverError::NoMovesAvailable)
}

/// Prefer a deduced safe move, fall back to a random one.
pub fn next_move(kb: &KnowledgeBase, rng: &mut GameRng) -> Result<Move> {
    match make_safe_move(kb) {
        Some(cell) => Ok(Move::Safe(cell)),
        None => make_random_move(kb, rng).map(Move::Random),
    }
}
