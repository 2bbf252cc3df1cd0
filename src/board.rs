//! The Minesweeper board: mine placement, neighbor counts and the win check.
//!
//! The knowledge base never looks inside a board; it only receives the
//! `(cell, nearby_mines)` observations a [`MineField`] hands out.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::GameConfig;
use crate::error::{Result, SolverError};
use crate::rng::GameRng;
use crate::types::{Cell, Dimensions, NeighborCache};

/// Source of truth about where the mines are.
pub trait MineField {
    fn dimensions(&self) -> Dimensions;

    fn is_mine(&self, cell: Cell) -> Result<bool>;

    /// Mines among the in-bounds neighbors of `cell`, excluding the cell itself.
    fn nearby_mines(&self, cell: Cell) -> Result<usize>;

    /// True iff `confirmed` is exactly the set of mines on the board.
    fn has_won(&self, confirmed: &BTreeSet<Cell>) -> bool;
}

pub struct Board {
    dims: Dimensions,
    neighbors: NeighborCache,
    layout: Vec<bool>,
    mines: BTreeSet<Cell>,
}

impl Board {
    /// Place `config.mines` mines uniformly at random without replacement.
    pub fn generate(config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let dims = config.dimensions();
        let mines = place_mines_random(dims, config.mines, rng);
        Self::with_mines(dims, mines)
    }

    /// Build a board with an explicit mine layout.
    pub fn with_mines(dims: Dimensions, mines: impl IntoIterator<Item = Cell>) -> Result<Self> {
        if dims.height == 0 || dims.width == 0 {
            return Err(SolverError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                dims.height, dims.width
            )));
        }
        let mut layout = vec![false; dims.area()];
        let mut placed = BTreeSet::new();
        for cell in mines {
            check_bounds(dims, cell)?;
            layout[dims.index(cell)] = true;
            placed.insert(cell);
        }

        Ok(Self {
            dims,
            neighbors: NeighborCache::new(dims),
            layout,
            mines: placed,
        })
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }
}

impl MineField for Board {
    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn is_mine(&self, cell: Cell) -> Result<bool> {
        check_bounds(self.dims, cell)?;
        Ok(self.layout[self.dims.index(cell)])
    }

    fn nearby_mines(&self, cell: Cell) -> Result<usize> {
        check_bounds(self.dims, cell)?;
        Ok(self
            .neighbors
            .get(cell)
            .iter()
            .filter(|&&n| self.layout[self.dims.index(n)])
            .count())
    }

    fn has_won(&self, confirmed: &BTreeSet<Cell>) -> bool {
        *confirmed == self.mines
    }
}

/// Text rendering of where the mines are.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "--".repeat(self.dims.width) + "-";
        for row in 0..self.dims.height {
            writeln!(f, "{}", rule)?;
            for col in 0..self.dims.width {
                let mine = self.layout[self.dims.index(Cell::new(row, col))];
                f.write_str(if mine { "|X" } else { "| " })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", rule)
    }
}

pub(crate) fn check_bounds(dims: Dimensions, cell: Cell) -> Result<()> {
    if dims.contains(cell) {
        Ok(())
    } else {
        Err(SolverError::InvalidCell {
            cell,
            height: dims.height,
            width: dims.width,
        })
    }
}

/// Choose `count` distinct cells by a partial Fisher-Yates shuffle.
/// `count` is clamped to the board area.
pub fn place_mines_random(dims: Dimensions, count: usize, rng: &mut GameRng) -> BTreeSet<Cell> {
    let mut cells: Vec<Cell> = dims.cells().collect();
    let count = count.min(cells.len());
    for i in 0..count {
        let j = i + rng.gen_range(cells.len() - i);
        cells.swap(i, j);
    }
    cells.truncate(count);
    cells.into_iter().collect()
}
