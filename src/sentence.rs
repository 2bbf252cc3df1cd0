//! Logical sentences over board cells.
//!
//! A sentence states that exactly `count` of its `cells` are mines.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    cells: BTreeSet<Cell>,
    count: usize,
}

impl Sentence {
    /// Build a sentence, rejecting counts larger than the cell set.
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Result<Self> {
        let cells: BTreeSet<Cell> = cells.into_iter().collect();
        if count > cells.len() {
            return Err(SolverError::InconsistentKnowledge(format!(
                "{} mines among {} cells",
                count,
                cells.len()
            )));
        }
        Ok(Self { cells, count })
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Vacuous: says nothing about any cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Every cell is a mine when the count covers the whole set.
    pub fn known_mines(&self) -> BTreeSet<Cell> {
        if self.count > 0 && self.count == self.len() {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    pub fn known_safes(&self) -> BTreeSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            BTreeSet::new()
        }
    }

    /// Fails if this sentence says `cell` is safe.
    pub fn check_mine(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) && self.count == 0 {
            return Err(SolverError::InconsistentKnowledge(format!(
                "{} is a mine but {} says it is safe",
                cell, self
            )));
        }
        Ok(())
    }

    /// Fails if this sentence says `cell` is a mine.
    pub fn check_safe(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) && self.count == self.len() {
            return Err(SolverError::InconsistentKnowledge(format!(
                "{} is safe but {} says it is a mine",
                cell, self
            )));
        }
        Ok(())
    }

    /// Remove a confirmed mine, consuming one unit of the count.
    /// Returns whether the cell was a member; the sentence is untouched on error.
    pub fn mark_mine(&mut self, cell: Cell) -> Result<bool> {
        self.check_mine(cell)?;
        if !self.cells.remove(&cell) {
            return Ok(false);
        }
        self.count -= 1;
        Ok(true)
    }

    /// Remove a confirmed safe cell. Returns whether the cell was a member;
    /// the sentence is untouched on error.
    pub fn mark_safe(&mut self, cell: Cell) -> Result<bool> {
        self.check_safe(cell)?;
        Ok(self.cells.remove(&cell))
    }

    /// Strict subset test on cell sets. Equal sets are not a subset pair.
    pub fn is_proper_subset_of(&self, other: &Sentence) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Derive `self - smaller`, where `smaller` must be a proper subset.
    ///
    /// The mines in the difference are exactly this count minus the
    /// smaller one's; a negative result means the two sentences disagree.
    pub fn subtract(&self, smaller: &Sentence) -> Result<Sentence> {
        debug_assert!(smaller.is_proper_subset_of(self));
        let count = self.count.checked_sub(smaller.count).ok_or_else(|| {
            SolverError::InconsistentKnowledge(format!("{} cannot contain {}", self, smaller))
        })?;
        Sentence::new(self.cells.difference(&smaller.cells).copied(), count)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}} = {}", self.count)
    }
}
