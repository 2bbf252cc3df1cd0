//! The knowledge base: sentences about the board plus every cell
//! confirmed safe or mined so far.
//!
//! Each revealed cell contributes one sentence over its undetermined
//! neighbors. After every observation the base runs to a fixed point:
//!
//! 1. Sentences that pin down all of their cells (count 0, or count equal
//!    to the number of cells) turn into confirmed safes/mines, which are
//!    then removed from every sentence.
//! 2. Vacuous sentences are dropped.
//! 3. Whenever one sentence's cells are a proper subset of another's, the
//!    difference becomes a new sentence.
//!
//! Each pass reads a stable snapshot of the sentence list and applies its
//! conclusions afterwards, so nothing is appended to the list while it is
//! being iterated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::check_bounds;
use crate::error::{Result, SolverError};
use crate::sentence::Sentence;
use crate::types::{Cell, Dimensions, NeighborCache};

pub struct KnowledgeBase {
    dims: Dimensions,
    neighbors: NeighborCache,
    moves_made: BTreeSet<Cell>,
    safes: BTreeSet<Cell>,
    mines: BTreeSet<Cell>,
    sentences: Vec<Sentence>,
}

/// What one run of the inference loop concluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceSummary {
    pub passes: usize,
    pub safes_marked: usize,
    pub mines_marked: usize,
    pub sentences_derived: usize,
}

impl InferenceSummary {
    pub fn made_progress(&self) -> bool {
        self.safes_marked > 0 || self.mines_marked > 0 || self.sentences_derived > 0
    }
}

/// Serializable view of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub dimensions: Dimensions,
    pub moves_made: BTreeSet<Cell>,
    pub safes: BTreeSet<Cell>,
    pub mines: BTreeSet<Cell>,
    pub sentences: Vec<Sentence>,
}

impl KnowledgeBase {
    pub fn new(dims: Dimensions) -> Result<Self> {
        if dims.height == 0 || dims.width == 0 {
            return Err(SolverError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                dims.height, dims.width
            )));
        }
        Ok(Self {
            dims,
            neighbors: NeighborCache::new(dims),
            moves_made: BTreeSet::new(),
            safes: BTreeSet::new(),
            mines: BTreeSet::new(),
            sentences: Vec::new(),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn moves_made(&self) -> &BTreeSet<Cell> {
        &self.moves_made
    }

    pub fn safes(&self) -> &BTreeSet<Cell> {
        &self.safes
    }

    pub fn mines(&self) -> &BTreeSet<Cell> {
        &self.mines
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dimensions: self.dims,
            moves_made: self.moves_made.clone(),
            safes: self.safes.clone(),
            mines: self.mines.clone(),
            sentences: self.sentences.clone(),
        }
    }

    /// Record `cell` as a mine and remove it from every sentence.
    /// Nothing changes if any sentence says `cell` is safe.
    pub fn mark_mine(&mut self, cell: Cell) -> Result<()> {
        check_bounds(self.dims, cell)?;
        if self.safes.contains(&cell) {
            return Err(SolverError::InconsistentKnowledge(format!(
                "{} is already known to be safe",
                cell
            )));
        }
        for sentence in &self.sentences {
            sentence.check_mine(cell)?;
        }
        self.mines.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell)?;
        }
        Ok(())
    }

    /// Record `cell` as safe and remove it from every sentence.
    /// Nothing changes if any sentence says `cell` is a mine.
    pub fn mark_safe(&mut self, cell: Cell) -> Result<()> {
        check_bounds(self.dims, cell)?;
        if self.mines.contains(&cell) {
            return Err(SolverError::InconsistentKnowledge(format!(
                "{} is already known to be a mine",
                cell
            )));
        }
        for sentence in &self.sentences {
            sentence.check_safe(cell)?;
        }
        self.safes.insert(cell);
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell)?;
        }
        Ok(())
    }

    /// Feed in the board's answer for a revealed safe cell: `count` of its
    /// neighbors are mines. Runs inference to a fixed point before returning.
    ///
    /// A rejected observation leaves the knowledge base exactly as it was.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<InferenceSummary> {
        check_bounds(self.dims, cell)?;
        let before = self.snapshot();
        let result = self.apply_observation(cell, count);
        if let Err(e) = &result {
            tracing::warn!(%cell, count, error = %e, "observation rejected");
            self.restore(before);
        }
        result
    }

    fn apply_observation(&mut self, cell: Cell, count: usize) -> Result<InferenceSummary> {
        self.mark_safe(cell)?;
        self.moves_made.insert(cell);

        let mut undetermined = Vec::with_capacity(8);
        let mut remaining = count;
        for &neighbor in self.neighbors.get(cell) {
            if self.mines.contains(&neighbor) {
                remaining = remaining.checked_sub(1).ok_or_else(|| {
                    SolverError::InconsistentKnowledge(format!(
                        "{} reports {} nearby mines but more are already known",
                        cell, count
                    ))
                })?;
            } else if !self.safes.contains(&neighbor) {
                undetermined.push(neighbor);
            }
        }

        let sentence = Sentence::new(undetermined, remaining)?;
        tracing::debug!(%cell, count, sentence = %sentence, "adding knowledge");
        if !self.sentences.contains(&sentence) {
            self.sentences.push(sentence);
        }

        self.run_inference()
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.moves_made = snapshot.moves_made;
        self.safes = snapshot.safes;
        self.mines = snapshot.mines;
        self.sentences = snapshot.sentences;
    }

    /// Apply the inference rules until a pass changes nothing. On a
    /// contradiction the knowledge base is left as it was.
    pub fn infer(&mut self) -> Result<InferenceSummary> {
        let before = self.snapshot();
        let result = self.run_inference();
        if result.is_err() {
            self.restore(before);
        }
        result
    }

    fn run_inference(&mut self) -> Result<InferenceSummary> {
        let mut summary = InferenceSummary::default();

        loop {
            summary.passes += 1;
            let mut changed = false;

            // Conclusions from sentences that fully determine their cells
            let mut safes = BTreeSet::new();
            let mut mines = BTreeSet::new();
            for sentence in &self.sentences {
                safes.extend(sentence.known_safes());
                mines.extend(sentence.known_mines());
            }
            if !safes.is_empty() || !mines.is_empty() {
                changed = true;
                summary.safes_marked += safes.len();
                summary.mines_marked += mines.len();
            }
            for &cell in &safes {
                self.mark_safe(cell)?;
            }
            for &cell in &mines {
                self.mark_mine(cell)?;
            }

            self.prune_sentences();

            let derived = self.derive_subset_sentences()?;
            if !derived.is_empty() {
                changed = true;
                summary.sentences_derived += derived.len();
                self.sentences.extend(derived);
            }

            tracing::debug!(
                pass = summary.passes,
                sentences = self.sentences.len(),
                safes = safes.len(),
                mines = mines.len(),
                "inference pass"
            );

            if !changed {
                break;
            }
        }

        Ok(summary)
    }

    /// Drop vacuous sentences and duplicates left behind by marking.
    fn prune_sentences(&mut self) {
        let mut kept: Vec<Sentence> = Vec::with_capacity(self.sentences.len());
        for sentence in self.sentences.drain(..) {
            if !sentence.is_empty() && !kept.contains(&sentence) {
                kept.push(sentence);
            }
        }
        self.sentences = kept;
    }

    /// New sentences from every proper-subset pair of the current list.
    /// Sentences with equal cell sets never derive anything from each other.
    fn derive_subset_sentences(&self) -> Result<Vec<Sentence>> {
        let mut derived: Vec<Sentence> = Vec::new();
        for smaller in &self.sentences {
            for bigger in &self.sentences {
                if !smaller.is_proper_subset_of(bigger) {
                    continue;
                }
                let sentence = bigger.subtract(smaller)?;
                if !self.sentences.contains(&sentence) && !derived.contains(&sentence) {
                    tracing::trace!(
                        from = %bigger,
                        minus = %smaller,
                        derived = %sentence,
                        "subset derivation"
                    );
                    derived.push(sentence);
                }
            }
        }
        Ok(derived)
    }
}
