//! Error type for the knowledge base, the advisor and board construction.

use thiserror::Error;

use crate::types::Cell;

pub type Result<T, E = SolverError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Every remaining cell has been played or is a known mine.
    #[error("no moves available")]
    NoMovesAvailable,

    #[error("cell {cell} is outside the {height}x{width} board")]
    InvalidCell { cell: Cell, height: usize, width: usize },

    /// The observations fed in contradict each other.
    #[error("inconsistent knowledge: {0}")]
    InconsistentKnowledge(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
