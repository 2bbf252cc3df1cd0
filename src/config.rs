//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};
use crate::types::Dimensions;

pub const DEFAULT_HEIGHT: usize = 8;
pub const DEFAULT_WIDTH: usize = 8;
pub const DEFAULT_MINES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub mines: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            mines: DEFAULT_MINES,
        }
    }
}

impl GameConfig {
    pub fn new(height: usize, width: usize, mines: usize) -> Self {
        Self { height, width, mines }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.height, self.width)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SolverError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.height, self.width
            )));
        }
        let area = self.height * self.width;
        if self.mines > area {
            return Err(SolverError::InvalidConfig(format!(
                "{} mines do not fit on a {}x{} board",
                self.mines, self.height, self.width
            )));
        }
        Ok(())
    }
}
