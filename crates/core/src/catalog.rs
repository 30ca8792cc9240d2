//! Difficulty catalog - fixed, read-only grid layouts

use serde::{Deserialize, Serialize};

use crate::types::DifficultyLevel;

/// Grid layout for one difficulty level
///
/// `rows * cols == pair_count * 2` holds for every catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty {
    pub level: DifficultyLevel,
    pub rows: usize,
    pub cols: usize,
    pub pair_count: usize,
}

impl Difficulty {
    /// Look up the catalog entry for a level
    pub fn of(level: DifficultyLevel) -> Self {
        Self {
            level,
            rows: level.rows(),
            cols: level.cols(),
            pair_count: level.pair_count(),
        }
    }

    /// Every catalog entry, easiest first
    pub fn catalog() -> [Difficulty; 3] {
        DifficultyLevel::ALL.map(Self::of)
    }

    pub fn tile_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Whether the grid holds exactly the dealt tiles
    pub fn is_consistent(&self) -> bool {
        self.rows * self.cols == self.tile_count()
    }
}

impl From<DifficultyLevel> for Difficulty {
    fn from(level: DifficultyLevel) -> Self {
        Self::of(level)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::of(DifficultyLevel::default())
    }
}
