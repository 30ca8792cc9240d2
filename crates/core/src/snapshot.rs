use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::palette::SymbolKey;
use crate::rating::{format_clock, PerformanceRating};
use crate::types::{DifficultyLevel, Phase, TileId, PICKS_PER_TURN};

/// One tile as presentation draws it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub symbol: SymbolKey,
    /// Face-up: memorize window, selected, or matched
    pub revealed: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub tiles: Vec<TileView>,
    pub selection: ArrayVec<TileId, PICKS_PER_TURN>,
    pub matched_count: usize,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub difficulty: DifficultyLevel,
    pub settings_open: bool,
    pub input_locked: bool,
    pub generation: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Lobby;
        self.tiles.clear();
        self.selection.clear();
        self.matched_count = 0;
        self.moves = 0;
        self.elapsed_seconds = 0;
        self.difficulty = DifficultyLevel::default();
        self.settings_open = false;
        self.input_locked = false;
        self.generation = 0;
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn pairs_found(&self) -> usize {
        self.matched_count / 2
    }

    /// Elapsed time as `m:ss`
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// Rating for a finished round
    pub fn rating(&self) -> Option<PerformanceRating> {
        self.is_won()
            .then(|| PerformanceRating::for_result(self.moves, self.elapsed_seconds))
    }
}
