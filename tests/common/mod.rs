//! Shared helpers for integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use memory_match::core::{Palette, SessionSnapshot};
use memory_match::engine::{EngineConfig, RecordingNotifier, SessionController};
use memory_match::types::{DifficultyLevel, TileId};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once; `TEST_LOG` then `RUST_LOG` pick the level
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Six distinct symbols, exactly enough for easy
pub fn letters() -> Palette {
    Palette::new("letters", ["A", "B", "C", "D", "E", "F"])
}

pub fn easy_config(seed: u64) -> EngineConfig {
    EngineConfig {
        difficulty: DifficultyLevel::Easy,
        seed: Some(seed),
        ..Default::default()
    }
}

pub fn easy_controller(seed: u64) -> (SessionController<RecordingNotifier>, RecordingNotifier) {
    init_logging();
    let recorder = RecordingNotifier::new();
    let controller = SessionController::with_palette(&easy_config(seed), letters(), recorder.clone());
    (controller, recorder)
}

/// Tile ids holding `symbol`
pub fn ids_of(snapshot: &SessionSnapshot, symbol: &str) -> Vec<TileId> {
    snapshot
        .tiles
        .iter()
        .filter(|t| t.symbol.as_ref() == symbol)
        .map(|t| t.id)
        .collect()
}

/// Every pair on the board, keyed by symbol
pub fn pairs(snapshot: &SessionSnapshot) -> Vec<(TileId, TileId)> {
    let mut by_symbol: HashMap<&str, Vec<TileId>> = HashMap::new();
    for tile in &snapshot.tiles {
        by_symbol.entry(tile.symbol.as_ref()).or_default().push(tile.id);
    }
    let mut out: Vec<(TileId, TileId)> = by_symbol
        .into_values()
        .filter(|ids| ids.len() == 2)
        .map(|ids| (ids[0], ids[1]))
        .collect();
    out.sort();
    out
}
