//! End-of-round rating and clock formatting
//!
//! | Rating | Moves | Seconds |
//! |--------|-------|---------|
//! | LEGENDARY! | <= 10 | <= 30 |
//! | Incredible! | <= 15 | <= 45 |
//! | Great! | <= 20 | <= 60 |
//! | Good Job! | any | any |
//!
//! Both limits must hold; the first matching row wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceRating {
    Legendary,
    Incredible,
    Great,
    GoodJob,
}

impl PerformanceRating {
    /// Best first
    pub const ALL: [PerformanceRating; 4] = [
        PerformanceRating::Legendary,
        PerformanceRating::Incredible,
        PerformanceRating::Great,
        PerformanceRating::GoodJob,
    ];

    /// `(max_moves, max_seconds)` for this rating, `None` for the fallback
    pub fn limits(self) -> Option<(u32, u32)> {
        match self {
            PerformanceRating::Legendary => Some((10, 30)),
            PerformanceRating::Incredible => Some((15, 45)),
            PerformanceRating::Great => Some((20, 60)),
            PerformanceRating::GoodJob => None,
        }
    }

    pub fn for_result(moves: u32, seconds: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|rating| match rating.limits() {
                Some((max_moves, max_seconds)) => moves <= max_moves && seconds <= max_seconds,
                None => true,
            })
            .unwrap_or(PerformanceRating::GoodJob)
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceRating::Legendary => "LEGENDARY!",
            PerformanceRating::Incredible => "Incredible!",
            PerformanceRating::Great => "Great!",
            PerformanceRating::GoodJob => "Good Job!",
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
