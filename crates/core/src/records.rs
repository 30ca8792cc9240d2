//! Record schemas emitted for analytics and preference storage
//!
//! Field names are snake_case on the wire and enum values lowercase, e.g.
//!
//! ```json
//! {"moves":12,"time_seconds":41,"difficulty":"medium","completed":true,
//!  "color_scheme":"classic","emoji_set":"animals"}
//! ```

use serde::{Deserialize, Serialize};

use crate::snapshot::SessionSnapshot;
use crate::types::{ColorScheme, DifficultyLevel, EmojiSet, Phase, Preferences};

/// Outcome of one round
///
/// Only `moves`, `difficulty` and `completed` are required when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSummary {
    pub moves: u32,
    #[serde(default)]
    pub time_seconds: u32,
    pub difficulty: DifficultyLevel,
    pub completed: bool,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// Stored records default to the mixed set, not the settings default
    #[serde(default = "default_record_emoji_set")]
    pub emoji_set: EmojiSet,
}

fn default_record_emoji_set() -> EmojiSet {
    EmojiSet::Mixed
}

impl SessionSummary {
    pub fn from_snapshot(snapshot: &SessionSnapshot, preferences: &Preferences) -> Self {
        Self {
            moves: snapshot.moves,
            time_seconds: snapshot.elapsed_seconds,
            difficulty: snapshot.difficulty,
            completed: snapshot.phase == Phase::Won,
            color_scheme: preferences.color_scheme,
            emoji_set: preferences.emoji_set,
        }
    }
}

/// Stored user preferences; absent fields keep their defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPreferenceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_emoji_set: Option<EmojiSet>,
}

impl UserPreferenceRecord {
    pub fn into_preferences(self) -> Preferences {
        Preferences {
            color_scheme: self.memory_color_scheme.unwrap_or_default(),
            emoji_set: self.memory_emoji_set.unwrap_or_default(),
        }
    }
}

impl From<Preferences> for UserPreferenceRecord {
    fn from(prefs: Preferences) -> Self {
        Self {
            memory_color_scheme: Some(prefs.color_scheme),
            memory_emoji_set: Some(prefs.emoji_set),
        }
    }
}
