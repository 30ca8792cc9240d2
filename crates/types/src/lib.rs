//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behavior beyond parsing and lookup tables,
//! making them usable in any context (state machine, controller, presentation).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `REVEAL_MS` | 2000 | Memorize window after a deck is dealt |
//! | `RESOLVE_MS` | 800 | Delay between the second pick and the verdict |
//! | `CLOCK_TICK_MS` | 1000 | Period of the elapsed-time clock |
//! | `VICTORY_STEP_OFFSETS_MS` | 0, 200, 400 | Victory fanfare schedule |
//!
//! # Difficulty Catalog
//!
//! | Level | Rows | Cols | Pairs |
//! |-------|------|------|-------|
//! | easy | 3 | 4 | 6 |
//! | medium | 4 | 4 | 8 |
//! | hard | 4 | 5 | 10 |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{DifficultyLevel, NotifyKind, Phase, PlayerInput};
//!
//! // Parse from string (case-insensitive)
//! let level = DifficultyLevel::from_str("Hard").unwrap();
//! assert_eq!(level, DifficultyLevel::Hard);
//! assert_eq!(level.pair_count(), 10);
//!
//! // Audio cue for a notification
//! assert_eq!(NotifyKind::Tap.tone().frequency_hz, 600);
//!
//! // Inputs carry a stable name for logging
//! assert_eq!(PlayerInput::SelectTile(3).as_str(), "selectTile");
//! assert_eq!(Phase::default(), Phase::Lobby);
//! ```

use serde::{Deserialize, Serialize};

/// Memorize window after a deck is dealt (2000ms)
pub const REVEAL_MS: u32 = 2000;

/// Delay between the second tile pick and the match verdict (800ms)
pub const RESOLVE_MS: u32 = 800;

/// Elapsed-time clock period (1000ms)
pub const CLOCK_TICK_MS: u32 = 1000;

/// Victory fanfare schedule, relative to the winning match
pub const VICTORY_STEP_OFFSETS_MS: [u32; 3] = [0, 200, 400];

/// Minimum symbol count of every builtin palette
pub const MIN_PALETTE_SIZE: usize = 10;

/// Tiles revealed per turn
pub const PICKS_PER_TURN: usize = 2;

/// Positional tile identifier, `0..tile_count`
pub type TileId = usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(REVEAL_MS, 2000);
        assert_eq!(RESOLVE_MS, 800);
        assert_eq!(CLOCK_TICK_MS, 1000);
        assert_eq!(VICTORY_STEP_OFFSETS_MS, [0, 200, 400]);

        let t = Timings::default();
        assert_eq!(t.reveal_ms, REVEAL_MS);
        assert_eq!(t.resolve_ms, RESOLVE_MS);
        assert_eq!(t.clock_tick_ms, CLOCK_TICK_MS);
    }

    #[test]
    fn difficulty_catalog_is_consistent() {
        for level in DifficultyLevel::ALL {
            assert_eq!(level.rows() * level.cols(), level.pair_count() * 2, "{:?}", level);
            assert_eq!(DifficultyLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Medium);
    }

    #[test]
    fn victory_steps_map_to_notifications() {
        assert_eq!(VictoryStep::First.notify_kind(), NotifyKind::VictoryStep1);
        assert_eq!(VictoryStep::Second.notify_kind(), NotifyKind::VictoryStep2);
        assert_eq!(VictoryStep::Third.notify_kind(), NotifyKind::VictoryStep3);
        assert_eq!(VictoryStep::Third.index(), 2);
    }

    #[test]
    fn tones_match_cue_table() {
        assert_eq!(NotifyKind::MatchSuccess.tone(), Tone::new(800, 300));
        assert_eq!(NotifyKind::MatchFail.tone(), Tone::new(200, 300));
        assert_eq!(NotifyKind::VictoryStep3.tone(), Tone::new(784, 400));
    }

    #[test]
    fn preference_names_roundtrip() {
        for set in EmojiSet::ALL {
            assert_eq!(EmojiSet::from_str(set.as_str()), Some(set));
        }
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_str(scheme.as_str()), Some(scheme));
        }
        assert_eq!(EmojiSet::from_str("plants"), None);

        let prefs = Preferences::default();
        assert_eq!(prefs.emoji_set, EmojiSet::Animals);
        assert_eq!(prefs.color_scheme, ColorScheme::Classic);
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&Phase::Initializing).unwrap();
        assert_eq!(json, "\"initializing\"");
        let json = serde_json::to_string(&NotifyKind::MatchSuccess).unwrap();
        assert_eq!(json, "\"matchSuccess\"");
        let level: DifficultyLevel = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(level, DifficultyLevel::Easy);
    }
}

/// Coarse-grained session mode
///
/// Phases are mutually exclusive:
/// - **Lobby**: no deck; difficulty may be staged
/// - **Initializing**: deck dealt face-up for the memorize window
/// - **Playing**: tiles face-down, input accepted, clock running
/// - **Paused**: settings open during play, clock frozen
/// - **Won**: every pair matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Lobby,
    Initializing,
    Playing,
    Paused,
    Won,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::Initializing => "initializing",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Won => "won",
        }
    }
}

/// Difficulty level names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    /// Parse level from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::DifficultyLevel;
    ///
    /// assert_eq!(DifficultyLevel::from_str("easy"), Some(DifficultyLevel::Easy));
    /// assert_eq!(DifficultyLevel::from_str("MEDIUM"), Some(DifficultyLevel::Medium));
    /// assert_eq!(DifficultyLevel::from_str("expert"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(DifficultyLevel::Easy),
            "medium" => Some(DifficultyLevel::Medium),
            "hard" => Some(DifficultyLevel::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            DifficultyLevel::Easy => 3,
            DifficultyLevel::Medium => 4,
            DifficultyLevel::Hard => 4,
        }
    }

    pub fn cols(&self) -> usize {
        match self {
            DifficultyLevel::Easy => 4,
            DifficultyLevel::Medium => 4,
            DifficultyLevel::Hard => 5,
        }
    }

    pub fn pair_count(&self) -> usize {
        match self {
            DifficultyLevel::Easy => 6,
            DifficultyLevel::Medium => 8,
            DifficultyLevel::Hard => 10,
        }
    }
}

/// Pitch and length of the beep an audio collaborator plays for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Notification kinds forwarded to the external sink (audio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotifyKind {
    /// A tile was flipped
    Tap,
    /// Two revealed tiles share a symbol
    MatchSuccess,
    /// Two revealed tiles differ
    MatchFail,
    VictoryStep1,
    VictoryStep2,
    VictoryStep3,
}

impl NotifyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyKind::Tap => "tap",
            NotifyKind::MatchSuccess => "matchSuccess",
            NotifyKind::MatchFail => "matchFail",
            NotifyKind::VictoryStep1 => "victoryStep1",
            NotifyKind::VictoryStep2 => "victoryStep2",
            NotifyKind::VictoryStep3 => "victoryStep3",
        }
    }

    /// Beep associated with this notification (C-E-G arpeggio for victory)
    pub fn tone(&self) -> Tone {
        match self {
            NotifyKind::Tap => Tone::new(600, 150),
            NotifyKind::MatchSuccess => Tone::new(800, 300),
            NotifyKind::MatchFail => Tone::new(200, 300),
            NotifyKind::VictoryStep1 => Tone::new(523, 200),
            NotifyKind::VictoryStep2 => Tone::new(659, 200),
            NotifyKind::VictoryStep3 => Tone::new(784, 400),
        }
    }
}

/// One step of the three-note victory fanfare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VictoryStep {
    First,
    Second,
    Third,
}

impl VictoryStep {
    pub const ALL: [VictoryStep; 3] = [VictoryStep::First, VictoryStep::Second, VictoryStep::Third];

    pub fn index(&self) -> usize {
        match self {
            VictoryStep::First => 0,
            VictoryStep::Second => 1,
            VictoryStep::Third => 2,
        }
    }

    pub fn notify_kind(&self) -> NotifyKind {
        match self {
            VictoryStep::First => NotifyKind::VictoryStep1,
            VictoryStep::Second => NotifyKind::VictoryStep2,
            VictoryStep::Third => NotifyKind::VictoryStep3,
        }
    }
}

/// Timers owned by a session
///
/// - **Reveal**: ends the memorize window (`Initializing` -> `Playing`)
/// - **Resolve**: adjudicates the two selected tiles
/// - **Clock**: periodic elapsed-seconds tick while `Playing`
/// - **Victory**: one fanfare note after a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Reveal,
    Resolve,
    Clock,
    Victory(VictoryStep),
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::Reveal => "reveal",
            TimerKind::Resolve => "resolve",
            TimerKind::Clock => "clock",
            TimerKind::Victory(_) => "victory",
        }
    }
}

/// Timer durations copied into every session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timings {
    pub reveal_ms: u32,
    pub resolve_ms: u32,
    pub clock_tick_ms: u32,
    pub victory_step_offsets_ms: [u32; 3],
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_ms: REVEAL_MS,
            resolve_ms: RESOLVE_MS,
            clock_tick_ms: CLOCK_TICK_MS,
            victory_step_offsets_ms: VICTORY_STEP_OFFSETS_MS,
        }
    }
}

impl Timings {
    pub fn victory_offset_ms(&self, step: VictoryStep) -> u32 {
        self.victory_step_offsets_ms[step.index()]
    }
}

/// Builtin symbol palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiSet {
    Mixed,
    Food,
    #[default]
    Animals,
    Space,
    Art,
    Sports,
}

impl EmojiSet {
    pub const ALL: [EmojiSet; 6] = [
        EmojiSet::Mixed,
        EmojiSet::Food,
        EmojiSet::Animals,
        EmojiSet::Space,
        EmojiSet::Art,
        EmojiSet::Sports,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mixed" => Some(EmojiSet::Mixed),
            "food" => Some(EmojiSet::Food),
            "animals" => Some(EmojiSet::Animals),
            "space" => Some(EmojiSet::Space),
            "art" => Some(EmojiSet::Art),
            "sports" => Some(EmojiSet::Sports),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiSet::Mixed => "mixed",
            EmojiSet::Food => "food",
            EmojiSet::Animals => "animals",
            EmojiSet::Space => "space",
            EmojiSet::Art => "art",
            EmojiSet::Sports => "sports",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmojiSet::Mixed => "Mixed Fun",
            EmojiSet::Food => "Food Paradise",
            EmojiSet::Animals => "Animal Kingdom",
            EmojiSet::Space => "Space Adventure",
            EmojiSet::Art => "Art Studio",
            EmojiSet::Sports => "Sports Arena",
        }
    }
}

/// Theme names (colors belong to presentation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Classic,
    Neon,
    Forest,
    Ocean,
    Sunset,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Classic,
        ColorScheme::Neon,
        ColorScheme::Forest,
        ColorScheme::Ocean,
        ColorScheme::Sunset,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(ColorScheme::Classic),
            "neon" => Some(ColorScheme::Neon),
            "forest" => Some(ColorScheme::Forest),
            "ocean" => Some(ColorScheme::Ocean),
            "sunset" => Some(ColorScheme::Sunset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "classic",
            ColorScheme::Neon => "neon",
            ColorScheme::Forest => "forest",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Sunset => "sunset",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "Classic Arcade",
            ColorScheme::Neon => "Neon Cyber",
            ColorScheme::Forest => "Forest Retro",
            ColorScheme::Ocean => "Ocean Deep",
            ColorScheme::Sunset => "Sunset Vibes",
        }
    }
}

/// Player preferences handed to the controller explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub color_scheme: ColorScheme,
    pub emoji_set: EmojiSet,
}

/// Discrete player inputs
///
/// These are produced by presentation (click handlers, difficulty picker,
/// settings panel) and consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Stage a difficulty for the next deal (lobby only)
    SetDifficulty(DifficultyLevel),
    /// Deal a deck from the lobby
    Start,
    /// Deal a fresh deck, keeping the difficulty
    Restart,
    /// Abandon the session and return to the lobby
    GoToLobby,
    /// Flip a tile
    SelectTile(TileId),
    /// Open the settings panel
    OpenSettings,
    /// Close the settings panel without changing anything
    CloseSettings,
    /// Close the settings panel, applying these preferences
    ApplySettings(Preferences),
}

impl PlayerInput {
    /// Convert to camelCase name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerInput::SetDifficulty(_) => "setDifficulty",
            PlayerInput::Start => "start",
            PlayerInput::Restart => "restart",
            PlayerInput::GoToLobby => "goToLobby",
            PlayerInput::SelectTile(_) => "selectTile",
            PlayerInput::OpenSettings => "openSettings",
            PlayerInput::CloseSettings => "closeSettings",
            PlayerInput::ApplySettings(_) => "applySettings",
        }
    }
}
