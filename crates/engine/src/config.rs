use memory_match_core::{Dealer, Palette};
use memory_match_types::{ColorScheme, DifficultyLevel, EmojiSet, Preferences, Timings};

pub const ENV_DIFFICULTY: &str = "MEMORY_MATCH_DIFFICULTY";
pub const ENV_EMOJI_SET: &str = "MEMORY_MATCH_EMOJI_SET";
pub const ENV_COLOR_SCHEME: &str = "MEMORY_MATCH_COLOR_SCHEME";
pub const ENV_SEED: &str = "MEMORY_MATCH_SEED";
pub const ENV_REVEAL_MS: &str = "MEMORY_MATCH_REVEAL_MS";
pub const ENV_RESOLVE_MS: &str = "MEMORY_MATCH_RESOLVE_MS";
pub const ENV_TICK_MS: &str = "MEMORY_MATCH_TICK_MS";
pub const ENV_REALTIME: &str = "MEMORY_MATCH_REALTIME";

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub difficulty: DifficultyLevel,
    pub preferences: Preferences,
    /// Fixed deck seed; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub timings: Timings,
    /// Drive timers from wall time instead of the virtual clock
    pub realtime: bool,
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unparseable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Timings::default();
        let ms = |key: &str, default: u32| get(key).and_then(|s| s.parse().ok()).unwrap_or(default);

        let difficulty = get(ENV_DIFFICULTY)
            .and_then(|s| DifficultyLevel::from_str(&s))
            .unwrap_or_default();

        let emoji_set = get(ENV_EMOJI_SET)
            .and_then(|s| EmojiSet::from_str(&s))
            .unwrap_or_default();

        let color_scheme = get(ENV_COLOR_SCHEME)
            .and_then(|s| ColorScheme::from_str(&s))
            .unwrap_or_default();

        let seed = get(ENV_SEED).and_then(|s| s.parse().ok());

        let timings = Timings {
            reveal_ms: ms(ENV_REVEAL_MS, defaults.reveal_ms),
            resolve_ms: ms(ENV_RESOLVE_MS, defaults.resolve_ms),
            clock_tick_ms: ms(ENV_TICK_MS, defaults.clock_tick_ms),
            victory_step_offsets_ms: defaults.victory_step_offsets_ms,
        };

        let realtime = get(ENV_REALTIME)
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            difficulty,
            preferences: Preferences {
                color_scheme,
                emoji_set,
            },
            seed,
            timings,
            realtime,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::builtin(self.preferences.emoji_set)
    }

    /// Dealer over `palette`, seeded when a seed is configured
    pub fn dealer_for(&self, palette: Palette) -> Dealer {
        match self.seed {
            Some(seed) => Dealer::seeded(palette, seed),
            None => Dealer::from_entropy(palette),
        }
    }

    pub fn dealer(&self) -> Dealer {
        self.dealer_for(self.palette())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.difficulty, DifficultyLevel::Medium);
        assert_eq!(cfg.preferences.emoji_set, EmojiSet::Animals);
        assert_eq!(cfg.timings.reveal_ms, 2000);
        assert!(!cfg.realtime);
    }

    #[test]
    fn test_reads_every_key() {
        let cfg = config(&[
            (ENV_DIFFICULTY, "Hard"),
            (ENV_EMOJI_SET, "space"),
            (ENV_COLOR_SCHEME, "ocean"),
            (ENV_SEED, "99"),
            (ENV_REVEAL_MS, "50"),
            (ENV_RESOLVE_MS, "20"),
            (ENV_TICK_MS, "10"),
            (ENV_REALTIME, "true"),
        ]);

        assert_eq!(cfg.difficulty, DifficultyLevel::Hard);
        assert_eq!(cfg.preferences.emoji_set, EmojiSet::Space);
        assert_eq!(cfg.preferences.color_scheme, ColorScheme::Ocean);
        assert_eq!(cfg.seed, Some(99));
        assert_eq!(cfg.timings.reveal_ms, 50);
        assert_eq!(cfg.timings.resolve_ms, 20);
        assert_eq!(cfg.timings.clock_tick_ms, 10);
        assert!(cfg.realtime);
    }

    #[test]
    fn test_garbage_falls_back() {
        let cfg = config(&[
            (ENV_DIFFICULTY, "impossible"),
            (ENV_SEED, "abc"),
            (ENV_REVEAL_MS, "-1"),
            (ENV_REALTIME, "maybe"),
        ]);
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_seeded_dealers_agree() {
        use memory_match_core::{DeckSource, Difficulty};

        let cfg = config(&[(ENV_SEED, "4")]);
        let difficulty = Difficulty::of(cfg.difficulty);
        assert_eq!(
            cfg.dealer().deal(&difficulty).unwrap(),
            cfg.dealer().deal(&difficulty).unwrap()
        );
    }
}
