//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the matching rules, the session state machine, and deck
//! generation. It has **no dependencies** on rendering, audio, or timers, making it:
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Testable**: Every transition is a pure function of `(session, event)`
//! - **Portable**: Can be driven by a terminal, a GUI, or a headless bot
//!
//! # Module Structure
//!
//! - [`catalog`]: difficulty layouts (rows, columns, pair counts)
//! - [`palette`]: ordered symbol sets, including the builtin emoji sets
//! - [`rng`]: seedable random source for deck shuffles
//! - [`deck`]: paired, shuffled tile sequences
//! - [`session`]: the session reducer and its side-effect list
//! - [`snapshot`]: read-only view for presentation
//! - [`rating`]: end-of-round performance rating and clock formatting
//! - [`records`]: analytics/preference record schemas
//!
//! # Game Rules
//!
//! - **Memorize window**: a fresh deck is shown face-up for 2000ms
//! - **Two picks per turn**: a turn ends when the second tile is flipped
//! - **Resolution delay**: the verdict lands 800ms after the second pick
//! - **Moves**: one per turn, whether or not the pair matched
//! - **Clock**: one second per tick, only while playing
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Dealer, Event, Palette, Session, Step};
//! use memory_match_core::types::{DifficultyLevel, EmojiSet, Phase, Timings, TimerKind};
//!
//! let mut dealer = Dealer::seeded(Palette::builtin(EmojiSet::Animals), 7);
//! let session = Session::new(DifficultyLevel::Easy, Timings::default());
//!
//! let Step::Next { session, .. } = session.transition(Event::Start, &mut dealer).unwrap() else {
//!     panic!("start is accepted in the lobby");
//! };
//! assert_eq!(session.phase(), Phase::Initializing);
//! assert_eq!(session.tiles().len(), 12);
//!
//! let Step::Next { session, .. } = session
//!     .transition(Event::Timer(TimerKind::Reveal), &mut dealer)
//!     .unwrap()
//! else {
//!     panic!("reveal ends the memorize window");
//! };
//! assert_eq!(session.phase(), Phase::Playing);
//! ```

pub mod catalog;
pub mod deck;
pub mod error;
pub mod palette;
pub mod rating;
pub mod records;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use catalog::Difficulty;
pub use deck::{generate, Dealer, DeckSource, Tile};
pub use error::DeckError;
pub use palette::{Palette, SymbolKey};
pub use rating::{format_clock, PerformanceRating};
pub use records::{SessionSummary, UserPreferenceRecord};
pub use rng::DeckRng;
pub use session::{Effect, Effects, Event, IgnoreReason, Session, Step};
pub use snapshot::{SessionSnapshot, TileView};
