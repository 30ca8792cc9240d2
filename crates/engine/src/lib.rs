//! Engine module - drives sessions through time
//!
//! The core crate decides *what* happens; this crate makes it happen:
//!
//! - [`timer`]: deadline queue over a virtual millisecond clock
//! - [`notify`]: notification sinks (recording, channel, tracing, closures)
//! - [`controller`]: owns the live session, executes effects, drops stale timers
//! - [`config`]: environment-driven configuration
//! - [`runtime`]: tokio task that feeds wall time and player input to a controller
//!
//! # Example
//!
//! ```
//! use memory_match_engine::{EngineConfig, NullNotifier, SessionController};
//! use memory_match_engine::types::{DifficultyLevel, Phase};
//!
//! let config = EngineConfig {
//!     difficulty: DifficultyLevel::Easy,
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let mut controller = SessionController::new(&config, NullNotifier);
//!
//! controller.start().unwrap();
//! controller.advance(2000).unwrap();
//! assert_eq!(controller.phase(), Phase::Playing);
//!
//! controller.advance(3000).unwrap();
//! assert_eq!(controller.snapshot().elapsed_seconds, 3);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod runtime;
pub mod timer;

pub use memory_match_types as types;

pub use config::EngineConfig;
pub use controller::{Outcome, SessionController, TimerTag};
pub use error::EngineError;
pub use notify::{ChannelNotifier, Notifier, NullNotifier, RecordingNotifier, TracingNotifier};
pub use runtime::{spawn, SessionHandle};
pub use timer::{Fired, TimerHandle, TimerManager};
