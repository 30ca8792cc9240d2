//! Memory Match (workspace facade crate).
//!
//! Re-exports the workspace members as `memory_match::{core,engine,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use memory_match_core as core;
pub use memory_match_engine as engine;
pub use memory_match_types as types;
