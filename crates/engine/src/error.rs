use thiserror::Error;

use memory_match_core::DeckError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("deal failed: {0}")]
    Deck(#[from] DeckError),
    #[error("session runtime has shut down")]
    RuntimeClosed,
    #[error("session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Deck(err) => err.code(),
            EngineError::RuntimeClosed => "runtime_closed",
            EngineError::Join(_) => "task_failed",
        }
    }
}
