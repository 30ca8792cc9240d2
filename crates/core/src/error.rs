use thiserror::Error;

/// Deck generation failure
///
/// Fatal to the generation attempt only: the session that requested the deal
/// is left untouched, and the caller may retry with a larger palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("palette has {available} distinct symbols, {required} pairs requested")]
    InsufficientSymbols { required: usize, available: usize },
}

impl DeckError {
    pub fn code(self) -> &'static str {
        match self {
            DeckError::InsufficientSymbols { .. } => "insufficient_symbols",
        }
    }
}
