//! Symbol palettes - ordered sets of distinct symbol keys
//!
//! The deck generator takes the first `pair_count` symbols of a palette, so the
//! order here is meaningful: it is the truncation order, not a display order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::EmojiSet;

/// Opaque symbol key shared by both tiles of a pair
pub type SymbolKey = Arc<str>;

const MIXED: [&str; 32] = [
    "🎨", "🎭", "🎪", "🎯", "🎲", "🎸", "🎺", "🎷", "🍎", "🍌", "🍓", "🍊", "🍇", "🍑", "🍒", "🥝",
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "⭐", "🌟", "✨", "💫", "🌙", "☀️", "🌈", "⚡",
];

const FOOD: [&str; 32] = [
    "🍕", "🍔", "🍟", "🌭", "🥪", "🌮", "🌯", "🥙", "🍝", "🍜", "🍲", "🍛", "🍣", "🍱", "🥟", "🍤",
    "🍰", "🧁", "🍪", "🍩", "🍎", "🍌", "🍓", "🥝", "🍇", "🍊", "🥭", "🍑", "🍒", "🥥", "🥑", "🍅",
];

const ANIMALS: [&str; 32] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐸", "🐷", "🐵", "🐺", "🦝",
    "🦔", "🐧", "🐦", "🦅", "🦆", "🐥", "🐛", "🦋", "🐌", "🐞", "🐢", "🦎", "🐍", "🐙", "🐠", "🐟",
];

const SPACE: [&str; 32] = [
    "🚀", "🛸", "🌍", "🌎", "🌏", "🌕", "🌖", "🌗", "🌘", "🌑", "🌒", "🌓", "🌔", "⭐", "🌟", "✨",
    "💫", "☄️", "🌌", "🔭", "🛰️", "👽", "🤖", "⚡", "💎", "🔮", "🌈", "☀️", "🪐", "🌙", "💥", "🔥",
];

const ART: [&str; 31] = [
    "🎨", "🖌️", "🖍️", "✏️", "🖊️", "🖋️", "✒️", "🖇️", "📐", "📌", "📎", "🎭", "🎪", "🎯", "🎲", "🎸",
    "🎺", "🎷", "🥁", "🎹", "🎤", "🎧", "📷", "📸", "🎬", "🎞️", "📚", "📖", "📝", "📄", "📃",
];

const SPORTS: [&str; 32] = [
    "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸", "🥅", "⛳", "🏹", "🎣", "🥊", "🥋",
    "🎽", "🛹", "🛷", "⛷️", "🏂", "🏄", "🚴", "🤸", "🏃", "🏊", "🧗", "🤺", "🏇", "⛹️", "🏋️", "🤾",
];

/// Named, ordered list of distinct symbol keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    name: String,
    symbols: Vec<SymbolKey>,
}

impl Palette {
    /// Build a palette, dropping repeated keys (first occurrence wins)
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<SymbolKey> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if !distinct.iter().any(|s| s.as_ref() == symbol) {
                distinct.push(Arc::from(symbol));
            }
        }

        Self {
            name: name.into(),
            symbols: distinct,
        }
    }

    /// One of the builtin emoji sets
    pub fn builtin(set: EmojiSet) -> Self {
        let symbols: &[&str] = match set {
            EmojiSet::Mixed => &MIXED,
            EmojiSet::Food => &FOOD,
            EmojiSet::Animals => &ANIMALS,
            EmojiSet::Space => &SPACE,
            EmojiSet::Art => &ART,
            EmojiSet::Sports => &SPORTS,
        };
        Self::new(set.display_name(), symbols.iter().copied())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[SymbolKey] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// First `count` symbols, or `None` when the palette is too small
    pub fn take(&self, count: usize) -> Option<&[SymbolKey]> {
        self.symbols.get(..count)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin(EmojiSet::default())
    }
}
