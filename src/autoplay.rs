//! Autoplay bot for the demo runner.
//!
//! Plays from the snapshot only: it remembers symbols it has seen face-up and
//! never peeks at face-down tiles.

use std::collections::HashMap;

use memory_match::core::{SessionSnapshot, SymbolKey};
use memory_match::types::TileId;

#[derive(Debug, Default)]
pub struct Autoplayer {
    generation: u64,
    seen: HashMap<TileId, SymbolKey>,
}

impl Autoplayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember every face-up, unmatched tile
    pub fn observe(&mut self, snapshot: &SessionSnapshot) {
        if snapshot.generation != self.generation {
            self.generation = snapshot.generation;
            self.seen.clear();
        }

        for tile in &snapshot.tiles {
            if tile.matched {
                self.seen.remove(&tile.id);
            } else if tile.revealed {
                self.seen.insert(tile.id, tile.symbol.clone());
            }
        }
    }

    /// Next tile to flip, or `None` when nothing is selectable
    pub fn next_pick(&self, snapshot: &SessionSnapshot) -> Option<TileId> {
        if snapshot.input_locked {
            return None;
        }

        let open = |id: TileId| {
            snapshot
                .tiles
                .get(id)
                .is_some_and(|t| !t.matched && !snapshot.selection.contains(&id))
        };

        match snapshot.selection.first() {
            Some(&first) => {
                let symbol = self.seen.get(&first);
                self.seen
                    .iter()
                    .filter(|&(&id, s)| id != first && open(id) && Some(s) == symbol)
                    .map(|(&id, _)| id)
                    .min()
                    .or_else(|| self.first_unseen(snapshot, &open))
                    .or_else(|| (0..snapshot.tiles.len()).find(|&id| open(id)))
            }
            None => self
                .known_pair(&open)
                .or_else(|| self.first_unseen(snapshot, &open))
                .or_else(|| (0..snapshot.tiles.len()).find(|&id| open(id))),
        }
    }

    fn known_pair(&self, open: &impl Fn(TileId) -> bool) -> Option<TileId> {
        let mut by_symbol: HashMap<&SymbolKey, Vec<TileId>> = HashMap::new();
        for (&id, symbol) in &self.seen {
            if open(id) {
                by_symbol.entry(symbol).or_default().push(id);
            }
        }
        by_symbol
            .into_values()
            .filter(|ids| ids.len() >= 2)
            .filter_map(|ids| ids.into_iter().min())
            .min()
    }

    fn first_unseen(
        &self,
        snapshot: &SessionSnapshot,
        open: &impl Fn(TileId) -> bool,
    ) -> Option<TileId> {
        (0..snapshot.tiles.len()).find(|&id| open(id) && !self.seen.contains_key(&id))
    }
}
