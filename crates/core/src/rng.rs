//! RNG module - seedable random source for deck shuffles
//!
//! Decks are shuffled with Fisher-Yates (`SliceRandom::shuffle`) over a ChaCha8
//! stream. A fixed seed makes every deal reproducible for tests and replays;
//! unseeded dealers take their seed from the thread RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used by [`crate::Dealer`]
pub type DeckRng = ChaCha8Rng;

/// Deterministic stream for the given seed
pub fn seeded(seed: u64) -> DeckRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fresh stream seeded from the thread RNG
pub fn from_entropy() -> DeckRng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}
