//! Short string identifiers for games and players.
//!
//! Saved games reference players by short base-36 strings, so IDs are
//! transparent newtypes over `String` rather than integer indices.
//!
//! ## IdGen
//!
//! Deterministic generator built on ChaCha8:
//! - Same seed produces the same ID sequence (replay tests)
//! - `from_entropy` for normal use

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Length of generated identifiers.
const ID_LEN: usize = 7;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier for a whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Create a game ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a player, unique within one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a player ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic ID generator.
///
/// Uses ChaCha8 so a seeded generator replays the exact same sequence,
/// which keeps `create_game_seeded` fully reproducible.
#[derive(Clone, Debug)]
pub struct IdGen {
    inner: ChaCha8Rng,
}

impl IdGen {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate the next raw ID string (7 base-36 characters).
    pub fn next_id(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| ALPHABET[self.inner.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// Generate a fresh game ID.
    pub fn game_id(&mut self) -> GameId {
        GameId(self.next_id())
    }

    /// Generate a fresh player ID.
    pub fn player_id(&mut self) -> PlayerId {
        PlayerId(self.next_id())
    }
}
