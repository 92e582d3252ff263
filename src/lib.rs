//! # yaniv-engine
//!
//! Scoring engine for the Yaniv card game: given each round's hand
//! totals and the player who declared, it tallies running scores under
//! a configurable rule set, detects false calls, applies bonuses, and
//! decides when the game ends and who wins.
//!
//! ## Design Principles
//!
//! 1. **Pure State Transitions**: Every operation takes the prior
//!    `GameState` snapshot and returns a new one. No storage, no I/O,
//!    no shared mutable state inside the engine.
//!
//! 2. **Trusted Inputs**: The engine tallies what it is given. It does
//!    not deal cards or validate hand composition; an optional
//!    validation layer in front rejects malformed rounds for callers
//!    that want it.
//!
//! 3. **Plain Records**: `GameState` serializes as a plain nested
//!    record with the field names and enum values of the existing
//!    saved-game JSON format, so any storage layer holds it verbatim.
//!
//! ## Modules
//!
//! - `core`: identifiers, house rules, players, rounds, game state
//! - `engine`: create game, add round, force end (+ input validation)
//! - `query`: pure derived views (leaders, round winners, highlights)
//! - `store`: current-game wrapper over a pluggable repository

pub mod core;
pub mod engine;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    BonusType, EndGameMode, GameId, GameState, HouseRules, IdGen, Player, PlayerHand, PlayerId,
    Round, ScoreEntry, AVATAR_COLORS,
};

pub use crate::engine::{add_round, create_game, create_game_seeded, force_end};

pub use crate::engine::validate::{
    is_suspicious_call, validate_round_input, RoundInputError, YANIV_THRESHOLD,
};

pub use crate::query::{
    first_name, highlights, initials, last_place, leader, round_winner, standings, GameHighlights,
    PlayerTally,
};

pub use crate::store::{GameRepository, GameStore, InMemoryRepository};
