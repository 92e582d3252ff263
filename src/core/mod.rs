//! Core data types: identifiers, house rules, players, rounds, state.
//!
//! Everything here is a plain serializable record; the scoring rules
//! that transform these records live in `engine`.

pub mod id;
pub mod player;
pub mod round;
pub mod rules;
pub mod state;

pub use id::{GameId, IdGen, PlayerId};
pub use player::{Player, AVATAR_COLORS};
pub use round::{PlayerHand, Round, ScoreEntry};
pub use rules::{BonusType, EndGameMode, HouseRules};
pub use state::GameState;
