//! Complete game state.
//!
//! `GameState` is the sole artifact the engine consumes and produces.
//! It serializes as a plain nested record (camelCase, RFC 3339
//! `createdAt`) so any storage layer can hold it verbatim.
//!
//! The round log uses an `im::Vector` so snapshots clone in O(1) -
//! every engine operation takes the prior state and returns a new one.

use im::Vector;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::id::{GameId, PlayerId};
use super::player::Player;
use super::round::Round;
use super::rules::HouseRules;

/// Full state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: GameId,

    /// Fixed for the game's lifetime.
    pub house_rules: HouseRules,

    /// Fixed set and seat order after creation.
    pub players: Vec<Player>,

    /// Append-only round log.
    pub rounds: Vector<Round>,

    /// Monotonic: once true, never reset by round-adding.
    pub game_ended: bool,

    /// Set exactly when `game_ended` becomes true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<PlayerId>,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GameState {
    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The winning player, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner_id.as_ref().and_then(|id| self.player(id))
    }
}
