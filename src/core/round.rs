//! Round records: hand totals in, per-player score deltas out.
//!
//! A `Round` is an immutable historical record once appended to a game.
//! Field names match the saved-game JSON format (camelCase, with the
//! optional fields defaulting when absent in older documents).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::id::PlayerId;

/// One player's hand total at the end of a round.
///
/// Totals may be negative (special scoring cards) and are trusted as
/// given; the engine does not validate ranges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHand {
    pub player_id: PlayerId,
    pub hand_total: i64,
}

impl PlayerHand {
    pub fn new(player_id: PlayerId, hand_total: i64) -> Self {
        Self {
            player_id,
            hand_total,
        }
    }
}

/// Scoring outcome for one player in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub player_id: PlayerId,

    /// Base points before bonuses: 0, hand total, or the false-call penalty.
    pub points_added: i64,

    /// Whether the score landed on a multiple of 50.
    #[serde(default)]
    pub bonus_applied: bool,

    /// Signed delta applied by the multiple-of-50 bonus.
    #[serde(default)]
    pub bonus_amount: i64,

    /// Whether the 3-win streak bonus applied.
    #[serde(default)]
    pub streak_bonus_applied: bool,

    /// Cumulative score after this round.
    pub final_score: i64,
}

/// One recorded round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 1-based, sequential with no gaps.
    pub round_number: u32,

    /// Hand totals as supplied by the caller.
    pub player_hands: Vec<PlayerHand>,

    /// Who called Yaniv.
    pub yaniv_caller_id: PlayerId,

    /// Derived: another player tied or beat the caller's total.
    pub is_false_yaniv: bool,

    /// Derived: players at or below the caller's total, in seat order.
    #[serde(default)]
    pub false_yaniv_victim_ids: SmallVec<[PlayerId; 4]>,

    /// One entry per scored player.
    pub scores_added: Vec<ScoreEntry>,
}

impl Round {
    /// Get a player's hand total in this round, if one was supplied.
    #[must_use]
    pub fn hand_total(&self, player: &PlayerId) -> Option<i64> {
        self.player_hands
            .iter()
            .find(|h| h.player_id == *player)
            .map(|h| h.hand_total)
    }

    /// Get a player's score entry in this round.
    #[must_use]
    pub fn score_entry(&self, player: &PlayerId) -> Option<&ScoreEntry> {
        self.scores_added.iter().find(|s| s.player_id == *player)
    }
}
