//! Players and the avatar color palette.

use serde::{Deserialize, Serialize};

use super::id::PlayerId;

/// Avatar colors, assigned round-robin at game creation.
///
/// Uniqueness is only guaranteed up to the palette size.
pub const AVATAR_COLORS: [&str; 8] = [
    "#3B82F6", // blue
    "#14B8A6", // teal
    "#A855F7", // purple
    "#EC4899", // pink
    "#F59E0B", // amber
    "#10B981", // emerald
    "#EF4444", // red
    "#8B5CF6", // violet
];

/// A player in one game.
///
/// The player set and order are fixed at creation; only
/// `cumulative_score` changes as rounds are recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Running total. Starts at 0, may go negative via bonuses.
    pub cumulative_score: i64,

    /// Avatar color (display only).
    pub color: String,
}

impl Player {
    /// Create a player at seat `index` with a fresh score.
    pub fn new(id: PlayerId, name: impl Into<String>, index: usize) -> Self {
        Self {
            id,
            name: name.into(),
            cumulative_score: 0,
            color: AVATAR_COLORS[index % AVATAR_COLORS.len()].to_string(),
        }
    }
}
