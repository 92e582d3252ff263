//! Pure read-only queries over a `GameState` snapshot.
//!
//! Nothing here mutates state; these are the lookups the presentation
//! layer needs for leaderboards, round summaries, and avatars.

pub mod highlights;

pub use highlights::{highlights, GameHighlights, PlayerTally};

use std::cmp::Reverse;

use crate::core::{GameState, Player, PlayerId, Round};

/// The player who won a round: the first zero-scorer among the caller
/// and any false-call victims.
#[must_use]
pub fn round_winner(round: &Round) -> Option<&PlayerId> {
    round
        .scores_added
        .iter()
        .find(|s| {
            s.points_added == 0
                && (round.yaniv_caller_id == s.player_id
                    || round.false_yaniv_victim_ids.contains(&s.player_id))
        })
        .map(|s| &s.player_id)
}

/// Current leader: lowest cumulative score, ties to seat order.
#[must_use]
pub fn leader(state: &GameState) -> Option<&Player> {
    state.players.iter().min_by_key(|p| p.cumulative_score)
}

/// Current last place: highest cumulative score, ties to seat order.
///
/// Suppressed (returns `None`) while every player is tied - nobody is
/// losing yet.
#[must_use]
pub fn last_place(state: &GameState) -> Option<&Player> {
    let first = state.players.first()?;
    if state
        .players
        .iter()
        .all(|p| p.cumulative_score == first.cumulative_score)
    {
        return None;
    }
    state
        .players
        .iter()
        .min_by_key(|p| Reverse(p.cumulative_score))
}

/// Players ordered by ascending cumulative score (stable, so ties keep
/// seat order).
#[must_use]
pub fn standings(state: &GameState) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = state.players.iter().collect();
    sorted.sort_by_key(|p| p.cumulative_score);
    sorted
}

/// Uppercase initials from a display name: one letter for a single
/// word, two for anything longer.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let second = words.next().and_then(|w| w.chars().next());

    match (first, second) {
        (Some(a), Some(b)) => a.to_uppercase().chain(b.to_uppercase()).collect(),
        (Some(a), None) => a.to_uppercase().collect(),
        _ => String::new(),
    }
}

/// First whitespace-separated word of a display name, or the name
/// itself when it has no words.
#[must_use]
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
