//! Optional input validation in front of the pure engine.
//!
//! The engine itself trusts its inputs (see [`crate::engine`]); callers
//! that want hard rejection of malformed rounds run
//! [`validate_round_input`] first and only invoke `add_round` on `Ok`.
//! Suspicious-but-legal inputs (a declared hand above the conventional
//! Yaniv threshold) are a separate, non-fatal check so the presentation
//! layer can warn without blocking.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{GameState, PlayerHand, PlayerId};

/// Conventional maximum hand total for declaring Yaniv.
pub const YANIV_THRESHOLD: i64 = 5;

/// Rejection reasons for a round's inputs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoundInputError {
    #[error("game has already ended")]
    GameEnded,

    #[error("caller {0} is not part of this game")]
    UnknownCaller(PlayerId),

    #[error("no hand total supplied for caller {0}")]
    MissingCallerHand(PlayerId),

    #[error("hand supplied for unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("duplicate hand entry for player {0}")]
    DuplicateHand(PlayerId),

    #[error("no hand total supplied for player {0}")]
    MissingHand(PlayerId),
}

/// Check a round's inputs against the game they are destined for.
///
/// Strictly stronger than the engine's own contract: the engine would
/// accept everything here except a missing caller hand.
pub fn validate_round_input(
    state: &GameState,
    player_hands: &[PlayerHand],
    yaniv_caller_id: &PlayerId,
) -> Result<(), RoundInputError> {
    if state.game_ended {
        return Err(RoundInputError::GameEnded);
    }
    if state.player(yaniv_caller_id).is_none() {
        return Err(RoundInputError::UnknownCaller(yaniv_caller_id.clone()));
    }

    let mut seen: FxHashSet<&PlayerId> = FxHashSet::default();
    for hand in player_hands {
        if state.player(&hand.player_id).is_none() {
            return Err(RoundInputError::UnknownPlayer(hand.player_id.clone()));
        }
        if !seen.insert(&hand.player_id) {
            return Err(RoundInputError::DuplicateHand(hand.player_id.clone()));
        }
    }

    for player in &state.players {
        if !seen.contains(&player.id) {
            if player.id == *yaniv_caller_id {
                return Err(RoundInputError::MissingCallerHand(player.id.clone()));
            }
            return Err(RoundInputError::MissingHand(player.id.clone()));
        }
    }

    Ok(())
}

/// Whether the declared caller's hand total exceeds the conventional
/// Yaniv threshold. Legal per the engine, worth a UI warning.
#[must_use]
pub fn is_suspicious_call(player_hands: &[PlayerHand], yaniv_caller_id: &PlayerId) -> bool {
    player_hands
        .iter()
        .find(|h| h.player_id == *yaniv_caller_id)
        .is_some_and(|h| h.hand_total > YANIV_THRESHOLD)
}
