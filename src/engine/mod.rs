//! Round-scoring and game-termination engine.
//!
//! Three operations, each a pure function from the prior state snapshot
//! to a new one:
//!
//! - [`create_game`]: players + house rules -> initial state
//! - [`add_round`]: hand totals + declared caller -> state with one
//!   round appended, scores updated, end-of-game possibly set
//! - [`force_end`]: conclude a game externally
//!
//! The engine never errors. Its one defensive check: a round whose
//! declared caller has no hand entry is a no-op. All other inputs are
//! trusted as given (hand totals may be negative or arbitrarily large);
//! [`validate`] offers an optional boundary for callers that want
//! stricter checking before invoking the engine.

pub mod validate;

mod score;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use time::OffsetDateTime;

use crate::core::{
    EndGameMode, GameState, HouseRules, IdGen, Player, PlayerHand, PlayerId, Round, ScoreEntry,
};

/// Create a new game with fresh IDs.
pub fn create_game<S: AsRef<str>>(names: &[S], rules: HouseRules) -> GameState {
    create_game_with(names, rules, &mut IdGen::from_entropy())
}

/// Create a new game with IDs generated from `seed`.
///
/// Replaying the same seed and round inputs reproduces the exact same
/// sequence of states.
pub fn create_game_seeded<S: AsRef<str>>(names: &[S], rules: HouseRules, seed: u64) -> GameState {
    create_game_with(names, rules, &mut IdGen::new(seed))
}

fn create_game_with<S: AsRef<str>>(names: &[S], rules: HouseRules, ids: &mut IdGen) -> GameState {
    let players = names
        .iter()
        .enumerate()
        .map(|(index, name)| Player::new(ids.player_id(), name.as_ref(), index))
        .collect();

    GameState {
        id: ids.game_id(),
        house_rules: rules,
        players,
        rounds: im::Vector::new(),
        game_ended: false,
        winner_id: None,
        created_at: OffsetDateTime::now_utc(),
    }
}

/// Record one round: detect false calls, assign points, apply bonuses,
/// and check for game end.
///
/// Returns the prior state unchanged (as a new snapshot) when the
/// declared caller has no entry in `player_hands`. Players missing from
/// `player_hands` are skipped: their score carries over and they get no
/// entry in the round's `scores_added`.
#[must_use]
pub fn add_round(
    state: &GameState,
    player_hands: &[PlayerHand],
    yaniv_caller_id: &PlayerId,
) -> GameState {
    let mut next = state.clone();
    let rules = &state.house_rules;

    let hand_by_player: FxHashMap<&PlayerId, i64> = player_hands
        .iter()
        .map(|h| (&h.player_id, h.hand_total))
        .collect();

    // The one defensive check: no caller hand, no round.
    let Some(&caller_total) = hand_by_player.get(yaniv_caller_id) else {
        return next;
    };

    // False-call detection: any other player at or below the caller's
    // total (a tie counts). Victims collected in seat order.
    let false_yaniv_victim_ids: SmallVec<[PlayerId; 4]> = state
        .players
        .iter()
        .filter(|p| p.id != *yaniv_caller_id)
        .filter(|p| matches!(hand_by_player.get(&p.id), Some(&h) if h <= caller_total))
        .map(|p| p.id.clone())
        .collect();
    let is_false_yaniv = !false_yaniv_victim_ids.is_empty();

    // A legitimate call after 2 consecutive prior wins makes 3.
    let has_win_streak = rules.win_streak_bonus
        && !is_false_yaniv
        && score::consecutive_wins(&state.rounds, yaniv_caller_id) >= 2;

    let round_number = state.rounds.len() as u32 + 1;
    let mut scores_added = Vec::with_capacity(state.players.len());

    for player in &mut next.players {
        let Some(&hand_total) = hand_by_player.get(&player.id) else {
            continue;
        };
        let is_caller = player.id == *yaniv_caller_id;

        let points_added = if is_false_yaniv {
            if is_caller {
                rules.false_yaniv_penalty
            } else if false_yaniv_victim_ids.contains(&player.id) {
                0
            } else if rules.bystanders_score_on_false_yaniv {
                hand_total
            } else {
                0
            }
        } else if is_caller {
            0
        } else {
            hand_total
        };

        // Saturating: extreme totals clamp at the i64 bounds, the
        // engine never panics.
        let mut final_score = player.cumulative_score.saturating_add(points_added);

        let bonus = score::fifty_bonus(rules.bonus_type, final_score);
        if let Some(delta) = bonus {
            final_score = final_score.saturating_add(delta);
        }

        // Streak bonus stacks on top of the multiple-of-50 bonus.
        let streak_bonus_applied = is_caller && has_win_streak;
        if streak_bonus_applied {
            final_score = final_score.saturating_sub(score::WIN_STREAK_BONUS);
        }

        scores_added.push(ScoreEntry {
            player_id: player.id.clone(),
            points_added,
            bonus_applied: bonus.is_some(),
            bonus_amount: bonus.unwrap_or(0),
            streak_bonus_applied,
            final_score,
        });
        player.cumulative_score = final_score;
    }

    next.rounds.push_back(Round {
        round_number,
        player_hands: player_hands.to_vec(),
        yaniv_caller_id: yaniv_caller_id.clone(),
        is_false_yaniv,
        false_yaniv_victim_ids,
        scores_added,
    });

    let ended = match rules.end_game_mode {
        EndGameMode::HighScore => next
            .players
            .iter()
            .any(|p| p.cumulative_score > rules.max_score),
        EndGameMode::NumRounds => round_number >= rules.max_rounds,
    };
    if ended {
        next.game_ended = true;
        next.winner_id = score::lowest_scorer(&next.players).map(|p| p.id.clone());
    }

    next
}

/// Conclude a game before a termination condition is reached.
///
/// Winner is the player with the lowest cumulative score; ties go to
/// the first in seat order.
#[must_use]
pub fn force_end(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.game_ended = true;
    next.winner_id = score::lowest_scorer(&next.players).map(|p| p.id.clone());
    next
}
