//! Aggregate highlights across a finished (or in-progress) game.
//!
//! Simple linear scans over the round log; presentation-adjacent but
//! pure, so they live with the other read-only queries.

use rustc_hash::FxHashMap;

use crate::core::{GameState, PlayerId};

/// Per-player call tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerTally {
    /// Legitimate Yaniv calls.
    pub yaniv_wins: u32,
    /// False calls.
    pub false_yanivs: u32,
}

/// Aggregate statistics over all rounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameHighlights {
    /// Call tallies, one entry per player.
    pub tallies: FxHashMap<PlayerId, PlayerTally>,

    /// Largest single hand total seen, with its holder.
    pub biggest_hand: Option<(PlayerId, i64)>,

    /// Lowest hand a legitimate call was made on, with the caller.
    pub lowest_call: Option<(PlayerId, i64)>,

    /// Round with the largest combined non-caller hand total.
    pub biggest_bystander_round: Option<(u32, i64)>,
}

/// Compute highlights for a game.
#[must_use]
pub fn highlights(state: &GameState) -> GameHighlights {
    let mut out = GameHighlights::default();
    for player in &state.players {
        out.tallies.insert(player.id.clone(), PlayerTally::default());
    }

    for round in &state.rounds {
        let tally = out
            .tallies
            .entry(round.yaniv_caller_id.clone())
            .or_default();
        if round.is_false_yaniv {
            tally.false_yanivs += 1;
        } else {
            tally.yaniv_wins += 1;
        }

        let mut bystander_total: i64 = 0;
        for hand in &round.player_hands {
            if out
                .biggest_hand
                .as_ref()
                .map_or(true, |&(_, best)| hand.hand_total > best)
            {
                out.biggest_hand = Some((hand.player_id.clone(), hand.hand_total));
            }

            if hand.player_id == round.yaniv_caller_id {
                if !round.is_false_yaniv
                    && out
                        .lowest_call
                        .as_ref()
                        .map_or(true, |&(_, best)| hand.hand_total < best)
                {
                    out.lowest_call = Some((hand.player_id.clone(), hand.hand_total));
                }
            } else {
                bystander_total = bystander_total.saturating_add(hand.hand_total);
            }
        }

        if out
            .biggest_bystander_round
            .as_ref()
            .map_or(true, |&(_, best)| bystander_total > best)
        {
            out.biggest_bystander_round = Some((round.round_number, bystander_total));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HouseRules, PlayerHand};
    use crate::engine;
    use crate::core::GameState;

    fn hands(state: &GameState, totals: &[i64]) -> Vec<PlayerHand> {
        state
            .players
            .iter()
            .zip(totals)
            .map(|(p, &t)| PlayerHand::new(p.id.clone(), t))
            .collect()
    }

    #[test]
    fn test_empty_game() {
        let state = engine::create_game_seeded(&["Alice", "Bob"], HouseRules::default(), 42);
        let h = highlights(&state);

        assert_eq!(h.tallies.len(), 2);
        assert!(h.biggest_hand.is_none());
        assert!(h.lowest_call.is_none());
        assert!(h.biggest_bystander_round.is_none());
    }

    #[test]
    fn test_tallies_and_extrema() {
        let state = engine::create_game_seeded(&["Alice", "Bob", "Cleo"], HouseRules::default(), 42);
        let alice = state.players[0].id.clone();
        let bob = state.players[1].id.clone();

        // Round 1: Alice calls legitimately on 3.
        let state = engine::add_round(&state, &hands(&state, &[3, 25, 10]), &alice);
        // Round 2: Bob calls on 5, Alice has 4 -> false call.
        let state = engine::add_round(&state, &hands(&state, &[4, 5, 40]), &bob);
        // Round 3: Alice calls again on 2.
        let state = engine::add_round(&state, &hands(&state, &[2, 18, 7]), &alice);

        let h = highlights(&state);

        assert_eq!(h.tallies[&alice], PlayerTally { yaniv_wins: 2, false_yanivs: 0 });
        assert_eq!(h.tallies[&bob], PlayerTally { yaniv_wins: 0, false_yanivs: 1 });

        let cleo = state.players[2].id.clone();
        assert_eq!(h.biggest_hand, Some((cleo, 40)));
        assert_eq!(h.lowest_call, Some((alice, 2)));
        // Round 2 bystanders: Alice 4 + Cleo 40 = 44.
        assert_eq!(h.biggest_bystander_round, Some((2, 44)));
    }

    #[test]
    fn test_bystander_total_saturates_at_i64_max() {
        let state = engine::create_game_seeded(&["Alice", "Bob", "Cleo"], HouseRules::default(), 42);
        let alice = state.players[0].id.clone();

        // Two maxed-out bystander hands clamp instead of overflowing.
        let state = engine::add_round(&state, &hands(&state, &[3, i64::MAX, i64::MAX]), &alice);
        let h = highlights(&state);

        assert_eq!(h.biggest_bystander_round, Some((1, i64::MAX)));
    }
}
