//! Property tests: the engine never panics, the round log only grows,
//! and scores stay consistent for arbitrary inputs.

use proptest::prelude::*;
use yaniv_engine::{
    add_round, create_game_seeded, BonusType, EndGameMode, GameState, HouseRules, PlayerHand,
};

fn arb_rules() -> impl Strategy<Value = HouseRules> {
    (
        0i64..200,
        any::<bool>(),
        prop_oneof![
            Just(BonusType::Subtract25),
            Just(BonusType::Divide2),
            Just(BonusType::None),
        ],
        any::<bool>(),
        prop_oneof![Just(EndGameMode::HighScore), Just(EndGameMode::NumRounds)],
        50i64..300,
        1u32..20,
    )
        .prop_map(
            |(penalty, bystanders, bonus, streak, mode, max_score, max_rounds)| HouseRules {
                false_yaniv_penalty: penalty,
                bystanders_score_on_false_yaniv: bystanders,
                bonus_type: bonus,
                win_streak_bonus: streak,
                end_game_mode: mode,
                max_score,
                max_rounds,
            },
        )
}

/// Mostly realistic totals, with the full `i64` range and its bounds
/// mixed in so saturation paths get exercised.
fn arb_hand_total() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -50i64..500,
        1 => any::<i64>(),
        1 => prop_oneof![Just(i64::MIN), Just(i64::MAX)],
    ]
}

/// A scripted game: player count, rules, and per-round (totals, caller index).
fn arb_script() -> impl Strategy<Value = (usize, HouseRules, Vec<(Vec<i64>, usize)>)> {
    (2usize..=6, arb_rules()).prop_flat_map(|(player_count, rules)| {
        let rounds = prop::collection::vec(
            (
                prop::collection::vec(arb_hand_total(), player_count),
                0..player_count,
            ),
            0..15,
        );
        (Just(player_count), Just(rules), rounds)
    })
}

fn play(player_count: usize, rules: HouseRules, script: &[(Vec<i64>, usize)]) -> GameState {
    let names: Vec<String> = (0..player_count).map(|i| format!("P{i}")).collect();
    let mut state = create_game_seeded(&names, rules, 7);
    for (totals, caller_idx) in script {
        // Ended is terminal: a well-behaved caller stops here.
        if state.game_ended {
            break;
        }
        let hands: Vec<PlayerHand> = state
            .players
            .iter()
            .zip(totals)
            .map(|(p, &t)| PlayerHand::new(p.id.clone(), t))
            .collect();
        let caller = state.players[*caller_idx].id.clone();
        state = add_round(&state, &hands, &caller);
    }
    state
}

proptest! {
    #[test]
    fn round_numbers_are_sequential((player_count, rules, script) in arb_script()) {
        let state = play(player_count, rules, &script);

        prop_assert!(state.round_count() <= script.len());
        for (i, round) in state.rounds.iter().enumerate() {
            prop_assert_eq!(round.round_number, i as u32 + 1);
        }
    }

    #[test]
    fn cumulative_score_equals_last_final_score((player_count, rules, script) in arb_script()) {
        let state = play(player_count, rules, &script);

        for player in &state.players {
            let expected = state
                .rounds
                .iter()
                .rev()
                .find_map(|r| r.score_entry(&player.id))
                .map_or(0, |e| e.final_score);
            prop_assert_eq!(player.cumulative_score, expected);
        }
    }

    #[test]
    fn replay_is_deterministic((player_count, rules, script) in arb_script()) {
        let a = play(player_count, rules.clone(), &script);
        let b = play(player_count, rules, &script);

        prop_assert_eq!(a.id, b.id);
        prop_assert_eq!(a.players, b.players);
        prop_assert_eq!(a.rounds, b.rounds);
        prop_assert_eq!(a.game_ended, b.game_ended);
        prop_assert_eq!(a.winner_id, b.winner_id);
    }

    #[test]
    fn winner_set_exactly_when_ended((player_count, rules, script) in arb_script()) {
        let state = play(player_count, rules, &script);

        prop_assert_eq!(state.winner_id.is_some(), state.game_ended);
        if let Some(winner) = state.winner() {
            let min = state.players.iter().map(|p| p.cumulative_score).min().unwrap();
            prop_assert_eq!(winner.cumulative_score, min);
        }
    }

    #[test]
    fn round_trip_serialization((player_count, rules, script) in arb_script()) {
        let state = play(player_count, rules, &script);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }
}
