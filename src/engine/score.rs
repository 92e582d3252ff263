//! Scoring arithmetic: streak detection, the multiple-of-50 bonus,
//! and winner selection.

use im::Vector;

use crate::core::{BonusType, Player, PlayerId, Round};

/// Points subtracted for a 3-win streak.
pub(crate) const WIN_STREAK_BONUS: i64 = 25;

/// Bonus trigger: cumulative score landing on a multiple of this.
pub(crate) const BONUS_MULTIPLE: i64 = 50;

/// Count consecutive legitimate calls by `caller`, scanning the round
/// history backwards from the most recent round. Stops at the first
/// round won by someone else or called falsely.
pub(crate) fn consecutive_wins(rounds: &Vector<Round>, caller: &PlayerId) -> u32 {
    rounds
        .iter()
        .rev()
        .take_while(|r| r.yaniv_caller_id == *caller && !r.is_false_yaniv)
        .count() as u32
}

/// Signed delta for the multiple-of-50 bonus, if it triggers.
///
/// Checked on the score after the round's base points, before any
/// streak adjustment. `Divide2` halves the integer score directly;
/// multiples of 50 always divide evenly.
pub(crate) fn fifty_bonus(bonus: BonusType, score: i64) -> Option<i64> {
    if score <= 0 || score % BONUS_MULTIPLE != 0 {
        return None;
    }
    match bonus {
        BonusType::Subtract25 => Some(-25),
        BonusType::Divide2 => Some(-(score / 2)),
        BonusType::None => None,
    }
}

/// Player with the lowest cumulative score; ties go to the first in
/// seat order.
pub(crate) fn lowest_scorer(players: &[Player]) -> Option<&Player> {
    players.iter().min_by_key(|p| p.cumulative_score)
}
