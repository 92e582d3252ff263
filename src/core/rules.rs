//! House rules configuration.
//!
//! Fixed for the lifetime of a game. Serialized field names and enum
//! values match the saved-game JSON format exactly
//! (`bonusType: "subtract25" | "divide2" | "none"`,
//! `endGameMode: "highScore" | "numRounds"`).

use serde::{Deserialize, Serialize};

/// Adjustment applied when a cumulative score lands exactly on a
/// positive multiple of 50.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BonusType {
    /// Subtract 25 from the score.
    #[default]
    Subtract25,
    /// Halve the score (integer division; multiples of 50 divide evenly).
    Divide2,
    /// No adjustment.
    None,
}

/// How the game decides it is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EndGameMode {
    /// Ends once any player's score strictly exceeds `max_score`.
    #[default]
    HighScore,
    /// Ends once `max_rounds` rounds have been played.
    NumRounds,
}

/// House rules, immutable per game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRules {
    /// Points added to the caller's score on a false call.
    pub false_yaniv_penalty: i64,

    /// Whether non-caller, non-winning players still add their hand
    /// total on a false call (otherwise they score 0).
    pub bystanders_score_on_false_yaniv: bool,

    /// Multiple-of-50 adjustment.
    pub bonus_type: BonusType,

    /// Extra -25 for 3 consecutive successful calls by the same player.
    pub win_streak_bonus: bool,

    /// Game termination mode.
    pub end_game_mode: EndGameMode,

    /// Threshold for `HighScore` mode.
    pub max_score: i64,

    /// Threshold for `NumRounds` mode.
    pub max_rounds: u32,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            false_yaniv_penalty: 25,
            bystanders_score_on_false_yaniv: false,
            bonus_type: BonusType::Subtract25,
            win_streak_bonus: false,
            end_game_mode: EndGameMode::HighScore,
            max_score: 150,
            max_rounds: 10,
        }
    }
}

impl HouseRules {
    /// Set the false-call penalty.
    #[must_use]
    pub fn with_false_yaniv_penalty(mut self, penalty: i64) -> Self {
        self.false_yaniv_penalty = penalty;
        self
    }

    /// Make bystanders score their hand total on a false call.
    #[must_use]
    pub fn with_bystanders_scoring(mut self) -> Self {
        self.bystanders_score_on_false_yaniv = true;
        self
    }

    /// Set the multiple-of-50 bonus type.
    #[must_use]
    pub fn with_bonus_type(mut self, bonus: BonusType) -> Self {
        self.bonus_type = bonus;
        self
    }

    /// Enable the 3-win streak bonus.
    #[must_use]
    pub fn with_win_streak_bonus(mut self) -> Self {
        self.win_streak_bonus = true;
        self
    }

    /// End the game when a score strictly exceeds `max_score`.
    #[must_use]
    pub fn ending_at_score(mut self, max_score: i64) -> Self {
        self.end_game_mode = EndGameMode::HighScore;
        self.max_score = max_score;
        self
    }

    /// End the game after a fixed number of rounds.
    #[must_use]
    pub fn ending_after_rounds(mut self, max_rounds: u32) -> Self {
        self.end_game_mode = EndGameMode::NumRounds;
        self.max_rounds = max_rounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = HouseRules::default();

        assert_eq!(rules.false_yaniv_penalty, 25);
        assert!(!rules.bystanders_score_on_false_yaniv);
        assert_eq!(rules.bonus_type, BonusType::Subtract25);
        assert!(!rules.win_streak_bonus);
        assert_eq!(rules.end_game_mode, EndGameMode::HighScore);
        assert_eq!(rules.max_score, 150);
        assert_eq!(rules.max_rounds, 10);
    }

    #[test]
    fn test_builders() {
        let rules = HouseRules::default()
            .with_false_yaniv_penalty(50)
            .with_bystanders_scoring()
            .with_bonus_type(BonusType::Divide2)
            .with_win_streak_bonus()
            .ending_after_rounds(5);

        assert_eq!(rules.false_yaniv_penalty, 50);
        assert!(rules.bystanders_score_on_false_yaniv);
        assert_eq!(rules.bonus_type, BonusType::Divide2);
        assert!(rules.win_streak_bonus);
        assert_eq!(rules.end_game_mode, EndGameMode::NumRounds);
        assert_eq!(rules.max_rounds, 5);
    }

    #[test]
    fn test_enum_string_values() {
        assert_eq!(serde_json::to_string(&BonusType::Subtract25).unwrap(), "\"subtract25\"");
        assert_eq!(serde_json::to_string(&BonusType::Divide2).unwrap(), "\"divide2\"");
        assert_eq!(serde_json::to_string(&BonusType::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&EndGameMode::HighScore).unwrap(), "\"highScore\"");
        assert_eq!(serde_json::to_string(&EndGameMode::NumRounds).unwrap(), "\"numRounds\"");
    }

    #[test]
    fn test_field_names_camel_case() {
        let json = serde_json::to_value(HouseRules::default()).unwrap();
        let obj = json.as_object().unwrap();

        assert!(obj.contains_key("falseYanivPenalty"));
        assert!(obj.contains_key("bystandersScoreOnFalseYaniv"));
        assert!(obj.contains_key("bonusType"));
        assert!(obj.contains_key("winStreakBonus"));
        assert!(obj.contains_key("endGameMode"));
        assert!(obj.contains_key("maxScore"));
        assert!(obj.contains_key("maxRounds"));
    }
}
