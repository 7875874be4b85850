//! Invariant checks for generated players
//!
//! The generator's clamps make these conditions unbreakable by construction;
//! a violation here means an implementation bug, so the generator asserts on
//! the full check in debug builds and the test suite asserts on it always.

use crate::models::{Hand, PitchType, Player, Position};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("attribute {attribute} = {value} outside 1-99")]
    AttributeOutOfBand { attribute: &'static str, value: u8 },

    #[error("recruiting stars {0} outside 1-5")]
    InvalidStars(u8),

    #[error("perfect game rating {0} outside 0-10")]
    InvalidPerfectGameRating(f32),

    #[error("height {0} outside 66-79 inches")]
    InvalidHeight(u8),

    #[error("weight {0} outside 150-250 pounds")]
    InvalidWeight(u16),

    #[error("throwing hand cannot be Switch")]
    SwitchThrowingHand,

    #[error("expected 12 position ratings, found {0}")]
    WrongPositionRatingCount(usize),

    #[error("position {0} rated more than once")]
    DuplicatePositionRating(Position),

    #[error("pitch list must start with a four-seam fastball")]
    MissingFastball,

    #[error("pitch type {0:?} appears more than once")]
    DuplicatePitchType(PitchType),

    #[error("expected 1-5 secondary pitches, found {0}")]
    WrongSecondaryPitchCount(usize),
}

/// Player invariant validation utility
pub struct PlayerValidator;

impl PlayerValidator {
    /// Check every documented invariant, collecting all violations
    pub fn validate(player: &Player) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        if !(1..=5).contains(&player.recruiting_stars) {
            issues.push(ValidationIssue::InvalidStars(player.recruiting_stars));
        }
        if !(0.0..=10.0).contains(&player.perfect_game_rating) {
            issues.push(ValidationIssue::InvalidPerfectGameRating(player.perfect_game_rating));
        }
        if !(66..=79).contains(&player.height) {
            issues.push(ValidationIssue::InvalidHeight(player.height));
        }
        if !(150..=250).contains(&player.weight) {
            issues.push(ValidationIssue::InvalidWeight(player.weight));
        }
        if player.throwing_hand == Hand::Switch {
            issues.push(ValidationIssue::SwitchThrowingHand);
        }

        for (attribute, value) in Self::skill_values(player) {
            if !(1..=99).contains(&value) {
                issues.push(ValidationIssue::AttributeOutOfBand { attribute, value });
            }
        }

        Self::check_position_ratings(player, &mut issues);
        Self::check_pitches(player, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    fn check_position_ratings(player: &Player, issues: &mut Vec<ValidationIssue>) {
        if player.position_ratings.len() != Position::ALL.len() {
            issues.push(ValidationIssue::WrongPositionRatingCount(player.position_ratings.len()));
        }
        let mut seen = HashSet::new();
        for rating in &player.position_ratings {
            if !seen.insert(rating.position) {
                issues.push(ValidationIssue::DuplicatePositionRating(rating.position));
            }
            if !(1..=99).contains(&rating.rating) {
                issues.push(ValidationIssue::AttributeOutOfBand {
                    attribute: "position_rating",
                    value: rating.rating,
                });
            }
        }
    }

    fn check_pitches(player: &Player, issues: &mut Vec<ValidationIssue>) {
        let pitches = &player.pitching.pitches;
        if pitches.first().map(|p| p.pitch_type) != Some(PitchType::FF) {
            issues.push(ValidationIssue::MissingFastball);
        }
        let secondaries = pitches.len().saturating_sub(1);
        if !(1..=5).contains(&secondaries) {
            issues.push(ValidationIssue::WrongSecondaryPitchCount(secondaries));
        }
        let mut seen = HashSet::new();
        for pitch in pitches {
            if !seen.insert(pitch.pitch_type) {
                issues.push(ValidationIssue::DuplicatePitchType(pitch.pitch_type));
            }
            for (attribute, value) in [
                ("pitch_velocity", pitch.velocity),
                ("pitch_control", pitch.control),
                ("pitch_movement", pitch.movement),
                ("pitch_stuff", pitch.stuff),
            ] {
                if !(1..=99).contains(&value) {
                    issues.push(ValidationIssue::AttributeOutOfBand { attribute, value });
                }
            }
        }
    }

    fn skill_values(player: &Player) -> Vec<(&'static str, u8)> {
        let m = &player.mental;
        let b = &player.batting;
        let f = &player.fielding;
        let p = &player.pitching;
        vec![
            ("ego", m.ego),
            ("confidence", m.confidence),
            ("composure", m.composure),
            ("greed", m.greed),
            ("coachability", m.coachability),
            ("work_ethic", m.work_ethic),
            ("loyalty", m.loyalty),
            ("intelligence", m.intelligence),
            ("aggressiveness", m.aggressiveness),
            ("integrity", m.integrity),
            ("leadership", m.leadership),
            ("adaptability", m.adaptability),
            ("recovery", m.recovery),
            ("contact_vs_left", b.contact_vs_left),
            ("contact_vs_right", b.contact_vs_right),
            ("power_vs_left", b.power_vs_left),
            ("power_vs_right", b.power_vs_right),
            ("eye", b.eye),
            ("discipline", b.discipline),
            ("defensiveness", b.defensiveness),
            ("ground_ball_rate", b.ground_ball_rate),
            ("bunting_skill", b.bunting_skill),
            ("speed", f.speed),
            ("stealing_ability", f.stealing_ability),
            ("range", f.range),
            ("arm_strength", f.arm_strength),
            ("arm_accuracy", f.arm_accuracy),
            ("handling", f.handling),
            ("blocking", f.blocking),
            ("stamina", p.stamina),
            ("hold_runners", p.hold_runners),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::generator::PlayerGenerator;

    #[test]
    fn test_generated_players_pass_validation() {
        let mut generator = PlayerGenerator::from_seed(77);
        let players = generator.generate_recruiting_class(50).unwrap();
        for player in &players {
            assert_eq!(PlayerValidator::validate(player), Ok(()));
        }
    }

    #[test]
    fn test_corrupted_stars_detected() {
        let mut generator = PlayerGenerator::from_seed(78);
        let mut player = generator.generate_player(3).unwrap();
        player.recruiting_stars = 9;
        let issues = PlayerValidator::validate(&player).unwrap_err();
        assert!(issues.contains(&ValidationIssue::InvalidStars(9)));
    }

    #[test]
    fn test_duplicate_pitch_detected() {
        let mut generator = PlayerGenerator::from_seed(79);
        let mut player = generator.generate_player(3).unwrap();
        let duplicate = player.pitching.pitches[1].clone();
        player.pitching.pitches.push(duplicate.clone());
        let issues = PlayerValidator::validate(&player).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::DuplicatePitchType(t) if *t == duplicate.pitch_type)));
    }

    #[test]
    fn test_missing_position_rating_detected() {
        let mut generator = PlayerGenerator::from_seed(80);
        let mut player = generator.generate_player(3).unwrap();
        player.position_ratings.pop();
        let issues = PlayerValidator::validate(&player).unwrap_err();
        assert!(issues.contains(&ValidationIssue::WrongPositionRatingCount(11)));
    }

    #[test]
    fn test_switch_throwing_hand_detected() {
        let mut generator = PlayerGenerator::from_seed(81);
        let mut player = generator.generate_player(3).unwrap();
        player.throwing_hand = Hand::Switch;
        let issues = PlayerValidator::validate(&player).unwrap_err();
        assert!(issues.contains(&ValidationIssue::SwitchThrowingHand));
    }
}
