//! Pitching attribute and repertoire generation
//!
//! Every player carries a four-seam fastball; the secondary count scales with
//! talent and drops sharply for position players. Each secondary's velocity is
//! a pitch-type-specific percentage of the fastball's true mph.

use crate::models::{Pitch, PitchType, PitchingAttributes};
use crate::player::sampling::{clamp_rating, roll_int};
use rand::seq::SliceRandom;
use rand::Rng;

/// Base draw range: pitchers scale with talent, position players stay low
pub fn pitching_base_range(effective_stars: u8, is_pitcher: bool) -> (i32, i32) {
    if is_pitcher {
        let stars = effective_stars as i32;
        (40 + (stars - 1) * 8, 60 + (stars - 1) * 8)
    } else {
        (10, 30)
    }
}

/// Number of secondary pitches beyond the fastball
pub fn secondary_pitch_count(effective_stars: u8, is_pitcher: bool) -> usize {
    let stars = effective_stars as usize;
    if is_pitcher {
        (2 + stars / 2).min(5)
    } else {
        (1 + stars / 3).min(2)
    }
}

/// Velocity band for a secondary pitch, as a percentage of fastball mph
fn velocity_percent_band(pitch_type: PitchType) -> (i32, i32) {
    match pitch_type {
        // Breaking balls
        PitchType::SL | PitchType::CU | PitchType::KC => (75, 85),
        // Offspeed
        PitchType::CH | PitchType::FS | PitchType::SC => (80, 90),
        // Movement fastballs
        PitchType::FC | PitchType::SI => (90, 95),
        // Very slow novelty pitches
        PitchType::EP | PitchType::KN => (60, 70),
        _ => (75, 90),
    }
}

/// True fastball velocity in mph, clamped to [80, 102]
fn fastball_velocity_mph(
    effective_stars: u8,
    height: u8,
    is_pitcher: bool,
    rng: &mut impl Rng,
) -> i32 {
    let mut mph = roll_int(rng, 85, 95);
    if is_pitcher {
        mph += (effective_stars as f32 * 1.5).floor() as i32;
    }
    if height >= 74 {
        mph += roll_int(rng, 1, 3);
    }
    mph.clamp(80, 102)
}

pub fn generate_pitching(
    effective_stars: u8,
    height: u8,
    is_pitcher: bool,
    rng: &mut impl Rng,
) -> PitchingAttributes {
    let (base_min, base_max) = pitching_base_range(effective_stars, is_pitcher);

    let mut stamina = roll_int(rng, base_min, base_max);
    let hold_runners = roll_int(rng, base_min, base_max);
    // Rotation-profile arms carry extra stamina
    if is_pitcher && rng.gen_bool(0.7) {
        stamina += roll_int(rng, 10, 20);
    }

    let fastball_mph = fastball_velocity_mph(effective_stars, height, is_pitcher, rng);

    let mut pitches = Vec::with_capacity(6);
    pitches.push(Pitch {
        pitch_type: PitchType::FF,
        velocity: fastball_mph.min(99) as u8,
        control: clamp_rating(roll_int(rng, base_min, base_max)),
        movement: clamp_rating(roll_int(rng, base_min - 10, base_max - 10)),
        stuff: clamp_rating(roll_int(rng, base_min, base_max)),
    });

    // Draw secondaries without replacement from everything but the fastball
    let mut secondary_types: Vec<PitchType> =
        PitchType::ALL.iter().copied().filter(|t| *t != PitchType::FF).collect();
    secondary_types.shuffle(rng);

    for pitch_type in secondary_types.into_iter().take(secondary_pitch_count(effective_stars, is_pitcher)) {
        let (pct_min, pct_max) = velocity_percent_band(pitch_type);
        let percentage = roll_int(rng, pct_min, pct_max);
        let velocity = (fastball_mph * percentage) / 100;

        pitches.push(Pitch {
            pitch_type,
            velocity: velocity.clamp(1, 99) as u8,
            control: clamp_rating(roll_int(rng, base_min - 10, base_max)),
            movement: clamp_rating(roll_int(rng, base_min, base_max + 10)),
            stuff: clamp_rating(roll_int(rng, base_min - 5, base_max + 5)),
        });
    }

    PitchingAttributes {
        stamina: clamp_rating(stamina),
        hold_runners: clamp_rating(hold_runners),
        pitches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_fastball_always_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for stars in 1..=5u8 {
            for is_pitcher in [true, false] {
                let attrs = generate_pitching(stars, 72, is_pitcher, &mut rng);
                assert_eq!(attrs.pitches[0].pitch_type, PitchType::FF);
            }
        }
    }

    #[test]
    fn test_no_duplicate_pitch_types() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..2_000 {
            let attrs = generate_pitching(5, 75, true, &mut rng);
            let unique: HashSet<_> = attrs.pitches.iter().map(|p| p.pitch_type).collect();
            assert_eq!(unique.len(), attrs.pitches.len());
        }
    }

    #[test]
    fn test_secondary_counts_scale_with_talent() {
        assert_eq!(secondary_pitch_count(1, true), 2);
        assert_eq!(secondary_pitch_count(2, true), 3);
        assert_eq!(secondary_pitch_count(3, true), 3);
        assert_eq!(secondary_pitch_count(4, true), 4);
        assert_eq!(secondary_pitch_count(5, true), 4);

        assert_eq!(secondary_pitch_count(1, false), 1);
        assert_eq!(secondary_pitch_count(2, false), 1);
        assert_eq!(secondary_pitch_count(3, false), 2);
        assert_eq!(secondary_pitch_count(5, false), 2);
    }

    #[test]
    fn test_pitch_ratings_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for stars in 1..=5u8 {
            for is_pitcher in [true, false] {
                for _ in 0..300 {
                    let attrs = generate_pitching(stars, 70, is_pitcher, &mut rng);
                    assert!((1..=99).contains(&attrs.stamina));
                    assert!((1..=99).contains(&attrs.hold_runners));
                    for pitch in &attrs.pitches {
                        assert!((1..=99).contains(&pitch.velocity));
                        assert!((1..=99).contains(&pitch.control));
                        assert!((1..=99).contains(&pitch.movement));
                        assert!((1..=99).contains(&pitch.stuff));
                    }
                }
            }
        }
    }

    #[test]
    fn test_secondaries_slower_than_fastball() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..1_000 {
            let attrs = generate_pitching(4, 74, true, &mut rng);
            let fastball = attrs.pitches[0].velocity;
            for pitch in &attrs.pitches[1..] {
                assert!(
                    pitch.velocity < fastball,
                    "{:?} at {} not slower than FF at {}",
                    pitch.pitch_type,
                    pitch.velocity,
                    fastball
                );
            }
        }
    }

    #[test]
    fn test_pitchers_throw_harder_than_position_players() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let samples = 3_000;
        let mut mean_velocity = |is_pitcher: bool, rng: &mut ChaCha8Rng| -> f64 {
            (0..samples)
                .map(|_| generate_pitching(5, 72, is_pitcher, rng).pitches[0].velocity as u32)
                .sum::<u32>() as f64
                / samples as f64
        };
        let pitcher = mean_velocity(true, &mut rng);
        let position_player = mean_velocity(false, &mut rng);
        assert!(
            pitcher > position_player + 4.0,
            "pitcher FF {} vs position player FF {}",
            pitcher,
            position_player
        );
    }

    #[test]
    fn test_fastball_velocity_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..2_000 {
            let mph = fastball_velocity_mph(5, 79, true, &mut rng);
            assert!((80..=102).contains(&mph), "mph {}", mph);
        }
    }

    #[test]
    fn test_position_player_stamina_stays_low_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let attrs = generate_pitching(5, 72, false, &mut rng);
            assert!(attrs.stamina <= 30, "position player stamina {}", attrs.stamina);
        }
    }
}
