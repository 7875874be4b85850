//! Gem/bust talent resolution
//!
//! Converts the nominal 1-5 star rating shown to scouts into the effective
//! talent level used by every downstream attribute sampler. Lower-rated
//! recruits carry much higher bust probability than upside; that asymmetry is
//! a deliberate balance decision and the thresholds here are exact.

use crate::error::{GenError, Result};
use crate::player::sampling::{roll_float, WeightedTable};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hidden recruit status, never shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecruitStatus {
    Gem,
    Bust,
    Normal,
}

/// Outcome of resolving a nominal star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentResolution {
    pub status: RecruitStatus,
    /// 1-5, the internal baseline for attribute generation
    pub effective_stars: u8,
}

/// Gem and bust probability per nominal star rating
fn gem_bust_chances(stars: u8) -> (f64, f64) {
    match stars {
        5 => (0.10, 0.10),
        4 => (0.10, 0.10),
        3 => (0.10, 0.10),
        2 => (0.15, 0.30),
        1 => (0.20, 0.60),
        _ => (0.10, 0.10),
    }
}

/// Magnitude of a gem/bust offset: 1 level 75%, 2 levels 20%, 3 levels 5%
fn offset_magnitude(rng: &mut impl Rng) -> u8 {
    let table = WeightedTable::new(vec![(1u8, 0.75), (2u8, 0.20), (3u8, 0.05)])
        .expect("static offset magnitude table is valid");
    table.sample(rng)
}

pub fn validate_stars(stars: u8) -> Result<()> {
    if (1..=5).contains(&stars) {
        Ok(())
    } else {
        Err(GenError::InvalidParameter(format!("star rating must be 1-5, got {}", stars)))
    }
}

/// Resolve a nominal rating into effective talent via the gem/bust model
pub fn resolve_effective_talent(nominal_stars: u8, rng: &mut impl Rng) -> TalentResolution {
    let (gem_chance, bust_chance) = gem_bust_chances(nominal_stars);
    let roll: f64 = rng.gen();

    let status = if roll < gem_chance {
        RecruitStatus::Gem
    } else if roll < gem_chance + bust_chance {
        RecruitStatus::Bust
    } else {
        RecruitStatus::Normal
    };

    let effective = match status {
        RecruitStatus::Normal => nominal_stars as i8,
        RecruitStatus::Gem => nominal_stars as i8 + offset_magnitude(rng) as i8,
        RecruitStatus::Bust => nominal_stars as i8 - offset_magnitude(rng) as i8,
    };

    TalentResolution { status, effective_stars: effective.clamp(1, 5) as u8 }
}

/// Perfect Game rating (0-10), indexed by the nominal rating only.
///
/// This is the external pre-college evaluation, so it tracks perceived talent
/// rather than the gem/bust-adjusted effective level.
pub fn perfect_game_rating(nominal_stars: u8, rng: &mut impl Rng) -> f32 {
    let (min, max) = match nominal_stars {
        5 => (9.5, 10.0),
        4 => (8.0, 10.0),
        3 => (7.5, 9.5),
        2 => (6.5, 9.0),
        1 => (6.0, 8.5),
        _ => (6.0, 10.0),
    };
    roll_float(rng, min, max)
}

/// Base range for batting and fielding attribute draws at a talent level
pub fn attribute_base_range(effective_stars: u8) -> (i32, i32) {
    let stars = effective_stars as i32;
    (30 + (stars - 1) * 8, 50 + (stars - 1) * 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_effective_talent_stays_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for stars in 1..=5u8 {
            for _ in 0..2_000 {
                let resolution = resolve_effective_talent(stars, &mut rng);
                assert!((1..=5).contains(&resolution.effective_stars));
            }
        }
    }

    #[test]
    fn test_normal_status_keeps_nominal_rating() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..2_000 {
            let resolution = resolve_effective_talent(3, &mut rng);
            if resolution.status == RecruitStatus::Normal {
                assert_eq!(resolution.effective_stars, 3);
            }
        }
    }

    #[test]
    fn test_one_star_busts_far_outnumber_gems() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut gems = 0usize;
        let mut busts = 0usize;
        let draws = 10_000;
        for _ in 0..draws {
            match resolve_effective_talent(1, &mut rng).status {
                RecruitStatus::Gem => gems += 1,
                RecruitStatus::Bust => busts += 1,
                RecruitStatus::Normal => {}
            }
        }
        // Expected 20% gems vs 60% busts
        let gem_share = gems as f64 / draws as f64;
        let bust_share = busts as f64 / draws as f64;
        assert!((0.17..=0.23).contains(&gem_share), "gem share: {}", gem_share);
        assert!((0.56..=0.64).contains(&bust_share), "bust share: {}", bust_share);
        assert!(busts > gems * 2);
    }

    #[test]
    fn test_mid_tier_gem_bust_is_symmetric() {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let mut gems = 0usize;
        let mut busts = 0usize;
        for _ in 0..10_000 {
            match resolve_effective_talent(4, &mut rng).status {
                RecruitStatus::Gem => gems += 1,
                RecruitStatus::Bust => busts += 1,
                RecruitStatus::Normal => {}
            }
        }
        let gem_share = gems as f64 / 10_000.0;
        let bust_share = busts as f64 / 10_000.0;
        assert!((0.08..=0.12).contains(&gem_share), "gem share: {}", gem_share);
        assert!((0.08..=0.12).contains(&bust_share), "bust share: {}", bust_share);
    }

    #[test]
    fn test_one_star_bust_cannot_drop_below_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        for _ in 0..5_000 {
            let resolution = resolve_effective_talent(1, &mut rng);
            assert!(resolution.effective_stars >= 1);
        }
    }

    #[test]
    fn test_perfect_game_rating_per_star_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(61);
        let bands = [(1u8, 6.0, 8.5), (2, 6.5, 9.0), (3, 7.5, 9.5), (4, 8.0, 10.0), (5, 9.5, 10.0)];
        for (stars, min, max) in bands {
            for _ in 0..500 {
                let rating = perfect_game_rating(stars, &mut rng);
                assert!(
                    rating >= min && rating < max,
                    "{}-star PG rating {} outside [{}, {})",
                    stars,
                    rating,
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn test_attribute_base_range_is_monotone() {
        let mut previous = attribute_base_range(1);
        assert_eq!(previous, (30, 50));
        for stars in 2..=5u8 {
            let current = attribute_base_range(stars);
            assert!(current.0 > previous.0, "base min must rise with stars");
            assert!(current.1 > previous.1, "base max must rise with stars");
            previous = current;
        }
        assert_eq!(attribute_base_range(5), (62, 90));
    }

    #[test]
    fn test_validate_stars() {
        assert!(validate_stars(0).is_err());
        assert!(validate_stars(6).is_err());
        for stars in 1..=5 {
            assert!(validate_stars(stars).is_ok());
        }
    }
}
