//! Batting attribute generation
//!
//! Contact and power are drawn once, shifted by physical build, then split
//! into platoon sides. Only the advantaged side receives the platoon bonus:
//! left and switch hitters vs right-handed pitching, right and switch hitters
//! vs left-handed pitching.

use crate::models::{BattingAttributes, BuildClass, Hand};
use crate::player::sampling::{clamp_rating, roll_int};
use crate::player::talent::attribute_base_range;
use rand::Rng;

pub fn generate_batting(
    effective_stars: u8,
    height: u8,
    weight: u16,
    batting_hand: Hand,
    rng: &mut impl Rng,
) -> BattingAttributes {
    let (base_min, base_max) = attribute_base_range(effective_stars);
    let build = BuildClass::of(height, weight);

    let advantage_vs_right = matches!(batting_hand, Hand::Left | Hand::Switch);
    let advantage_vs_left = matches!(batting_hand, Hand::Right | Hand::Switch);

    let mut base_contact = roll_int(rng, base_min, base_max);
    let mut base_power = roll_int(rng, base_min, base_max);

    // Big frames trade contact for power; small frames the reverse
    match build {
        BuildClass::Large => {
            base_power += roll_int(rng, 5, 15);
            base_contact -= roll_int(rng, 0, 10);
        }
        BuildClass::Small => {
            base_contact += roll_int(rng, 5, 15);
            base_power -= roll_int(rng, 0, 10);
        }
        BuildClass::Average => {}
    }

    let contact_vs_right =
        base_contact + if advantage_vs_right { roll_int(rng, 5, 15) } else { 0 };
    let contact_vs_left = base_contact + if advantage_vs_left { roll_int(rng, 5, 15) } else { 0 };
    let power_vs_right = base_power + if advantage_vs_right { roll_int(rng, 5, 15) } else { 0 };
    let power_vs_left = base_power + if advantage_vs_left { roll_int(rng, 5, 15) } else { 0 };

    let eye = roll_int(rng, base_min, base_max);
    let discipline = roll_int(rng, base_min, base_max);

    // Small hitters trend toward defensive, ground-ball contact
    let mut defensiveness = roll_int(rng, base_min, base_max);
    let mut ground_ball_rate = roll_int(rng, 40, 60);
    match build {
        BuildClass::Small => {
            defensiveness += roll_int(rng, 5, 15);
            ground_ball_rate += roll_int(rng, 5, 15);
        }
        BuildClass::Large => {
            ground_ball_rate -= roll_int(rng, 5, 15);
        }
        BuildClass::Average => {}
    }

    let mut bunting_skill = roll_int(rng, base_min, base_max);
    if build == BuildClass::Small || defensiveness > 60 {
        bunting_skill += roll_int(rng, 5, 15);
    }

    BattingAttributes {
        contact_vs_left: clamp_rating(contact_vs_left),
        contact_vs_right: clamp_rating(contact_vs_right),
        power_vs_left: clamp_rating(power_vs_left),
        power_vs_right: clamp_rating(power_vs_right),
        eye: clamp_rating(eye),
        discipline: clamp_rating(discipline),
        defensiveness: clamp_rating(defensiveness),
        ground_ball_rate: clamp_rating(ground_ball_rate),
        bunting_skill: clamp_rating(bunting_skill),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn all_values(attrs: &BattingAttributes) -> [u8; 9] {
        [
            attrs.contact_vs_left,
            attrs.contact_vs_right,
            attrs.power_vs_left,
            attrs.power_vs_right,
            attrs.eye,
            attrs.discipline,
            attrs.defensiveness,
            attrs.ground_ball_rate,
            attrs.bunting_skill,
        ]
    }

    #[test]
    fn test_all_attributes_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for stars in 1..=5u8 {
            for _ in 0..500 {
                let attrs = generate_batting(stars, 74, 205, Hand::Left, &mut rng);
                for value in all_values(&attrs) {
                    assert!((1..=99).contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_large_build_trades_contact_for_power() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let samples = 3_000;
        let mut mean_power = |height: u8, weight: u16, rng: &mut ChaCha8Rng| -> f64 {
            (0..samples)
                .map(|_| generate_batting(3, height, weight, Hand::Right, rng).power_vs_left as u32)
                .sum::<u32>() as f64
                / samples as f64
        };
        let large = mean_power(75, 215, &mut rng);
        let small = mean_power(69, 170, &mut rng);
        assert!(large > small + 8.0, "large power {} vs small power {}", large, small);
    }

    #[test]
    fn test_small_build_gains_contact() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let samples = 3_000;
        let mut mean_contact = |height: u8, weight: u16, rng: &mut ChaCha8Rng| -> f64 {
            (0..samples)
                .map(|_| {
                    generate_batting(3, height, weight, Hand::Right, rng).contact_vs_left as u32
                })
                .sum::<u32>() as f64
                / samples as f64
        };
        let small = mean_contact(69, 170, &mut rng);
        let large = mean_contact(75, 215, &mut rng);
        assert!(small > large + 8.0, "small contact {} vs large contact {}", small, large);
    }

    #[test]
    fn test_platoon_bonus_lands_on_advantaged_side_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let samples = 5_000;

        // Left-handed batters hold the advantage against right-handed pitching
        let mut vs_right = 0u32;
        let mut vs_left = 0u32;
        for _ in 0..samples {
            let attrs = generate_batting(3, 72, 190, Hand::Left, &mut rng);
            vs_right += attrs.contact_vs_right as u32;
            vs_left += attrs.contact_vs_left as u32;
        }
        let mean_vs_right = vs_right as f64 / samples as f64;
        let mean_vs_left = vs_left as f64 / samples as f64;
        assert!(
            mean_vs_right > mean_vs_left + 7.0,
            "lefty contact split vs R {} should exceed vs L {}",
            mean_vs_right,
            mean_vs_left
        );
    }

    #[test]
    fn test_switch_hitters_get_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let samples = 5_000;
        let mut switch_left = 0u32;
        let mut righty_left = 0u32;
        for _ in 0..samples {
            switch_left += generate_batting(3, 72, 190, Hand::Switch, &mut rng).contact_vs_left
                as u32;
            righty_left +=
                generate_batting(3, 72, 190, Hand::Right, &mut rng).contact_vs_left as u32;
        }
        let switch_mean = switch_left as f64 / samples as f64;
        let righty_mean = righty_left as f64 / samples as f64;
        // Both advantaged vs lefties, so the means should be close
        assert!((switch_mean - righty_mean).abs() < 3.0);
    }

    #[test]
    fn test_higher_stars_raise_base_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let samples = 3_000;
        let mut mean_eye = |stars: u8, rng: &mut ChaCha8Rng| -> f64 {
            (0..samples)
                .map(|_| generate_batting(stars, 72, 190, Hand::Right, rng).eye as u32)
                .sum::<u32>() as f64
                / samples as f64
        };
        let low = mean_eye(1, &mut rng);
        let high = mean_eye(5, &mut rng);
        assert!(high > low + 20.0, "5-star eye {} vs 1-star {}", high, low);
    }
}
