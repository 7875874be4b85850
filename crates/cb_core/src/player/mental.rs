//! Mental attribute generation
//!
//! Work ethic, intelligence and integrity are the primary draws; the rest are
//! derived with explicit cross-terms. The sign of every cross-term encodes a
//! balance decision (greed falls with integrity, coachability rises with work
//! ethic and falls with ego) and must not drift.

use crate::models::MentalAttributes;
use crate::player::sampling::{clamp_rating, roll_int};
use rand::Rng;

/// Mental base range variant: shallower star scaling than batting/fielding
pub fn mental_base_range(effective_stars: u8) -> (i32, i32) {
    let stars = effective_stars as i32;
    (30 + (stars - 1) * 5, 50 + (stars - 1) * 7)
}

pub fn generate_mental(effective_stars: u8, rng: &mut impl Rng) -> MentalAttributes {
    let stars = effective_stars as i32;
    let (base_min, base_max) = mental_base_range(effective_stars);

    // Primary personality draws
    let work_ethic = roll_int(rng, base_min, base_max + 10);
    let intelligence = roll_int(rng, base_min, base_max + 5);
    let integrity = roll_int(rng, base_min, base_max);

    // Derived traits, each correlated with the primaries
    let ego = roll_int(rng, 30, 70) + stars * 5;
    let greed = roll_int(rng, 20, 80) - integrity / 5;
    let coachability = roll_int(rng, 30, 80) + work_ethic / 10 - ego / 10;
    let loyalty = roll_int(rng, 30, 70) + integrity / 10 - greed / 10;

    let confidence = base_min + roll_int(rng, -10, 40) + stars * 3;
    let composure = roll_int(rng, base_min, base_max) + intelligence / 10;
    let aggressiveness = roll_int(rng, 20, 80);
    let leadership = roll_int(rng, base_min, base_max) + work_ethic / 10;
    let adaptability = roll_int(rng, base_min, base_max) + intelligence / 10;
    let recovery = roll_int(rng, base_min, base_max) + work_ethic / 10;

    MentalAttributes {
        ego: clamp_rating(ego),
        confidence: clamp_rating(confidence),
        composure: clamp_rating(composure),
        greed: clamp_rating(greed),
        coachability: clamp_rating(coachability),
        work_ethic: clamp_rating(work_ethic),
        loyalty: clamp_rating(loyalty),
        intelligence: clamp_rating(intelligence),
        aggressiveness: clamp_rating(aggressiveness),
        integrity: clamp_rating(integrity),
        leadership: clamp_rating(leadership),
        adaptability: clamp_rating(adaptability),
        recovery: clamp_rating(recovery),
    }
}
