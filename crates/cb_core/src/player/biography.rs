//! Biography generation
//!
//! Derives the physical and demographic profile: height is position-shifted,
//! weight follows height, and batting hand is conditioned on throwing hand so
//! the pair is always drawn from the joint distribution.

use crate::data::names;
use crate::models::{Hand, Nationality, Position};
use crate::player::sampling::{roll_int, roll_normal, WeightedTable};
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Generated biography block, assembled into the final Player record
#[derive(Debug, Clone)]
pub struct Biography {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub nationality: Nationality,
    pub hometown: String,
    pub state: String,
    pub high_school: String,
    /// Inches, 66-79
    pub height: u8,
    /// Pounds, 150-250
    pub weight: u16,
    pub batting_hand: Hand,
    pub throwing_hand: Hand,
    pub jersey_number: u8,
}

/// Recruiting pool nationality distribution (87% American)
fn nationality_table() -> WeightedTable<Nationality> {
    WeightedTable::new(vec![
        (Nationality::American, 0.87),
        (Nationality::Canadian, 0.05),
        (Nationality::Cuban, 0.01),
        (Nationality::PuertoRican, 0.01),
        (Nationality::Dominican, 0.01),
        (Nationality::Japanese, 0.01),
        (Nationality::Korean, 0.01),
        (Nationality::Australian, 0.01),
        (Nationality::Italian, 0.01),
        (Nationality::Czech, 0.01),
    ])
    .expect("static nationality table is valid")
}

/// Height in inches, normal around a position-shifted mean, clamped to [66, 79]
pub fn generate_height(position: Position, rng: &mut impl Rng) -> u8 {
    let mean = match position {
        // Corner infield and the rotation trend tall
        Position::FirstBase | Position::StartingPitcher => 74.0,
        Position::Catcher | Position::SecondBase => 70.0,
        Position::Shortstop => 71.0,
        _ => 72.0,
    };
    let height = roll_normal(rng, mean, 3.0).round() as i32;
    height.clamp(66, 79) as u8
}

/// Weight in pounds, linear in height plus normal noise, clamped to [150, 250]
pub fn generate_weight(height: u8, rng: &mut impl Rng) -> u16 {
    let base = (height as f32 - 60.0) * 5.0 + 100.0;
    let weight = (base + roll_normal(rng, 0.0, 15.0)).round() as i32;
    weight.clamp(150, 250) as u16
}

/// Joint handedness draw: (batting, throwing).
///
/// Throwing hand is Bernoulli(20% left); batting hand is conditioned on it.
/// The two are never sampled independently.
pub fn generate_handedness(rng: &mut impl Rng) -> (Hand, Hand) {
    let throws_left = rng.gen_bool(0.20);
    let roll: f64 = rng.gen();

    let batting = if throws_left {
        // Left throwers: 70% bat left, 20% switch, 10% bat right
        if roll < 0.70 {
            Hand::Left
        } else if roll < 0.90 {
            Hand::Switch
        } else {
            Hand::Right
        }
    } else {
        // Right throwers: 80% bat right, 15% bat left, 5% switch
        if roll < 0.80 {
            Hand::Right
        } else if roll < 0.95 {
            Hand::Left
        } else {
            Hand::Switch
        }
    };

    (batting, if throws_left { Hand::Left } else { Hand::Right })
}

/// Birthdate inside the freshman eligibility window for a season
fn generate_birthdate(season_year: i32, rng: &mut impl Rng) -> NaiveDate {
    // Incoming freshmen turn 18 or 19 during the season; the window opens
    // August 1 two years shy of the season year.
    let window_start = NaiveDate::from_ymd_opt(season_year - 19, 8, 1)
        .unwrap_or(NaiveDate::MIN);
    window_start + Duration::days(roll_int(rng, 0, 364) as i64)
}

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate a full biography for a recruit at the given preferred position
pub fn generate_biography(position: Position, season_year: i32, rng: &mut impl Rng) -> Biography {
    let nationality = nationality_table().sample(rng);
    let (first_pool, last_pool) = names::name_pools(nationality);
    let first_name = pick(first_pool, rng).to_string();
    let last_name = pick(last_pool, rng).to_string();

    let hometown = pick(names::city_pool(nationality), rng).to_string();
    let state = match nationality {
        Nationality::American => pick(&names::US_STATES, rng).to_string(),
        Nationality::Canadian => pick(&names::CA_PROVINCES, rng).to_string(),
        other => other.code().to_string(),
    };
    let high_school = format!("{} {}", hometown, pick(&names::SCHOOL_SUFFIXES, rng));

    let height = generate_height(position, rng);
    let weight = generate_weight(height, rng);
    let (batting_hand, throwing_hand) = generate_handedness(rng);

    Biography {
        first_name,
        last_name,
        birthdate: generate_birthdate(season_year, rng),
        nationality,
        hometown,
        state,
        high_school,
        height,
        weight,
        batting_hand,
        throwing_hand,
        jersey_number: roll_int(rng, 0, 59) as u8,
    }
}
