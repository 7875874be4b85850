//! Baserunning and fielding attribute generation
//!
//! Speed anchors this group: stealing and range both derive from it, with
//! position-specific bonuses layered on top (outfield range, infield arm
//! accuracy, catcher handling and blocking).

use crate::models::{BuildClass, FieldingAttributes, Position};
use crate::player::sampling::{clamp_rating, roll_int};
use crate::player::talent::attribute_base_range;
use rand::Rng;

pub fn generate_fielding(
    effective_stars: u8,
    height: u8,
    weight: u16,
    preferred_position: Position,
    rng: &mut impl Rng,
) -> FieldingAttributes {
    let (base_min, base_max) = attribute_base_range(effective_stars);
    let build = BuildClass::of(height, weight);

    // Speed inversely correlated with frame size
    let mut speed = roll_int(rng, base_min, base_max);
    match build {
        BuildClass::Small => speed += roll_int(rng, 10, 20),
        BuildClass::Large => speed -= roll_int(rng, 5, 15),
        BuildClass::Average => {}
    }

    let stealing_ability = speed + roll_int(rng, -10, 10);

    let mut range = speed + roll_int(rng, -15, 15);
    if preferred_position.is_outfielder() {
        range += roll_int(rng, 5, 15);
    } else if preferred_position.is_infielder() && preferred_position != Position::FirstBase {
        range += roll_int(rng, 0, 10);
    }

    let mut arm_strength = roll_int(rng, base_min, base_max);
    if preferred_position.is_outfielder()
        || matches!(preferred_position, Position::ThirdBase | Position::Shortstop)
    {
        arm_strength += roll_int(rng, 5, 15);
    }

    let mut arm_accuracy = roll_int(rng, base_min, base_max);
    if preferred_position.is_infielder() {
        arm_accuracy += roll_int(rng, 5, 15);
    }

    let mut handling = roll_int(rng, base_min, base_max);
    let mut blocking = roll_int(rng, base_min, base_max);
    if preferred_position.is_catcher() {
        handling += roll_int(rng, 10, 20);
        blocking += roll_int(rng, 10, 20);
    }

    FieldingAttributes {
        speed: clamp_rating(speed),
        stealing_ability: clamp_rating(stealing_ability),
        range: clamp_rating(range),
        arm_strength: clamp_rating(arm_strength),
        arm_accuracy: clamp_rating(arm_accuracy),
        handling: clamp_rating(handling),
        blocking: clamp_rating(blocking),
    }
}
