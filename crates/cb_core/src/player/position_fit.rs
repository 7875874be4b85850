//! Position fit rating generation
//!
//! Every player receives a 1-99 fit rating at all 12 positions. The preferred
//! position anchors the scale, adjacent positions inherit 80% of that base,
//! and physical build nudges the corners (tall frames at 1B/DH, short frames
//! up the middle).

use crate::models::{Position, PositionRating};
use crate::player::sampling::{clamp_rating, roll_int};
use rand::Rng;

/// Static adjacency map: positions a player can credibly slide to
pub fn related_positions(position: Position) -> &'static [Position] {
    match position {
        Position::FirstBase => &[Position::ThirdBase, Position::LeftField, Position::RightField],
        Position::SecondBase => &[Position::Shortstop, Position::ThirdBase],
        Position::Shortstop => &[Position::SecondBase, Position::ThirdBase],
        Position::ThirdBase => &[Position::FirstBase, Position::Shortstop],
        Position::LeftField => &[Position::CenterField, Position::RightField],
        Position::CenterField => &[Position::LeftField, Position::RightField],
        Position::RightField => &[Position::LeftField, Position::CenterField],
        Position::Catcher => &[Position::FirstBase],
        Position::DesignatedHitter => {
            &[Position::FirstBase, Position::LeftField, Position::RightField]
        }
        Position::StartingPitcher => &[Position::ReliefPitcher],
        Position::ReliefPitcher => &[Position::ClosingPitcher, Position::StartingPitcher],
        Position::ClosingPitcher => &[Position::ReliefPitcher],
    }
}

/// Anchor rating at the preferred position before the random bonus
pub fn base_preferred_rating(effective_stars: u8) -> i32 {
    40 + (effective_stars as i32 - 1) * 10
}

/// Generate a rating for every position, exactly one entry each
pub fn generate_position_ratings(
    preferred_position: Position,
    height: u8,
    effective_stars: u8,
    rng: &mut impl Rng,
) -> Vec<PositionRating> {
    let preferred_base = base_preferred_rating(effective_stars);
    let related = related_positions(preferred_position);

    Position::ALL
        .iter()
        .map(|&position| {
            let mut rating = if position == preferred_position {
                preferred_base + roll_int(rng, 0, 19)
            } else if related.contains(&position) {
                (preferred_base * 4) / 5 + roll_int(rng, 0, 14)
            } else {
                roll_int(rng, 20, 49)
            };

            // Physical fit: tall frames at the bat-first spots, short frames
            // up the middle
            if matches!(position, Position::FirstBase | Position::DesignatedHitter)
                && height >= 74
            {
                rating += (height as i32 - 73) * 2;
            } else if matches!(position, Position::Shortstop | Position::SecondBase)
                && height <= 72
            {
                rating += (73 - height as i32) * 2;
            }

            PositionRating { position, rating: clamp_rating(rating) }
        })
        .collect()
}
