//! Roster data model

pub mod player;

pub use player::{
    BattingAttributes, BroadPosition, BuildClass, FieldingAttributes, Hand, MentalAttributes,
    Nationality, Pitch, PitchType, PitchingAttributes, Player, PlayerYear, Position,
    PositionRating,
};
