//! Core player data model
//!
//! This module contains the fundamental roster data structures:
//! - Player: the complete generated athlete record
//! - Position / BroadPosition: the 12 roster positions and their categories
//! - Attribute groups: mental, batting, fielding, pitching (all 1-99 u8)
//! - Pitch / PositionRating: per-pitch and per-position sub-records

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 12 roster positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[serde(rename = "SP")]
    StartingPitcher,
    #[serde(rename = "RP")]
    ReliefPitcher,
    #[serde(rename = "CP")]
    ClosingPitcher,
}

impl Position {
    /// All positions in a stable display order
    pub const ALL: [Position; 12] = [
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
        Position::DesignatedHitter,
        Position::StartingPitcher,
        Position::ReliefPitcher,
        Position::ClosingPitcher,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
            Position::StartingPitcher => "SP",
            Position::ReliefPitcher => "RP",
            Position::ClosingPitcher => "CP",
        }
    }

    pub fn is_pitcher(&self) -> bool {
        matches!(
            self,
            Position::StartingPitcher | Position::ReliefPitcher | Position::ClosingPitcher
        )
    }

    pub fn is_infielder(&self) -> bool {
        matches!(
            self,
            Position::FirstBase | Position::SecondBase | Position::Shortstop | Position::ThirdBase
        )
    }

    pub fn is_outfielder(&self) -> bool {
        matches!(self, Position::LeftField | Position::CenterField | Position::RightField)
    }

    pub fn is_catcher(&self) -> bool {
        matches!(self, Position::Catcher)
    }

    /// Broad category this position belongs to
    pub fn broad_category(&self) -> BroadPosition {
        match self {
            Position::Catcher => BroadPosition::Battery,
            Position::FirstBase | Position::ThirdBase => BroadPosition::CornerInfield,
            Position::SecondBase | Position::Shortstop => BroadPosition::MiddleInfield,
            Position::LeftField | Position::CenterField | Position::RightField => {
                BroadPosition::Outfield
            }
            Position::DesignatedHitter => BroadPosition::Utility,
            Position::StartingPitcher | Position::ReliefPitcher | Position::ClosingPitcher => {
                BroadPosition::Pitcher
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Broad position categories used by scouting views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadPosition {
    #[serde(rename = "IF")]
    Infield,
    #[serde(rename = "OF")]
    Outfield,
    #[serde(rename = "CIF")]
    CornerInfield,
    #[serde(rename = "MIF")]
    MiddleInfield,
    #[serde(rename = "BAT")]
    Battery,
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "UTIL")]
    Utility,
}

/// Eligibility year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
    #[serde(rename = "Redshirt Freshman")]
    RedshirtFreshman,
    #[serde(rename = "Redshirt Sophomore")]
    RedshirtSophomore,
    #[serde(rename = "Redshirt Junior")]
    RedshirtJunior,
    #[serde(rename = "Redshirt Senior")]
    RedshirtSenior,
}

/// Batting or throwing hand. Switch applies to batting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
    Switch,
}

/// Birth nationality, drawn from the recruiting pool distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nationality {
    American,
    Canadian,
    Cuban,
    #[serde(rename = "Puerto Rican")]
    PuertoRican,
    Dominican,
    Japanese,
    Korean,
    Australian,
    Italian,
    Czech,
}

impl Nationality {
    /// Short code used in the `state` field for non-US recruits
    pub fn code(&self) -> &'static str {
        match self {
            Nationality::American => "USA",
            Nationality::Canadian => "CAN",
            Nationality::Cuban => "CUB",
            Nationality::PuertoRican => "PR",
            Nationality::Dominican => "DOM",
            Nationality::Japanese => "JPN",
            Nationality::Korean => "KOR",
            Nationality::Australian => "AUS",
            Nationality::Italian => "ITA",
            Nationality::Czech => "CZE",
        }
    }
}

/// Pitch types (two-letter scouting codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchType {
    FF, // Four-Seam Fastball
    CH, // Changeup
    CU, // Curveball
    FC, // Cutter
    EP, // Eephus
    FO, // Forkball
    KN, // Knuckleball
    KC, // Knuckle-curve
    SC, // Screwball
    SI, // Sinker
    SL, // Slider
    SV, // Slurve
    FS, // Splitter
    ST, // Sweeper
}

impl PitchType {
    pub const ALL: [PitchType; 14] = [
        PitchType::FF,
        PitchType::CH,
        PitchType::CU,
        PitchType::FC,
        PitchType::EP,
        PitchType::FO,
        PitchType::KN,
        PitchType::KC,
        PitchType::SC,
        PitchType::SI,
        PitchType::SL,
        PitchType::SV,
        PitchType::FS,
        PitchType::ST,
    ];

    pub fn full_name(&self) -> &'static str {
        match self {
            PitchType::FF => "Four-Seam Fastball",
            PitchType::CH => "Changeup",
            PitchType::CU => "Curveball",
            PitchType::FC => "Cutter",
            PitchType::EP => "Eephus",
            PitchType::FO => "Forkball",
            PitchType::KN => "Knuckleball",
            PitchType::KC => "Knuckle-curve",
            PitchType::SC => "Screwball",
            PitchType::SI => "Sinker",
            PitchType::SL => "Slider",
            PitchType::SV => "Slurve",
            PitchType::FS => "Splitter",
            PitchType::ST => "Sweeper",
        }
    }
}

/// A single pitch in a player's repertoire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub pitch_type: PitchType,
    /// True mph capped into the 1-99 rating band
    pub velocity: u8,
    pub control: u8,
    pub movement: u8,
    pub stuff: u8,
}

/// Fit rating at one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRating {
    pub position: Position,
    pub rating: u8,
}

/// Physical build classification used by the attribute samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildClass {
    Large,
    Small,
    Average,
}

impl BuildClass {
    pub fn of(height: u8, weight: u16) -> Self {
        if height >= 74 && weight >= 200 {
            BuildClass::Large
        } else if height <= 70 && weight <= 180 {
            BuildClass::Small
        } else {
            BuildClass::Average
        }
    }
}

/// Mental attributes (13, all 1-99)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalAttributes {
    pub ego: u8,
    pub confidence: u8,
    pub composure: u8,
    pub greed: u8,
    pub coachability: u8,
    pub work_ethic: u8,
    pub loyalty: u8,
    pub intelligence: u8,
    pub aggressiveness: u8,
    pub integrity: u8,
    pub leadership: u8,
    pub adaptability: u8,
    pub recovery: u8,
}

/// Batting attributes (9, all 1-99) with left/right platoon splits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingAttributes {
    pub contact_vs_left: u8,
    pub contact_vs_right: u8,
    pub power_vs_left: u8,
    pub power_vs_right: u8,
    pub eye: u8,
    pub discipline: u8,
    /// Defensive hitting (bunting, hit and run)
    pub defensiveness: u8,
    pub ground_ball_rate: u8,
    pub bunting_skill: u8,
}

/// Baserunning and fielding attributes (7, all 1-99)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldingAttributes {
    pub speed: u8,
    pub stealing_ability: u8,
    pub range: u8,
    pub arm_strength: u8,
    pub arm_accuracy: u8,
    pub handling: u8,
    /// Especially important for catchers
    pub blocking: u8,
}

/// General pitching attributes plus the pitch repertoire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchingAttributes {
    pub stamina: u8,
    pub hold_runners: u8,
    /// Always one four-seam fastball first, then 1-5 unique secondaries
    pub pitches: Vec<Pitch>,
}

/// A complete generated athlete. Immutable once generated; team/stat/injury
/// tracking is attached by the application layers, not by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    // Biography
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub year: PlayerYear,
    /// Always one of the 12 concrete positions. Scouting views may label a
    /// recruit by broad category (`BroadPosition`), but generation resolves
    /// the preference to a concrete position before the player is built;
    /// use [`Position::broad_category`] to recover the category.
    pub preferred_position: Position,
    /// Inches, 66-79
    pub height: u8,
    /// Pounds, 150-250
    pub weight: u16,
    pub batting_hand: Hand,
    pub throwing_hand: Hand,
    pub nationality: Nationality,
    pub hometown: String,
    pub state: String,
    pub high_school: String,
    pub jersey_number: u8,

    // Recruiting / scouting
    /// Nominal 1-5 rating shown to the user
    pub recruiting_stars: u8,
    /// 0-10 external pre-college evaluation, independent of true skill
    pub perfect_game_rating: f32,

    // Skill attributes
    pub mental: MentalAttributes,
    pub batting: BattingAttributes,
    pub fielding: FieldingAttributes,
    pub pitching: PitchingAttributes,

    /// One fit rating per position, all 12 present
    pub position_ratings: Vec<PositionRating>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years on the given date
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        let mut age = date.year() - self.birthdate.year();
        if (date.month(), date.day()) < (self.birthdate.month(), self.birthdate.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    /// Height formatted as feet and inches, e.g. 6'2"
    pub fn formatted_height(&self) -> String {
        format!("{}'{}\"", self.height / 12, self.height % 12)
    }

    /// Fit rating at a specific position, if present
    pub fn position_rating(&self, position: Position) -> Option<u8> {
        self.position_ratings.iter().find(|pr| pr.position == position).map(|pr| pr.rating)
    }

    pub fn is_pitcher(&self) -> bool {
        self.preferred_position.is_pitcher()
    }

    pub fn build_class(&self) -> BuildClass {
        BuildClass::of(self.height, self.weight)
    }
}
