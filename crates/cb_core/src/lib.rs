//! # cb_core - Deterministic College Baseball Player Generation Engine
//!
//! This library procedurally generates college baseball recruits and team
//! rosters, with a JSON API for easy integration with game frontends.
//!
//! ## Features
//! - 100% deterministic generation (same seed = same players)
//! - Hidden gem/bust talent resolution behind the scouted star rating
//! - Full attribute suite: mental, batting, fielding, pitching, position fit
//! - Prestige-weighted talent distributions for team rosters
//! - JSON API for easy integration

pub mod api;
pub mod data;
pub mod error;
pub mod models;
pub mod player;

// Re-export main API functions
pub use api::{
    generate_class_json, generate_roster_json, ApiError, ApiResponse, ClassRequest,
    GenerationResponse, RosterRequest,
};
pub use error::{GenError, Result};

// Re-export core model types
pub use models::{
    BattingAttributes, FieldingAttributes, Hand, MentalAttributes, Nationality, Pitch, PitchType,
    PitchingAttributes, Player, PlayerYear, Position, PositionRating,
};

// Re-export the generation pipeline
pub use player::{
    GenerationConfig, PlayerGenerator, PlayerValidator, RecruitStatus, TalentResolution,
    ValidationIssue,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
