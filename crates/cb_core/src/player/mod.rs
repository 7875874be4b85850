//! Procedural player generation
//!
//! Pipeline stages, in the order the generator runs them:
//! - `talent`: gem/bust resolution from the nominal star rating
//! - `biography`: name, hometown, physical profile, handedness
//! - `mental`, `batting`, `fielding`, `pitching`: attribute groups
//! - `position_fit`: 1-99 fit rating at all twelve positions
//!
//! `generator` drives the pipeline; `validation` checks the invariants every
//! finished player must satisfy.

pub mod batting;
pub mod biography;
pub mod fielding;
pub mod generator;
pub mod mental;
pub mod pitching;
pub mod position_fit;
pub mod sampling;
pub mod talent;
pub mod validation;

pub use biography::Biography;
pub use generator::{GenerationConfig, PlayerGenerator};
pub use sampling::WeightedTable;
pub use talent::{RecruitStatus, TalentResolution};
pub use validation::{PlayerValidator, ValidationIssue};

#[cfg(test)]
mod tests;
