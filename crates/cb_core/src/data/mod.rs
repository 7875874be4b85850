//! Static game data
//!
//! Embedded biography pools used during player generation.

pub mod names;

pub use names::{city_pool, name_pools, CA_PROVINCES, SCHOOL_SUFFIXES, US_STATES};
