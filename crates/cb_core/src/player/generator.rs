//! Player generation pipeline
//!
//! `PlayerGenerator` owns the RNG and threads it through every stage in a
//! fixed order, so a seed fully determines the output:
//! 1. talent resolution (gem/bust)
//! 2. position and biography
//! 3. mental, batting, fielding, pitching attributes
//! 4. position fit ratings
//!
//! Recruiting classes draw stars from the open-market distribution; team
//! rosters blend toward the elite distribution as program prestige rises.

use crate::error::{GenError, Result};
use crate::models::{Player, PlayerYear, Position};
use crate::player::batting::generate_batting;
use crate::player::biography::generate_biography;
use crate::player::fielding::generate_fielding;
use crate::player::mental::generate_mental;
use crate::player::pitching::generate_pitching;
use crate::player::position_fit::generate_position_ratings;
use crate::player::sampling::WeightedTable;
use crate::player::talent::{
    perfect_game_rating, resolve_effective_talent, validate_stars, TalentResolution,
};
use crate::player::validation::PlayerValidator;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use uuid::Uuid;

/// Star distribution for the open recruiting market: most recruits are
/// two-star players, five-star players are rare.
fn open_market_star_table() -> WeightedTable<u8> {
    WeightedTable::new(vec![(1u8, 0.25), (2, 0.40), (3, 0.25), (4, 0.08), (5, 0.02)])
        .expect("static open market star table is valid")
}

/// Star distribution a full-prestige program recruits from
fn elite_star_table() -> WeightedTable<u8> {
    WeightedTable::new(vec![(1u8, 0.05), (2, 0.15), (3, 0.35), (4, 0.30), (5, 0.15)])
        .expect("static elite star table is valid")
}

/// Position mix for generated pools: rotation-heavy, mirroring real roster
/// construction where pitchers outnumber any single fielding spot.
fn position_mix_table() -> WeightedTable<Position> {
    WeightedTable::new(vec![
        (Position::StartingPitcher, 0.17),
        (Position::ReliefPitcher, 0.12),
        (Position::ClosingPitcher, 0.04),
        (Position::Catcher, 0.09),
        (Position::FirstBase, 0.07),
        (Position::SecondBase, 0.07),
        (Position::ThirdBase, 0.07),
        (Position::Shortstop, 0.08),
        (Position::LeftField, 0.07),
        (Position::CenterField, 0.08),
        (Position::RightField, 0.07),
        (Position::DesignatedHitter, 0.07),
    ])
    .expect("static position mix table is valid")
}

/// Tunable sampling tables for a generator instance
pub struct GenerationConfig {
    pub open_market_stars: WeightedTable<u8>,
    pub elite_stars: WeightedTable<u8>,
    pub position_mix: WeightedTable<Position>,
    /// Season the generated freshmen enroll for
    pub season_year: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            open_market_stars: open_market_star_table(),
            elite_stars: elite_star_table(),
            position_mix: position_mix_table(),
            season_year: 2026,
        }
    }
}

/// Seedable procedural player generator
pub struct PlayerGenerator {
    rng: ChaCha8Rng,
    config: GenerationConfig,
}

impl PlayerGenerator {
    /// Deterministic generator: the same seed always yields the same players
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), config: GenerationConfig::default() }
    }

    /// Non-reproducible generator seeded from the OS
    pub fn from_entropy() -> Self {
        Self { rng: ChaCha8Rng::from_entropy(), config: GenerationConfig::default() }
    }

    pub fn with_config(seed: u64, config: GenerationConfig) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), config }
    }

    /// Generate one freshman recruit at the given nominal star rating
    pub fn generate_player(&mut self, nominal_stars: u8) -> Result<Player> {
        validate_stars(nominal_stars)?;
        let resolution = resolve_effective_talent(nominal_stars, &mut self.rng);
        self.assemble(nominal_stars, resolution, PlayerYear::Freshman)
    }

    /// Generate a player with a pre-resolved talent outcome.
    ///
    /// Used where the gem/bust roll is decided elsewhere, e.g. scripted
    /// scenarios or tests that pin a specific resolution.
    pub fn generate_player_resolved(
        &mut self,
        nominal_stars: u8,
        resolution: TalentResolution,
    ) -> Result<Player> {
        validate_stars(nominal_stars)?;
        validate_stars(resolution.effective_stars)?;
        self.assemble(nominal_stars, resolution, PlayerYear::Freshman)
    }

    /// Generate an open-market recruiting class of freshmen
    pub fn generate_recruiting_class(&mut self, count: usize) -> Result<Vec<Player>> {
        if count == 0 {
            return Err(GenError::InvalidParameter(
                "recruiting class size must be at least 1".into(),
            ));
        }
        info!(count, "generating recruiting class");
        (0..count)
            .map(|_| {
                let stars = self.config.open_market_stars.sample(&mut self.rng);
                self.generate_player(stars)
            })
            .collect()
    }

    /// Generate an existing roster for a program with the given prestige.
    ///
    /// Prestige (0-100) linearly blends the open-market star distribution
    /// toward the elite one, and eligibility years are spread uniformly
    /// from freshman through senior.
    pub fn generate_team_roster(
        &mut self,
        team_id: &str,
        prestige: u8,
        count: usize,
    ) -> Result<Vec<Player>> {
        if count == 0 {
            return Err(GenError::InvalidParameter("roster size must be at least 1".into()));
        }
        if prestige > 100 {
            return Err(GenError::InvalidParameter(format!(
                "prestige must be 0-100, got {}",
                prestige
            )));
        }
        info!(team_id, prestige, count, "generating team roster");

        let blended = self.blended_star_table(prestige)?;
        (0..count)
            .map(|_| {
                let stars = blended.sample(&mut self.rng);
                validate_stars(stars)?;
                let resolution = resolve_effective_talent(stars, &mut self.rng);
                let year = match self.rng.gen_range(0..4) {
                    0 => PlayerYear::Freshman,
                    1 => PlayerYear::Sophomore,
                    2 => PlayerYear::Junior,
                    _ => PlayerYear::Senior,
                };
                self.assemble(stars, resolution, year)
            })
            .collect()
    }

    /// Per-star linear blend: w = open * (1 - p) + elite * p, p = prestige/100.
    ///
    /// Both tables are caller-overridable, so the elite weight is looked up by
    /// star rating rather than by table position; the two tables must cover
    /// the same set of ratings.
    fn blended_star_table(&self, prestige: u8) -> Result<WeightedTable<u8>> {
        let p = prestige as f64 / 100.0;
        let open = self.config.open_market_stars.entries();
        let elite = self.config.elite_stars.entries();
        if open.len() != elite.len() {
            return Err(GenError::InvalidDistribution(
                "open-market and elite star tables must cover the same ratings".into(),
            ));
        }
        let entries = open
            .iter()
            .map(|(stars, open_weight)| {
                let elite_weight = elite
                    .iter()
                    .find(|(rating, _)| rating == stars)
                    .map(|(_, weight)| *weight)
                    .ok_or_else(|| {
                        GenError::InvalidDistribution(format!(
                            "elite star table is missing the {}-star rating",
                            stars
                        ))
                    })?;
                Ok((*stars, open_weight * (1.0 - p) + elite_weight * p))
            })
            .collect::<Result<Vec<_>>>()?;
        WeightedTable::new(entries)
    }

    fn assemble(
        &mut self,
        nominal_stars: u8,
        resolution: TalentResolution,
        year: PlayerYear,
    ) -> Result<Player> {
        let rng = &mut self.rng;
        let effective = resolution.effective_stars;

        let preferred_position = self.config.position_mix.sample(rng);
        // Older roster players enrolled earlier, shifting the birth window back
        let enrollment_year = self.config.season_year
            - match year {
                PlayerYear::Freshman | PlayerYear::RedshirtFreshman => 0,
                PlayerYear::Sophomore | PlayerYear::RedshirtSophomore => 1,
                PlayerYear::Junior | PlayerYear::RedshirtJunior => 2,
                PlayerYear::Senior | PlayerYear::RedshirtSenior => 3,
            };
        let bio = generate_biography(preferred_position, enrollment_year, rng);

        let mental = generate_mental(effective, rng);
        let batting = generate_batting(effective, bio.height, bio.weight, bio.batting_hand, rng);
        let fielding =
            generate_fielding(effective, bio.height, bio.weight, preferred_position, rng);
        let pitching =
            generate_pitching(effective, bio.height, preferred_position.is_pitcher(), rng);
        let position_ratings =
            generate_position_ratings(preferred_position, bio.height, effective, rng);

        let player = Player {
            id: Uuid::new_v4().to_string(),
            first_name: bio.first_name,
            last_name: bio.last_name,
            birthdate: bio.birthdate,
            year,
            preferred_position,
            height: bio.height,
            weight: bio.weight,
            batting_hand: bio.batting_hand,
            throwing_hand: bio.throwing_hand,
            nationality: bio.nationality,
            hometown: bio.hometown,
            state: bio.state,
            high_school: bio.high_school,
            jersey_number: bio.jersey_number,
            recruiting_stars: nominal_stars,
            perfect_game_rating: perfect_game_rating(nominal_stars, rng),
            mental,
            batting,
            fielding,
            pitching,
            position_ratings,
        };

        debug!(
            name = %player.full_name(),
            position = player.preferred_position.abbreviation(),
            stars = nominal_stars,
            status = ?resolution.status,
            "generated player"
        );
        debug_assert!(PlayerValidator::validate(&player).is_ok());
        Ok(player)
    }
}
