//! Cross-module generation properties
//!
//! Property tests over the whole pipeline: any seed and any valid request must
//! produce players that pass every invariant check.

use crate::player::generator::PlayerGenerator;
use crate::player::validation::PlayerValidator;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: any seed and class size yields exactly `count` valid players
    #[test]
    fn prop_recruiting_class_always_valid(seed in any::<u64>(), count in 1usize..20) {
        let mut generator = PlayerGenerator::from_seed(seed);
        let players = generator.generate_recruiting_class(count).unwrap();
        prop_assert_eq!(players.len(), count);
        for player in &players {
            prop_assert!(PlayerValidator::validate(player).is_ok());
        }
    }

    /// Property: any prestige level yields a valid roster
    #[test]
    fn prop_team_roster_always_valid(seed in any::<u64>(), prestige in 0u8..=100, count in 1usize..20) {
        let mut generator = PlayerGenerator::from_seed(seed);
        let players = generator.generate_team_roster("prop-team", prestige, count).unwrap();
        prop_assert_eq!(players.len(), count);
        for player in &players {
            prop_assert!(PlayerValidator::validate(player).is_ok());
        }
    }

    /// Property: any nominal star rating yields a valid single player
    #[test]
    fn prop_single_player_always_valid(seed in any::<u64>(), stars in 1u8..=5) {
        let mut generator = PlayerGenerator::from_seed(seed);
        let player = generator.generate_player(stars).unwrap();
        prop_assert_eq!(player.recruiting_stars, stars);
        prop_assert!(PlayerValidator::validate(&player).is_ok());
    }
}
