//! Recruit Builder CLI
//!
//! Generates recruiting classes and team rosters as JSON files for the
//! game frontend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cb_core::{Player, PlayerGenerator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recruit_builder")]
#[command(about = "Generate recruiting classes and team rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an open-market recruiting class
    Class {
        /// Number of recruits to generate
        #[arg(long, default_value = "50")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate a full team roster
    Roster {
        /// Team identifier for the log output
        #[arg(long)]
        team_id: String,

        /// Program prestige, 0-100
        #[arg(long, default_value = "50")]
        prestige: u8,

        /// Roster size
        #[arg(long, default_value = "35")]
        count: usize,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSON file path (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn generator_for(seed: Option<u64>) -> PlayerGenerator {
    match seed {
        Some(seed) => PlayerGenerator::from_seed(seed),
        None => PlayerGenerator::from_entropy(),
    }
}

fn write_players(players: &[Player], out: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(players).context("serializing players")?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} players to {}", players.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::from_default_env(),
    )
    .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Class { count, seed, out } => {
            let mut generator = generator_for(seed);
            let players = generator
                .generate_recruiting_class(count)
                .context("generating recruiting class")?;
            write_players(&players, out)?;
        }

        Commands::Roster { team_id, prestige, count, seed, out } => {
            let mut generator = generator_for(seed);
            let players = generator
                .generate_team_roster(&team_id, prestige, count)
                .context("generating team roster")?;
            write_players(&players, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_players_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class.json");

        let mut generator = PlayerGenerator::from_seed(42);
        let players = generator.generate_recruiting_class(5).unwrap();
        write_players(&players, Some(path.clone())).unwrap();

        let restored: Vec<Player> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.len(), 5);
    }
}
