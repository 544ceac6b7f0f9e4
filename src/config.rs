//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

use crate::game::{catalog, ConfigError, GameConfig};

/// QuickFire: describe, guess, win
#[derive(Debug, Parser)]
#[command(name = "quickfire")]
#[command(about = "Team word-guessing party game in the terminal")]
#[command(version)]
pub struct Cli {
    /// Full team cycles per game
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Seconds per round
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub seconds: u32,

    /// Words drawn per round
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub words: usize,

    /// Restrict rounds to a category (repeatable; one is picked each round)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Pre-select a team by id, e.g. team1 (repeatable)
    #[arg(long = "team", value_name = "ID")]
    pub teams: Vec<String>,

    /// Seed the word deck for reproducible games
    #[arg(long, env = "QUICKFIRE_SEED")]
    pub seed: Option<u64>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long, env = "QUICKFIRE_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the starting configuration, rejecting unknown teams and categories.
    ///
    /// The team count is not checked here: fewer than two teams just means
    /// the setup screen asks for more.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        if let Some(unknown) = self.teams.iter().find(|t| catalog::team(t).is_none()) {
            return Err(ConfigError::UnknownTeam(unknown.clone()));
        }
        if let Some(unknown) = self
            .categories
            .iter()
            .find(|c| !catalog::is_selectable_category(c))
        {
            return Err(ConfigError::UnknownCategory(unknown.clone()));
        }

        Ok(GameConfig {
            teams: self.teams.clone(),
            total_rounds: self.rounds,
            seconds_per_round: self.seconds,
            words_per_round: self.words,
            categories: self.categories.clone(),
        })
    }
}
