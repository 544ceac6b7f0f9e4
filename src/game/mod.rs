//! Game logic: configuration, word catalog, word draws, round state machine

pub mod catalog;
pub mod state;
pub mod words;

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

pub use state::{GameState, GameStatus, RoundSummary};
pub use words::Deck;

/// Default number of full team cycles per game
pub const DEFAULT_TOTAL_ROUNDS: u32 = 3;
/// Default round duration in seconds
pub const DEFAULT_SECONDS_PER_ROUND: u32 = 30;
/// Default number of words drawn per round
pub const DEFAULT_WORDS_PER_ROUND: usize = 5;
/// Fewest distinct teams a game can be played with
pub const MIN_TEAMS: usize = 2;

/// Reasons a game configuration is refused before play
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 2 teams are needed to play (got {found})")]
    TooFewTeams { found: usize },

    #[error("{field} must be at least 1")]
    NotPositive { field: &'static str },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown team: {0}")]
    UnknownTeam(String),
}

/// Settings fixed for the lifetime of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// Team ids in turn order
    pub teams: Vec<String>,
    pub total_rounds: u32,
    pub seconds_per_round: u32,
    pub words_per_round: usize,
    /// Categories a round may be restricted to; empty means all words
    pub categories: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            seconds_per_round: DEFAULT_SECONDS_PER_ROUND,
            words_per_round: DEFAULT_WORDS_PER_ROUND,
            categories: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Default settings for the given teams
    pub fn with_teams<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Number of distinct team ids
    pub fn distinct_teams(&self) -> usize {
        self.teams.iter().collect::<HashSet<_>>().len()
    }

    /// Check the setup gate: enough distinct teams, positive limits, known categories.
    ///
    /// The state machine itself accepts any configuration; callers run this
    /// before leaving setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let found = self.distinct_teams();
        if found < MIN_TEAMS {
            return Err(ConfigError::TooFewTeams { found });
        }
        if self.total_rounds == 0 {
            return Err(ConfigError::NotPositive { field: "rounds" });
        }
        if self.seconds_per_round == 0 {
            return Err(ConfigError::NotPositive {
                field: "seconds per round",
            });
        }
        if self.words_per_round == 0 {
            return Err(ConfigError::NotPositive {
                field: "words per round",
            });
        }
        if let Some(unknown) = self
            .categories
            .iter()
            .find(|c| !catalog::is_selectable_category(c))
        {
            return Err(ConfigError::UnknownCategory(unknown.clone()));
        }
        Ok(())
    }
}
