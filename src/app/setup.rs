//! Setup screen: choose teams and categories before a game

use crate::game::catalog::{self, CategoryInfo, TeamInfo};
use crate::game::{ConfigError, GameConfig};

/// One selectable line on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupRow {
    Team(&'static TeamInfo),
    Category(&'static CategoryInfo),
}

/// Team and category selection, plus the fixed limits from the command line
#[derive(Debug, Clone)]
pub struct SetupForm {
    /// Rounds, seconds and words per round; teams and categories are filled on submit
    pub limits: GameConfig,
    /// Selected team ids, in the order they were picked (turn order)
    pub teams: Vec<String>,
    /// Selected category names
    pub categories: Vec<String>,
    /// Highlighted row
    pub cursor: usize,
    /// Why the last submit was refused
    pub error: Option<String>,
}

impl SetupForm {
    /// Start from a configuration, keeping any teams/categories it already names.
    pub fn new(config: GameConfig) -> Self {
        let teams = config.teams.clone();
        let categories = config.categories.clone();
        Self {
            limits: GameConfig {
                teams: Vec::new(),
                categories: Vec::new(),
                ..config
            },
            teams,
            categories,
            cursor: 0,
            error: None,
        }
    }

    /// All rows: teams first, then categories
    pub fn rows() -> Vec<SetupRow> {
        catalog::teams()
            .iter()
            .map(SetupRow::Team)
            .chain(catalog::categories().iter().map(SetupRow::Category))
            .collect()
    }

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.cursor < Self::rows().len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    /// Select or deselect the highlighted row
    pub fn toggle(&mut self) {
        let Some(row) = Self::rows().get(self.cursor).copied() else {
            return;
        };
        let (list, value) = match row {
            SetupRow::Team(team) => (&mut self.teams, team.id),
            SetupRow::Category(category) => (&mut self.categories, category.name),
        };
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else {
            list.push(value.to_string());
        }
        self.error = None;
    }

    pub fn is_selected(&self, row: SetupRow) -> bool {
        match row {
            SetupRow::Team(team) => self.teams.iter().any(|t| t == team.id),
            SetupRow::Category(category) => self.categories.iter().any(|c| c == category.name),
        }
    }

    /// Whether enough teams are picked to continue
    pub fn can_start(&self) -> bool {
        self.config().validate().is_ok()
    }

    /// The configuration as currently selected
    pub fn config(&self) -> GameConfig {
        GameConfig {
            teams: self.teams.clone(),
            categories: self.categories.clone(),
            ..self.limits.clone()
        }
    }

    /// Validate the selection; on failure the error is kept for display.
    pub fn submit(&mut self) -> Result<GameConfig, ConfigError> {
        let config = self.config();
        match config.validate() {
            Ok(()) => {
                self.error = None;
                Ok(config)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
