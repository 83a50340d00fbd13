//! Championship configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ENTRANTS, MAX_ENTRANTS, MIN_ENTRANTS};
use crate::errors::{EngineError, EngineResult};

/// Settings chosen when a championship is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipConfig {
    /// Championship name
    pub name: String,

    /// Free-text description shown to entrants
    #[serde(default)]
    pub description: String,

    /// Roster size limit (default: 8)
    pub max_entrants: usize,

    /// Whether two entrants may play as the same team
    #[serde(default)]
    pub allow_same_team: bool,
}

impl Default for ChampionshipConfig {
    fn default() -> Self {
        Self {
            name: "New Championship".to_string(),
            description: String::new(),
            max_entrants: DEFAULT_MAX_ENTRANTS,
            allow_same_team: false,
        }
    }
}

impl ChampionshipConfig {
    /// Default configuration with the given name
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "Championship name is required".to_string(),
            ));
        }

        if !(MIN_ENTRANTS..=MAX_ENTRANTS).contains(&self.max_entrants) {
            return Err(EngineError::InvalidConfig(format!(
                "Max entrants must be between {MIN_ENTRANTS} and {MAX_ENTRANTS}"
            )));
        }

        Ok(())
    }
}
