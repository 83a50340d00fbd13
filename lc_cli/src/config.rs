//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./championships";
const DEFAULT_USER: &str = "anonymous";

/// Complete CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory holding one `<id>.json` snapshot per championship
    pub data_dir: PathBuf,
    /// Fixed seed for reproducible draws
    pub seed: Option<u64>,
    /// Identity recorded on results and new championships
    pub user: String,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `data_dir_override` - Optional data directory (from `--data-dir`)
    /// * `seed_override` - Optional draw seed (from `--seed`)
    /// * `user_override` - Optional recorder identity (from `--user`)
    ///
    /// # Errors
    ///
    /// Returns error if `LC_SEED` is set but not an unsigned integer
    pub fn from_env(
        data_dir_override: Option<PathBuf>,
        seed_override: Option<u64>,
        user_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = data_dir_override
            .or_else(|| std::env::var("LC_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let seed = match seed_override {
            Some(seed) => Some(seed),
            None => parse_optional_env("LC_SEED")?,
        };

        let user = user_override
            .or_else(|| std::env::var("LC_USER").ok())
            .unwrap_or_else(|| DEFAULT_USER.to_string());

        Ok(CliConfig {
            data_dir,
            seed,
            user,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: "LC_DATA_DIR".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.user.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "LC_USER".to_string(),
                reason: "Must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional environment variable, rejecting bad values
fn parse_optional_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: key.to_string(),
        reason: format!("'{raw}' is not valid: {e}"),
    })
}
