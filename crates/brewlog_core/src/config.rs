//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Read logging and seed settings from `BREWLOG_*` variables.
//! - Build the seed source matching the configured mode.
//!
//! # Invariants
//! - Unset variables fall back to defaults; malformed values are errors.

use crate::logging::{default_log_level, normalize_level};
use crate::seed::{DemoSeed, FixtureSeed, SeedSource};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "BREWLOG_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "BREWLOG_LOG_DIR";
pub const SEED_VAR: &str = "BREWLOG_SEED";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

/// How starting data is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Random demo data from an entropy-seeded generator.
    Demo,
    /// Random demo data from a fixed seed value.
    Seeded(u64),
    /// Only the sentinel category, no reviews.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    pub seed: SeedMode,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed: SeedMode::Demo,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = non_blank(lookup(LOG_LEVEL_VAR)) {
            config.log_level = normalize_level(level.as_str()).map_err(|message| ConfigError {
                variable: LOG_LEVEL_VAR,
                message,
            })?;
        }

        if let Some(dir) = non_blank(lookup(LOG_DIR_VAR)) {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError {
                    variable: LOG_DIR_VAR,
                    message: format!("must be an absolute path, got `{}`", dir.display()),
                });
            }
            config.log_dir = Some(dir);
        }

        if let Some(seed) = non_blank(lookup(SEED_VAR)) {
            config.seed = parse_seed_mode(seed.as_str())?;
        }

        Ok(config)
    }

    /// Builds the seed source for the configured mode.
    pub fn seed_source(&self, today: NaiveDate) -> Box<dyn SeedSource> {
        match self.seed {
            SeedMode::Demo => Box::new(DemoSeed::new()),
            SeedMode::Seeded(value) => Box::new(DemoSeed::from_seed(value, today)),
            SeedMode::Empty => Box::new(FixtureSeed::empty()),
        }
    }
}

fn parse_seed_mode(value: &str) -> Result<SeedMode, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "demo" => Ok(SeedMode::Demo),
        "none" => Ok(SeedMode::Empty),
        other => other
            .parse::<u64>()
            .map(SeedMode::Seeded)
            .map_err(|_| ConfigError {
                variable: SEED_VAR,
                message: format!("expected demo|none|<unsigned integer>, got `{other}`"),
            }),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
