// Configuration loading and parsing (league.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::position::Position;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire league.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    league: LeagueSettings,
    #[serde(default)]
    data: DataPaths,
}

/// Top-level assembled configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueSettings,
    pub data: DataPaths,
}

/// Immutable league configuration for one draft session.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueSettings {
    pub num_teams: usize,
    pub roster: RosterSlots,
}

/// Per-position roster slot counts. The field names use the uppercase
/// position abbreviations to match the TOML keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RosterSlots {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub k: usize,
    pub flex: usize,
    pub dst: usize,
    #[serde(rename = "BN", alias = "BENCH")]
    pub bench: usize,
}

/// Where projection CSV files live.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub projections_dir: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            projections_dir: "data/projections".to_string(),
        }
    }
}

impl RosterSlots {
    /// Configured slot count for a position.
    pub fn slot_count(&self, pos: Position) -> usize {
        match pos {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
            Position::Kicker => self.k,
            Position::Defense => self.dst,
            Position::Flex => self.flex,
            Position::Bench => self.bench,
        }
    }

    /// Total roster size: the sum of all eight slot counts.
    pub fn total(&self) -> usize {
        self.qb + self.rb + self.wr + self.te + self.k + self.flex + self.dst + self.bench
    }
}

impl LeagueSettings {
    /// One pick per round per team, one slot filled per pick, so the number
    /// of rounds equals the roster size.
    pub fn total_rounds(&self) -> usize {
        self.roster.total()
    }

    /// Total picks across the whole draft.
    pub fn total_picks(&self) -> usize {
        self.total_rounds() * self.num_teams
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from a league.toml file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    parse_config(&text, path)
}

/// Parse league.toml text. Split from `load_config` so tests can run
/// against in-memory strings.
fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = Config {
        league: file.league,
        data: file.data,
    };

    validate(&config)?;

    Ok(config)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.league.num_teams == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.num_teams".into(),
            message: "must be greater than 0".into(),
        });
    }

    // Slot counts are accepted as-is, zeros included: a zero-slot position
    // is never needed and never suggested outside the bench catch-all.
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
