use crate::game::blind::BlindAuction;
use crate::game::buried::BuriedCards;
use crate::game::events::TracingObserver;
use crate::game::scoring::{ScoreCalculator, Scoring, ScoringError};
use crate::game::teams::Teams;
use crate::game::tracker::TrickTracker;
use crate::model::player::{Player, PlayerId};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_BLIND_SIZE: usize = 2;
const MIN_SEATS: usize = 2;
const MAX_SEATS: usize = 8;

/// Table setup loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TableConfig {
    pub seats: Vec<String>,
    #[serde(default = "default_blind_size")]
    pub blind_size: usize,
    #[serde(default = "default_scoring")]
    pub scoring: Scoring,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TableConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: TableConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut cfg: TableConfig =
            serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
                source,
                path: PathBuf::from("<inline>"),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_seats(&self.seats)?;
        if self.blind_size == 0 {
            return Err(ValidationError::InvalidField {
                field: "blind_size".to_string(),
                message: "blind must hold at least one card".to_string(),
            });
        }
        self.logging.normalize();
        Ok(())
    }

    /// Players seated in configuration order; ids follow seat position.
    pub fn players(&self) -> Vec<Player> {
        self.seats
            .iter()
            .enumerate()
            .map(|(index, name)| Player::new(PlayerId(index as u8), name.clone()))
            .collect()
    }

    /// Opens a traced auction with `players` in the given turn order. The
    /// blind must hold exactly `blind_size` cards.
    pub fn auction(&self, players: &[Player]) -> BlindAuction {
        let order: Vec<PlayerId> = players.iter().map(Player::id).collect();
        BlindAuction::with_observer(&order, Box::new(TracingObserver))
            .with_blind_size(self.blind_size)
    }

    pub fn score_calculator<'a>(
        &self,
        tracker: &'a TrickTracker,
        buried: &'a BuriedCards,
        teams: Option<&'a Teams>,
    ) -> Result<ScoreCalculator<'a>, ScoringError> {
        ScoreCalculator::new(self.scoring, tracker, buried, teams)
    }
}

fn default_blind_size() -> usize {
    DEFAULT_BLIND_SIZE
}

fn default_scoring() -> Scoring {
    Scoring::Normal
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_seats(seats: &[String]) -> Result<(), ValidationError> {
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats.len()) {
        return Err(ValidationError::InvalidField {
            field: "seats".to_string(),
            message: format!(
                "table needs between {MIN_SEATS} and {MAX_SEATS} seats but found {}",
                seats.len()
            ),
        });
    }

    let mut seen = HashSet::new();
    for name in seats {
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "seats".to_string(),
                message: "seat name must not be empty".to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "seats".to_string(),
                message: format!("seat name '{name}' defined more than once"),
            });
        }
    }

    Ok(())
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
