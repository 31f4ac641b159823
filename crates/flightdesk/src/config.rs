//! Configuration management for flightdesk.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! defaults alone describe the standard fleet, so no file is required.

use std::collections::HashSet;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flight::FlightNumber;
use crate::seats::MAX_SEATS;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "flightdesk";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTDESK_`)
/// 2. TOML config file at `~/.config/flightdesk/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flights seeded into the index at startup.
    pub fleet: FleetConfig,
}

/// The set of flights registered at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Flights in insertion order.
    pub flights: Vec<FlightSeed>,
}

/// One flight to register at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSeed {
    /// The flight number.
    pub number: FlightNumber,
    /// Total seats on the flight, at most [`MAX_SEATS`].
    pub seats: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            flights: default_flights(),
        }
    }
}

/// The standard fleet.
fn default_flights() -> Vec<FlightSeed> {
    [(101, 50), (102, 60), (103, 40), (104, 70), (105, 55)]
        .into_iter()
        .map(|(number, seats)| FlightSeed { number, seats })
        .collect()
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("FLIGHTDESK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a seeded flight number is zero or repeated, or if
    /// a flight has more than [`MAX_SEATS`] seats.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for seed in &self.fleet.flights {
            if seed.number == 0 {
                return Err(Error::config_validation(
                    "flight number must be greater than 0",
                ));
            }
            if !seen.insert(seed.number) {
                return Err(Error::config_validation(format!(
                    "duplicate flight number {} in fleet",
                    seed.number
                )));
            }
            if seed.seats > MAX_SEATS {
                return Err(Error::config_validation(format!(
                    "flight {} has {} seats (maximum is {MAX_SEATS})",
                    seed.number, seed.seats
                )));
            }
        }

        Ok(())
    }
}
