use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid car configuration: {0}")]
    ValidationError(String),
}

/// Which concrete car to build from a [`RawCarConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarType {
    #[serde(alias = "Standard")]
    Gasoline,
    Solar,
}

/// Flat car description as it is written in scenario and car files.
///
/// Variant specific fields are optional here; [`CarConfig::from_raw`] checks that the ones the
/// selected `car_type` needs are present.
///
/// [`CarConfig::from_raw`]: crate::components::car::CarConfig::from_raw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCarConfig {
    /// Car identification
    pub brand: String,
    pub car_type: CarType,

    /// Performance
    pub top_speed: f64,
    pub acceleration: f64,

    /// Energy
    pub max_fuel: f64,
    pub fuel_consumption: f64,
    #[serde(default)]
    pub recharge_rate: Option<f64>,

    /// Path to the sprite shown on the info panel.
    #[serde(default)]
    pub sprite: Option<String>,
}

impl RawCarConfig {
    /// Reads a single car description from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawCarConfig = serde_yaml::from_str(&file_contents)?;
        info!("Loaded car config '{}' from {}", raw.brand, path.display());
        Ok(raw)
    }
}
