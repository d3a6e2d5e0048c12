use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::car::{CarType, ConfigError, RawCarConfig};

/// Energy source of a car. Fields that only make sense for one variant live on that variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Powertrain {
    Gasoline,
    Solar { recharge_rate: f64 },
}

impl Powertrain {
    pub fn car_type(&self) -> CarType {
        match self {
            Powertrain::Gasoline => CarType::Gasoline,
            Powertrain::Solar { .. } => CarType::Solar,
        }
    }
}

/// Validated car configuration used to construct a [`Car`](crate::components::car::Car).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarConfig {
    pub brand: String,
    pub top_speed: f64,
    pub acceleration: f64,
    pub max_fuel: f64,
    pub fuel_consumption: f64,
    pub powertrain: Powertrain,
    #[serde(default)]
    pub sprite: Option<String>,
}

impl Default for CarConfig {
    /// The `Sedan` preset is the default.
    fn default() -> Self {
        Self::from_preset(CarPreset::Sedan)
    }
}

impl CarConfig {
    /// Creates a car configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Either a built-in preset (`Programmed`) or a YAML file (`File`).
    pub fn new(source: CarSource) -> Result<Self, ConfigError> {
        match source {
            CarSource::Programmed(preset) => Ok(Self::from_preset(preset)),
            CarSource::File(path) => Self::from_file(path),
        }
    }

    fn from_preset(preset: CarPreset) -> Self {
        match preset {
            CarPreset::Sedan => Self {
                brand: "Sedan".to_string(),
                top_speed: 100.0,
                acceleration: 10.0,
                max_fuel: 50.0,
                fuel_consumption: 5.0,
                powertrain: Powertrain::Gasoline,
                sprite: Some("cars/sedan.png".to_string()),
            },
            CarPreset::SolarRunner => Self {
                brand: "SolarRunner".to_string(),
                top_speed: 80.0,
                acceleration: 8.0,
                max_fuel: 40.0,
                fuel_consumption: 4.0,
                powertrain: Powertrain::Solar { recharge_rate: 2.0 },
                sprite: Some("cars/solar_runner.png".to_string()),
            },
        }
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_raw(RawCarConfig::from_file(path)?)
    }

    /// Converts the flat file representation into a validated configuration.
    pub fn from_raw(raw: RawCarConfig) -> Result<Self, ConfigError> {
        let powertrain = match (raw.car_type, raw.recharge_rate) {
            (CarType::Gasoline, None) => Powertrain::Gasoline,
            (CarType::Gasoline, Some(rate)) => {
                warn!(
                    "{}: recharge_rate {} ignored for a gasoline car",
                    raw.brand, rate
                );
                Powertrain::Gasoline
            }
            (CarType::Solar, Some(recharge_rate)) => Powertrain::Solar { recharge_rate },
            (CarType::Solar, None) => {
                return Err(ConfigError::ValidationError(format!(
                    "{}: solar cars need a recharge_rate",
                    raw.brand
                )))
            }
        };

        let config = Self {
            brand: raw.brand,
            top_speed: raw.top_speed,
            acceleration: raw.acceleration,
            max_fuel: raw.max_fuel,
            fuel_consumption: raw.fuel_consumption,
            powertrain,
            sprite: raw.sprite,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the performance figures are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive(&self.brand, "top_speed", self.top_speed)?;
        positive(&self.brand, "acceleration", self.acceleration)?;
        positive(&self.brand, "max_fuel", self.max_fuel)?;
        non_negative(&self.brand, "fuel_consumption", self.fuel_consumption)?;
        if let Powertrain::Solar { recharge_rate } = self.powertrain {
            non_negative(&self.brand, "recharge_rate", recharge_rate)?;
        }
        Ok(())
    }

    pub fn sedan() -> Self {
        Self::from_preset(CarPreset::Sedan)
    }

    pub fn solar_runner() -> Self {
        Self::from_preset(CarPreset::SolarRunner)
    }
}

fn positive(brand: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{brand}: {field} must be a positive number, got {value}"
        )))
    }
}

fn non_negative(brand: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{brand}: {field} must not be negative, got {value}"
        )))
    }
}

/// Source for a car configuration.
#[derive(Debug, Clone)]
pub enum CarSource {
    Programmed(CarPreset),
    File(PathBuf),
}

/// Built-in cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarPreset {
    Sedan,
    SolarRunner,
}
