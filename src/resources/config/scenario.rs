use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    components::{CarConfig, ConfigError, RawCarConfig},
    resources::SimulationConfig,
    utils::SimError,
};

/// One car as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSpawnConfig {
    pub car: RawCarConfig,
    #[serde(default)]
    pub start: [f32; 2],
    #[serde(default)]
    pub waypoints: Vec<[f32; 2]>,
}

/// A validated car ready to be spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct CarSpawn {
    pub config: CarConfig,
    pub start: Vec2,
    pub waypoints: Vec<Vec2>,
}

impl CarSpawn {
    pub fn new(config: CarConfig) -> Self {
        Self {
            config,
            start: Vec2::ZERO,
            waypoints: Vec::new(),
        }
    }

    pub fn at(mut self, start: Vec2) -> Self {
        self.start = start;
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Vec2>) -> Self {
        self.waypoints = waypoints;
        self
    }
}

impl TryFrom<CarSpawnConfig> for CarSpawn {
    type Error = ConfigError;

    fn try_from(spawn: CarSpawnConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            config: CarConfig::from_raw(spawn.car)?,
            start: Vec2::from_array(spawn.start),
            waypoints: spawn.waypoints.into_iter().map(Vec2::from_array).collect(),
        })
    }
}

/// Everything needed to run a simulation: timing plus the cars to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub cars: Vec<CarSpawnConfig>,
}

impl ScenarioConfig {
    /// Loads a scenario, as JSON for `.json` files and YAML otherwise.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scenario: ScenarioConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            _ => serde_yaml::from_str(&contents)?,
        };
        info!(
            "Loaded scenario {} with {} car(s)",
            path.display(),
            scenario.cars.len()
        );
        Ok(scenario)
    }

    /// Validates the timing and every car, then converts the cars into spawns.
    pub fn build(&self) -> Result<Vec<CarSpawn>, SimError> {
        self.simulation.validate()?;
        let spawns = self
            .cars
            .iter()
            .cloned()
            .map(CarSpawn::try_from)
            .collect::<Result<_, _>>()?;
        Ok(spawns)
    }
}
