use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::SimError;

/// How the car systems are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateMode {
    /// Fixed timestep driven by wall-clock time.
    #[default]
    RealTime,
    /// One tick per `App::update`, for headless runs and tests.
    Stepped,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seconds simulated per tick.
    pub time_step: f64,
    #[serde(default)]
    pub update_mode: UpdateMode,
    /// Ticks a headless run should perform.
    #[serde(default)]
    pub max_steps: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            update_mode: UpdateMode::RealTime,
            max_steps: None,
        }
    }
}

impl SimulationConfig {
    pub fn stepped(time_step: f64) -> Self {
        Self {
            time_step,
            update_mode: UpdateMode::Stepped,
            max_steps: None,
        }
    }

    /// Checks that `time_step` is a finite, positive number of seconds.
    ///
    /// The fixed-timestep schedule rejects a zero step, and a NaN step would spread into
    /// every car's state.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "time_step must be a positive number of seconds, got {}",
                self.time_step
            )));
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
