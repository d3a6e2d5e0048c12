pub mod config;

pub use config::{
    scenario::{CarSpawn, CarSpawnConfig, ScenarioConfig},
    simulation::{SimulationConfig, UpdateMode},
};
