pub mod scenario;
pub mod simulation;

pub use scenario::{CarSpawn, CarSpawnConfig, ScenarioConfig};
pub use simulation::{SimulationConfig, UpdateMode};
