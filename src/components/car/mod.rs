#[allow(clippy::module_inception)]
mod car;
mod config;
mod loader;
mod solar;
mod state;
mod vehicle;

pub use car::Car;
pub use config::{CarConfig, CarPreset, CarSource, Powertrain};
pub use loader::{CarType, ConfigError, RawCarConfig};
pub use solar::SolarCar;
pub use state::CarState;
pub use vehicle::Vehicle;
