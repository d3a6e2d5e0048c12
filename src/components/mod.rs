pub mod car;
pub mod driver;
pub mod navigation;
pub mod ui;

pub use car::{
    Car, CarConfig, CarPreset, CarSource, CarState, CarType, ConfigError, Powertrain,
    RawCarConfig, SolarCar, Vehicle,
};
pub use driver::CarDriver;
pub use navigation::{NavAgent, NavigationSink, WaypointRoute, ARRIVAL_RADIUS};
pub use ui::{CarDisplay, CarInfoPanel, CarReadout, RefuelRequest};
