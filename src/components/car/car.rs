use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::car::{CarConfig, CarState, Powertrain, SolarCar, Vehicle};

/// A car entity's simulation state, tagged by variant.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Car {
    Gasoline(CarState),
    Solar(SolarCar),
}

impl Car {
    /// Builds the variant selected by the configuration's powertrain, with a full tank.
    pub fn from_config(config: &CarConfig) -> Self {
        let base = CarState::new(
            config.brand.clone(),
            config.top_speed,
            config.acceleration,
            config.max_fuel,
            config.fuel_consumption,
        );

        match config.powertrain {
            Powertrain::Gasoline => Car::Gasoline(base),
            Powertrain::Solar { recharge_rate } => Car::Solar(SolarCar::new(base, recharge_rate)),
        }
    }

    /// Overrides the starting fuel level of whichever variant this is.
    pub fn with_current_fuel(self, fuel: f64) -> Self {
        match self {
            Car::Gasoline(state) => Car::Gasoline(state.with_current_fuel(fuel)),
            Car::Solar(solar) => Car::Solar(solar.with_current_fuel(fuel)),
        }
    }

    /// Runs one full tick and reports whether it left a running car out of fuel.
    ///
    /// The check happens after the variant's whole step, so a solar car whose recharge
    /// covers the tick's consumption is not reported.
    pub fn tick(&mut self, dt: f64) -> bool {
        let was_running = !self.is_out_of_fuel();
        self.vehicle_mut().advance(dt);

        let stalled = was_running && self.is_out_of_fuel();
        if stalled {
            warn!(
                "{} ran out of fuel at {:.2} (fuel {:.2})",
                self.brand(),
                self.current_speed(),
                self.current_fuel()
            );
        }
        stalled
    }

    fn vehicle(&self) -> &dyn Vehicle {
        match self {
            Car::Gasoline(state) => state,
            Car::Solar(solar) => solar,
        }
    }

    fn vehicle_mut(&mut self) -> &mut dyn Vehicle {
        match self {
            Car::Gasoline(state) => state,
            Car::Solar(solar) => solar,
        }
    }
}

impl From<&CarConfig> for Car {
    fn from(config: &CarConfig) -> Self {
        Car::from_config(config)
    }
}

impl Vehicle for Car {
    fn advance(&mut self, dt: f64) {
        self.tick(dt);
    }

    fn refuel(&mut self) {
        self.vehicle_mut().refuel();
    }

    fn current_fuel(&self) -> f64 {
        self.vehicle().current_fuel()
    }

    fn current_speed(&self) -> f64 {
        self.vehicle().current_speed()
    }

    fn brand(&self) -> &str {
        self.vehicle().brand()
    }

    fn top_speed(&self) -> f64 {
        self.vehicle().top_speed()
    }

    fn acceleration(&self) -> f64 {
        self.vehicle().acceleration()
    }

    fn max_fuel(&self) -> f64 {
        self.vehicle().max_fuel()
    }
}
