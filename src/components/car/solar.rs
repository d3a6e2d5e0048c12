use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::car::{CarState, Vehicle};

/// A car that recharges its battery from the sun every tick.
///
/// Recharging is not gated on movement: a stalled solar car keeps charging and drives off
/// again once the battery is back above zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarCar {
    base: CarState,
    recharge_rate: f64,
}

impl SolarCar {
    pub fn new(base: CarState, recharge_rate: f64) -> Self {
        Self {
            base,
            recharge_rate,
        }
    }

    /// Battery gained per second.
    pub fn recharge_rate(&self) -> f64 {
        self.recharge_rate
    }

    /// Overrides the starting battery level.
    pub fn with_current_fuel(mut self, fuel: f64) -> Self {
        self.base = self.base.with_current_fuel(fuel);
        self
    }

    /// Charges the battery for `dt` seconds, capped at `max_fuel`.
    pub fn recharge(&mut self, dt: f64) {
        self.base.add_fuel(self.recharge_rate * dt);
        debug!(
            "{} is recharging. Battery: {:.2}",
            self.base.brand(),
            self.base.current_fuel()
        );
    }
}

impl Vehicle for SolarCar {
    fn advance(&mut self, dt: f64) {
        self.base.advance(dt);
        self.recharge(dt);
    }

    fn refuel(&mut self) {
        self.base.refuel();
    }

    fn current_fuel(&self) -> f64 {
        self.base.current_fuel()
    }

    fn current_speed(&self) -> f64 {
        self.base.current_speed()
    }

    fn brand(&self) -> &str {
        self.base.brand()
    }

    fn top_speed(&self) -> f64 {
        self.base.top_speed()
    }

    fn acceleration(&self) -> f64 {
        self.base.acceleration()
    }

    fn max_fuel(&self) -> f64 {
        self.base.max_fuel()
    }
}
