use serde::{Deserialize, Serialize};

use crate::components::car::Vehicle;

/// Fuel and speed state of a conventional car.
///
/// This is also the base state every other variant builds on: a [`SolarCar`] wraps one and
/// runs [`CarState::advance`] before its own recharge step.
///
/// [`SolarCar`]: crate::components::car::SolarCar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    /// Brand shown on the info panel.
    brand: String,
    /// Maximum speed the car can reach.
    top_speed: f64,
    /// Speed gained per second while there is fuel in the tank.
    acceleration: f64,
    /// Capacity of the tank.
    max_fuel: f64,
    /// Fuel burnt per second while moving.
    fuel_consumption: f64,
    current_speed: f64,
    current_fuel: f64,
}

impl CarState {
    /// Creates a stationary car with a full tank.
    pub fn new(
        brand: impl Into<String>,
        top_speed: f64,
        acceleration: f64,
        max_fuel: f64,
        fuel_consumption: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            top_speed,
            acceleration,
            max_fuel,
            fuel_consumption,
            current_speed: 0.0,
            current_fuel: max_fuel,
        }
    }

    /// Overrides the starting fuel level.
    pub fn with_current_fuel(mut self, fuel: f64) -> Self {
        self.current_fuel = fuel;
        self
    }

    pub(crate) fn add_fuel(&mut self, amount: f64) {
        self.current_fuel = (self.current_fuel + amount).min(self.max_fuel);
    }
}

impl Vehicle for CarState {
    fn advance(&mut self, dt: f64) {
        if self.current_fuel <= 0.0 {
            return;
        }

        self.current_speed = (self.current_speed + self.acceleration * dt).min(self.top_speed);

        // No floor here: the tank is allowed to end a tick slightly below zero.
        self.current_fuel -= self.fuel_consumption * dt;
    }

    fn refuel(&mut self) {
        self.current_fuel = self.max_fuel;
    }

    fn current_fuel(&self) -> f64 {
        self.current_fuel
    }

    fn current_speed(&self) -> f64 {
        self.current_speed
    }

    fn brand(&self) -> &str {
        &self.brand
    }

    fn top_speed(&self) -> f64 {
        self.top_speed
    }

    fn acceleration(&self) -> f64 {
        self.acceleration
    }

    fn max_fuel(&self) -> f64 {
        self.max_fuel
    }
}
