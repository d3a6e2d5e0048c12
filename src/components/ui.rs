use bevy::prelude::*;

use crate::components::car::Vehicle;

/// Speed and fuel formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarReadout {
    pub speed: String,
    pub fuel: String,
}

impl CarReadout {
    pub fn from_vehicle(vehicle: &impl Vehicle) -> Self {
        Self {
            speed: format!("{:.2}", vehicle.current_speed()),
            fuel: format!("{:.2}", vehicle.current_fuel()),
        }
    }
}

/// Something that can show a car's readout.
pub trait CarDisplay {
    fn show(&mut self, readout: &CarReadout);
}

/// Info card for a single car.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CarInfoPanel {
    pub brand: String,
    pub sprite: Option<String>,
    pub speed_text: String,
    pub fuel_text: String,
}

impl CarInfoPanel {
    pub fn new(vehicle: &impl Vehicle, sprite: Option<String>) -> Self {
        let mut panel = Self {
            brand: vehicle.brand().to_string(),
            sprite,
            ..Default::default()
        };
        panel.show(&CarReadout::from_vehicle(vehicle));
        panel
    }
}

impl CarDisplay for CarInfoPanel {
    fn show(&mut self, readout: &CarReadout) {
        self.speed_text.clone_from(&readout.speed);
        self.fuel_text.clone_from(&readout.fuel);
    }
}

/// Fired when the refuel button on a car's panel is pressed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefuelRequest {
    pub car: Entity,
}
