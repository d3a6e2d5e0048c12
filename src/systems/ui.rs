use bevy::prelude::*;

use crate::components::{Car, CarDisplay, CarInfoPanel, CarReadout};

/// Refreshes each car's info panel with its current speed and fuel.
pub fn car_info_system(mut query: Query<(&Car, &mut CarInfoPanel)>) {
    for (car, mut panel) in query.iter_mut() {
        panel.show(&CarReadout::from_vehicle(car));
    }
}
