use bevy::prelude::*;

use crate::{
    components::{Car, Vehicle},
    resources::SimulationConfig,
};

/// Advances every car by one simulation tick.
///
/// The tick length comes from [`SimulationConfig::time_step`] so stepped and fixed-timestep
/// runs integrate identically.
pub fn car_advance_system(mut query: Query<&mut Car>, sim: Res<SimulationConfig>) {
    let dt = sim.time_step;

    for mut car in query.iter_mut() {
        car.advance(dt);
    }
}
