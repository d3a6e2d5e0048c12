use bevy::prelude::*;

use crate::components::{Car, RefuelRequest, Vehicle};

/// Applies refuel requests coming from the info panels.
pub fn refuel_system(mut requests: EventReader<RefuelRequest>, mut query: Query<&mut Car>) {
    for request in requests.read() {
        match query.get_mut(request.car) {
            Ok(mut car) => {
                car.refuel();
                info!("{} refuelled to {:.2}", car.brand(), car.current_fuel());
            }
            Err(_) => warn!("Refuel requested for unknown car {:?}", request.car),
        }
    }
}
