use bevy::prelude::*;

use crate::{
    components::{Car, NavAgent, NavigationSink, Vehicle, WaypointRoute},
    resources::SimulationConfig,
};

/// Feeds each car's state into its navigation agent and cycles the waypoint route.
///
/// An out-of-fuel car halts its agent. Otherwise the agent resumes toward the current
/// waypoint, moving on to the next one once it is within arrival range.
pub fn car_navigation_system(
    mut query: Query<(&Car, &mut NavAgent, &mut WaypointRoute, &Transform)>,
) {
    for (car, mut agent, mut route, transform) in query.iter_mut() {
        agent.set_motion_limits(car.current_speed(), car.acceleration());

        if car.is_out_of_fuel() {
            if !agent.stopped {
                warn!("{} is out of fuel, stopping", car.brand());
            }
            agent.halt();
            continue;
        }

        agent.resume();
        let position = transform.translation.truncate();
        let waypoint = if agent.has_arrived(position) {
            route.advance()
        } else {
            route.current_waypoint()
        };
        if let Some(waypoint) = waypoint {
            agent.set_destination(waypoint);
        }
    }
}

/// Moves agents toward their destinations and turns them to face their direction of travel.
pub fn nav_agent_system(
    mut query: Query<(&mut NavAgent, &mut Transform)>,
    sim: Res<SimulationConfig>,
) {
    let dt = sim.time_step as f32;

    for (mut agent, mut transform) in query.iter_mut() {
        let position = agent.step(transform.translation.truncate(), dt);
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if let Some(heading) = agent.heading() {
            transform.rotation = Quat::from_rotation_z(heading);
        }
    }
}
