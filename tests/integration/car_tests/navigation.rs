use bevy::prelude::*;
use carsim::components::{NavAgent, WaypointRoute};
use std::f32::consts::FRAC_PI_2;

use crate::common::{
    assert_position_eq, create_square_route, create_test_car_config, create_test_spawn,
    TestAppBuilder,
};

fn square_app() -> crate::common::TestApp {
    TestAppBuilder::new()
        .with_car(create_test_spawn(create_test_car_config()).with_waypoints(create_square_route(20.0)))
        .build()
}

#[test]
fn test_heads_for_first_waypoint() {
    let mut app = square_app();
    app.run_frame();

    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_position_eq(transform.translation, Vec2::new(10.0, 0.0), 1e-4);
    // Facing +X: the quarter turn off the sprite's +Y orientation.
    assert!(transform.rotation.angle_between(Quat::from_rotation_z(-FRAC_PI_2)) < 1e-4);

    let agent = app.query_single::<NavAgent>().expect("NavAgent not found");
    assert_eq!(agent.destination, Some(Vec2::new(20.0, 0.0)));
    assert_eq!(agent.speed, 10.0);
    assert_eq!(agent.acceleration, 10.0);
    assert!(!agent.stopped);
}

#[test]
fn test_cycles_to_next_waypoint() {
    let mut app = square_app();
    app.run_steps(3);

    let route = app.query_single::<WaypointRoute>().expect("Route not found");
    assert_eq!(route.current, 1);

    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_position_eq(transform.translation, Vec2::new(20.0, 20.0), 1e-4);
    assert!(transform.rotation.angle_between(Quat::IDENTITY) < 1e-4);
}

#[test]
fn test_route_wraps_back_to_start() {
    let mut app = square_app();
    let mut visited = Vec::new();
    for _ in 0..9 {
        app.run_frame();
        let route = app.query_single::<WaypointRoute>().expect("Route not found");
        if visited.last() != Some(&route.current) {
            visited.push(route.current);
        }
    }

    assert_eq!(&visited[..5], &[0, 1, 2, 3, 0]);
}

#[test]
fn test_out_of_fuel_halts_agent() {
    let mut app = square_app();
    app.run_steps(10);

    let stalled_at = app
        .query_single::<Transform>()
        .expect("Transform not found")
        .translation;
    {
        let agent = app.query_single::<NavAgent>().expect("NavAgent not found");
        assert!(agent.stopped);
        assert_eq!(agent.velocity, Vec2::ZERO);
    }

    app.run_steps(3);
    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_eq!(transform.translation, stalled_at);

    let entity = app.car_entity("TestSedan").expect("Car entity not found");
    app.press_refuel(entity);
    app.run_frame();

    let agent = app.query_single::<NavAgent>().expect("NavAgent not found");
    assert!(!agent.stopped);
    assert!(agent.velocity.length() > 0.0);
}

#[test]
fn test_without_waypoints_car_stays_put() {
    let mut app = TestAppBuilder::new()
        .with_car(create_test_spawn(create_test_car_config()).at(Vec2::new(3.0, 4.0)))
        .build();
    app.run_steps(4);

    let agent = app.query_single::<NavAgent>().expect("NavAgent not found");
    assert_eq!(agent.destination, None);
    assert_eq!(agent.speed, 40.0);

    let transform = app.query_single::<Transform>().expect("Transform not found");
    assert_position_eq(transform.translation, Vec2::new(3.0, 4.0), 1e-6);
}
