use bevy::prelude::*;
use carsim::{
    components::{Car, CarPreset, CarSource, CarConfig, Vehicle},
    plugins::CarPlugin,
    resources::{CarSpawn, ScenarioConfig, SimulationConfig, UpdateMode},
    utils::SimError,
};
use std::{io::Write, time::Duration};

use crate::common::assert_car_state_valid;

fn track_scenario() -> ScenarioConfig {
    ScenarioConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/track.yaml"))
        .expect("bundled scenario should load")
}

#[test]
fn test_bundled_scenario_runs() {
    let scenario = track_scenario();
    assert_eq!(scenario.simulation.update_mode, UpdateMode::Stepped);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(CarPlugin::from_scenario(&scenario).expect("scenario should validate"));
    for _ in 0..120 {
        app.update();
    }

    let world = app.world_mut();
    let mut query = world.query::<(&Name, &Car)>();
    let mut brands = Vec::new();
    for (name, car) in query.iter(world) {
        assert_car_state_valid(car);
        assert!(car.current_speed() > 0.0);
        brands.push(name.as_str().to_string());
    }
    brands.sort();
    assert_eq!(brands, vec!["Sedan".to_string(), "SolarRunner".to_string()]);
}

#[test]
fn test_real_time_mode_uses_fixed_timestep() {
    let config = CarConfig::new(CarSource::Programmed(CarPreset::SolarRunner)).unwrap();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(CarPlugin::new(
        vec![CarSpawn::new(config)],
        SimulationConfig {
            time_step: 0.05,
            ..Default::default()
        },
    ));
    app.update();

    let fixed = app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep(), Duration::from_secs_f64(0.05));
    assert_eq!(
        app.world().resource::<SimulationConfig>().update_mode,
        UpdateMode::RealTime
    );
}

#[test]
fn test_scenario_with_non_positive_time_step_is_rejected() {
    for time_step in ["0.0", "-0.5"] {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "simulation:\n  time_step: {time_step}\ncars:\n  - car:\n      brand: Sedan\n      \
             car_type: Gasoline\n      top_speed: 100.0\n      acceleration: 10.0\n      \
             max_fuel: 50.0\n      fuel_consumption: 5.0\n"
        )
        .unwrap();

        let scenario = ScenarioConfig::from_file(file.path()).unwrap();
        assert!(
            matches!(
                CarPlugin::from_scenario(&scenario),
                Err(SimError::InvalidConfig(_))
            ),
            "time_step {time_step} should be rejected"
        );
    }
}

#[test]
fn test_zero_time_step_falls_back_to_default() {
    let config = CarConfig::new(CarSource::Programmed(CarPreset::Sedan)).unwrap();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(CarPlugin::new(
        vec![CarSpawn::new(config)],
        SimulationConfig {
            time_step: 0.0,
            ..Default::default()
        },
    ));
    app.update();

    let default_step = SimulationConfig::default().time_step;
    let fixed = app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep(), Duration::from_secs_f64(default_step));
    assert_eq!(
        app.world().resource::<SimulationConfig>().time_step,
        default_step
    );
}
