use bevy::prelude::*;

use crate::{
    components::{Car, CarInfoPanel, NavAgent, RefuelRequest, Vehicle, WaypointRoute},
    resources::{CarSpawn, ScenarioConfig, SimulationConfig, UpdateMode},
    systems::{
        car_advance_system, car_info_system, car_navigation_system, nav_agent_system,
        refuel_system,
    },
    utils::SimError,
};

/// Order in which the car systems run within a tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum CarSet {
    Input,
    Advance,
    Navigate,
    Move,
    Display,
}

/// Cars spawn facing +X; their sprites are drawn facing +Y.
const SPAWN_ROTATION: f32 = -std::f32::consts::FRAC_PI_2;

pub struct CarPlugin {
    cars: Vec<CarSpawn>,
    simulation: SimulationConfig,
}

impl CarPlugin {
    pub fn new(cars: Vec<CarSpawn>, simulation: SimulationConfig) -> Self {
        CarPlugin { cars, simulation }
    }

    /// Builds the plugin from a scenario, rejecting invalid timing or cars.
    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Self, SimError> {
        Ok(Self::new(scenario.build()?, scenario.simulation.clone()))
    }

    fn setup_cars(mut commands: Commands, cars: Vec<CarSpawn>) {
        for spawn in cars {
            let car = Car::from_config(&spawn.config);
            let panel = CarInfoPanel::new(&car, spawn.config.sprite.clone());
            info!(
                "Spawning {} ({:?}) at {} with {} waypoint(s)",
                car.brand(),
                spawn.config.powertrain.car_type(),
                spawn.start,
                spawn.waypoints.len()
            );

            commands.spawn((
                Name::new(spawn.config.brand.clone()),
                Transform::from_xyz(spawn.start.x, spawn.start.y, 0.0)
                    .with_rotation(Quat::from_rotation_z(SPAWN_ROTATION)),
                NavAgent::new(),
                WaypointRoute::new(spawn.waypoints),
                panel,
                car,
            ));
        }
    }
}

impl Plugin for CarPlugin {
    fn build(&self, app: &mut App) {
        let cars = self.cars.clone();
        let simulation = match self.simulation.validate() {
            Ok(()) => self.simulation.clone(),
            Err(err) => {
                error!("{err}; using the default time step instead");
                SimulationConfig {
                    time_step: SimulationConfig::default().time_step,
                    ..self.simulation.clone()
                }
            }
        };

        app.insert_resource(simulation.clone())
            .add_event::<RefuelRequest>()
            .add_systems(Startup, move |commands: Commands| {
                Self::setup_cars(commands, cars.clone())
            });

        let systems = (
            refuel_system.in_set(CarSet::Input),
            car_advance_system.in_set(CarSet::Advance),
            car_navigation_system.in_set(CarSet::Navigate),
            nav_agent_system.in_set(CarSet::Move),
            car_info_system.in_set(CarSet::Display),
        );
        let sets = (
            CarSet::Input,
            CarSet::Advance,
            CarSet::Navigate,
            CarSet::Move,
            CarSet::Display,
        )
            .chain();

        match simulation.update_mode {
            UpdateMode::RealTime => {
                app.configure_sets(FixedUpdate, sets)
                    .add_systems(FixedUpdate, systems)
                    .insert_resource(Time::<Fixed>::from_seconds(simulation.time_step));
            }
            UpdateMode::Stepped => {
                app.configure_sets(Update, sets).add_systems(Update, systems);
            }
        }
    }
}
