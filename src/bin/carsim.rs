use bevy::{log::LogPlugin, prelude::*};
use std::env;

use carsim::{
    components::{CarInfoPanel, NavAgent},
    plugins::CarPlugin,
    resources::{ScenarioConfig, UpdateMode},
    utils::SimError,
};

const DEFAULT_STEPS: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("usage: carsim <scenario.yaml|scenario.json> [steps]")?;

    let mut scenario = ScenarioConfig::from_file(path)?;
    let steps = match args.get(2) {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|e| SimError::InvalidConfig(format!("invalid step count '{arg}': {e}")))?,
        None => scenario.simulation.max_steps.unwrap_or(DEFAULT_STEPS),
    };

    // Headless runs tick once per update regardless of the configured mode.
    scenario.simulation.update_mode = UpdateMode::Stepped;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(CarPlugin::from_scenario(&scenario)?);

    for _ in 0..steps {
        app.update();
    }

    let elapsed = f64::from(steps) * scenario.simulation.time_step;
    println!("After {steps} ticks ({elapsed:.2} s):");

    let world = app.world_mut();
    let mut query = world.query::<(&Name, &CarInfoPanel, &NavAgent, &Transform)>();
    for (name, panel, agent, transform) in query.iter(world) {
        println!(
            "  {:<16} speed {:>8}  fuel {:>8}  position ({:.2}, {:.2}){}",
            name.as_str(),
            panel.speed_text,
            panel.fuel_text,
            transform.translation.x,
            transform.translation.y,
            if agent.stopped { "  [stalled]" } else { "" }
        );
    }

    Ok(())
}
