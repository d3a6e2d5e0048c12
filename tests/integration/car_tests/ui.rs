use carsim::components::CarInfoPanel;
use pretty_assertions::assert_eq;

use crate::common::{
    create_test_car_config, create_test_solar_config, create_test_spawn, TestAppBuilder,
};

#[test]
fn test_panel_tracks_car() {
    let mut config = create_test_car_config();
    config.sprite = Some("cars/test.png".to_string());
    let mut app = TestAppBuilder::new()
        .with_car(create_test_spawn(config))
        .build();
    app.run_steps(2);

    let panel = app.query_single::<CarInfoPanel>().expect("Panel not found");
    assert_eq!(
        panel,
        &CarInfoPanel {
            brand: "TestSedan".to_string(),
            sprite: Some("cars/test.png".to_string()),
            speed_text: "20.00".to_string(),
            fuel_text: "40.00".to_string(),
        }
    );
}

#[test]
fn test_panel_shows_two_decimals() {
    let mut app = TestAppBuilder::new()
        .with_car(create_test_spawn(create_test_solar_config(1.0)))
        .with_time_step(0.125)
        .build();
    app.run_frame();

    let panel = app.query_single::<CarInfoPanel>().expect("Panel not found");
    // speed 10 * 0.125, fuel 50 - 5 * 0.125 + 1 * 0.125 capped at 50
    assert_eq!(panel.speed_text, "1.25");
    assert_eq!(panel.fuel_text, "49.50");
}

#[test]
fn test_panel_updates_after_refuel() {
    let mut app = TestAppBuilder::new()
        .with_car(create_test_spawn(create_test_car_config()))
        .build();
    app.run_steps(10);
    assert_eq!(
        app.query_single::<CarInfoPanel>().expect("Panel not found").fuel_text,
        "0.00"
    );

    let entity = app.car_entity("TestSedan").expect("Car entity not found");
    app.press_refuel(entity);
    app.run_frame();

    let panel = app.query_single::<CarInfoPanel>().expect("Panel not found");
    assert_eq!(panel.fuel_text, "45.00");
    assert_eq!(panel.speed_text, "100.00");
}
