use crate::components::{
    car::{Car, CarConfig, Vehicle},
    navigation::NavigationSink,
    ui::{CarDisplay, CarReadout},
};

/// Ticks one car and forwards its state to a navigation sink and a display.
///
/// This is the same wiring the ECS systems do, for callers that own their collaborators
/// directly instead of through a Bevy world.
pub struct CarDriver<N: NavigationSink, D: CarDisplay> {
    car: Car,
    navigation: N,
    display: D,
}

impl<N: NavigationSink, D: CarDisplay> CarDriver<N, D> {
    /// Builds the car selected by `config` and shows its initial readout.
    pub fn new(config: &CarConfig, navigation: N, display: D) -> Self {
        Self::with_car(Car::from_config(config), navigation, display)
    }

    pub fn with_car(car: Car, navigation: N, mut display: D) -> Self {
        display.show(&CarReadout::from_vehicle(&car));
        Self {
            car,
            navigation,
            display,
        }
    }

    /// Runs one tick: advance the car, then update navigation and display.
    pub fn tick(&mut self, dt: f64) {
        self.car.advance(dt);

        self.navigation
            .set_motion_limits(self.car.current_speed(), self.car.acceleration());
        if self.car.is_out_of_fuel() {
            self.navigation.halt();
        } else {
            self.navigation.resume();
        }

        self.display.show(&CarReadout::from_vehicle(&self.car));
    }

    /// The refuel action bound to the display's button.
    pub fn refuel(&mut self) {
        self.car.refuel();
        self.display.show(&CarReadout::from_vehicle(&self.car));
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
