/// Capability set shared by every car variant.
///
/// `advance` is the extension point: variants run the base fuel/speed update first and then
/// apply their own effect on top of it.
pub trait Vehicle {
    /// Advances the vehicle by one tick of `dt` seconds.
    fn advance(&mut self, dt: f64);

    /// Fills the tank back up to `max_fuel`.
    fn refuel(&mut self);

    fn current_fuel(&self) -> f64;

    fn current_speed(&self) -> f64;

    fn brand(&self) -> &str;

    fn top_speed(&self) -> f64;

    fn acceleration(&self) -> f64;

    fn max_fuel(&self) -> f64;

    /// A vehicle is stalled once its fuel reaches zero or dips below it.
    fn is_out_of_fuel(&self) -> bool {
        self.current_fuel() <= 0.0
    }
}
