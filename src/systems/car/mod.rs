mod advance;
mod refuel;

pub use advance::car_advance_system;
pub use refuel::refuel_system;
