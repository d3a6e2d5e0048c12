mod car;
mod navigation;
mod ui;

pub use car::{car_advance_system, refuel_system};
pub use navigation::{car_navigation_system, nav_agent_system};
pub use ui::car_info_system;
