mod car;

pub use car::{CarPlugin, CarSet};
