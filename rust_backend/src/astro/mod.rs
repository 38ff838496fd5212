//! Sun and Moon positions needed to fill in forecast inputs.
//!
//! - [`solar`]: Solar elevation for an observer and instant
//! - [`moon`]: Mean lunar phase and illumination

pub mod moon;
pub mod solar;

pub use moon::{moon_illumination, moon_phase, SYNODIC_MONTH_DAYS};
pub use solar::{solar_elevation, solar_position, SolarPosition};
