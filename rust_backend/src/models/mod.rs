//! Domain types for forecast inputs and decision outputs.

pub mod decision;
pub mod forecast;

pub use decision::*;
pub use forecast::*;
