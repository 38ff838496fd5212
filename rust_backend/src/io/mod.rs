//! High-level data loading utilities.
//!
//! Loaders combine parsing with file handling and error context, and can run
//! the input validator before handing the request to the engine.
//!
//! # Example
//!
//! ```no_run
//! use aurora_rust::io::loaders::ForecastLoader;
//! use std::path::Path;
//!
//! let input = ForecastLoader::load_from_file(Path::new("forecast.json"))
//!     .expect("Failed to load");
//! println!("Loaded {} windows", input.windows.len());
//! ```

pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{ForecastLoadResult, ForecastLoader};
