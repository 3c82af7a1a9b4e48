//! Tile coverage estimation and deterministic pattern fills for tiled surfaces
//!
//! The estimator converts room geometry, tile footprint, grout gap, and installation
//! pattern into a tile count with wastage allowance. The pattern module assigns palette
//! colors to cells of a fixed grid using named position-based layout rules.

#![forbid(unsafe_code)]

/// Room geometry, unit conversion, and tile coverage estimation
pub mod estimate;
/// Input/output operations and error handling
pub mod io;
/// Color grid management and named layout fills
pub mod pattern;

pub use io::error::{EstimateError, Result};
