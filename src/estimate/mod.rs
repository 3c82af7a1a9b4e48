//! Coverage estimation from room geometry and tile footprint
//!
//! This module contains estimation-related functionality including:
//! - Measurement units and room dimensions
//! - Tile footprint and installation pattern wastage
//! - Tile count, covered area, and box count derivation

/// Tile footprint, wastage policy, and the coverage estimator
pub mod coverage;
/// Measurement units and room dimension handling
pub mod units;

pub use coverage::{CoverageResult, InstallPattern, TileSpec, estimate, estimate_with_box_size};
pub use units::{LengthUnit, RoomDimensions};
