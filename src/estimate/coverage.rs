//! Tile footprint, wastage policy, and the coverage estimator
//!
//! The grout gap is added to each tile edge to model the space one tile plus its
//! share of the surrounding joint occupies; it is never subtracted from the room.
//! Both rounding steps use ceiling so rounding can never under-provision.

use crate::estimate::units::{RoomDimensions, require_positive};
use crate::io::configuration::DEFAULT_TILES_PER_BOX;
use crate::io::error::{Result, invalid_parameter};

/// Tile geometry in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileSpec {
    /// Square tile described by one edge length
    Square(f64),
    /// Rectangular tile described by both edge lengths
    Rectangular(f64, f64),
}

impl TileSpec {
    /// Both edge lengths in millimeters (square tiles report the same edge twice)
    pub const fn edges(&self) -> (f64, f64) {
        match *self {
            Self::Square(edge) => (edge, edge),
            Self::Rectangular(edge_a, edge_b) => (edge_a, edge_b),
        }
    }

    /// Area one tile occupies including its share of the grout joint
    ///
    /// # Errors
    ///
    /// Returns [`crate::EstimateError::MissingInformation`] when an edge is
    /// zero, negative, or not finite
    pub fn footprint_square_millimeters(&self, gap_mm: f64) -> Result<f64> {
        let (edge_a, edge_b) = self.edges();
        let edge_a = require_positive("tile size", edge_a)?;
        let edge_b = require_positive("tile size", edge_b)?;
        Ok((edge_a + gap_mm) * (edge_b + gap_mm))
    }
}

/// Installation pattern with its fixed wastage allowance
///
/// The pattern-to-multiplier mapping is a closed table; diagonal and herringbone
/// installs waste more tile to edge cuts than a standard grid-aligned install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPattern {
    /// Grid-aligned install, 10% wastage
    Standard,
    /// 45-degree install, 15% wastage
    Diagonal,
    /// Herringbone install, 20% wastage
    Herringbone,
}

impl InstallPattern {
    /// Multiplier applied to the raw tile count to cover cuts, breakage, and spares
    pub const fn wastage_multiplier(self) -> f64 {
        match self {
            Self::Standard => 1.10,
            Self::Diagonal => 1.15,
            Self::Herringbone => 1.20,
        }
    }

    /// Lowercase display name of the pattern
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Diagonal => "diagonal",
            Self::Herringbone => "herringbone",
        }
    }
}

/// Derived coverage quantities, recomputed on every input change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageResult {
    /// Tile count after wastage, rounded up
    pub tiles_required: u64,
    /// Room area in the original input unit, for display only
    pub total_area: f64,
    /// Box count at the configured tiles-per-box packaging
    pub boxes_needed: u64,
}

/// Estimate tile requirements using the default packaging of
/// [`DEFAULT_TILES_PER_BOX`] tiles per box
///
/// # Errors
///
/// Returns [`crate::EstimateError::MissingInformation`] for missing or
/// non-positive room or tile dimensions, and
/// [`crate::EstimateError::InvalidParameter`] for a negative or non-finite
/// grout gap.
pub fn estimate(
    room: &RoomDimensions,
    tile: &TileSpec,
    gap_mm: f64,
    pattern: InstallPattern,
) -> Result<CoverageResult> {
    estimate_with_box_size(room, tile, gap_mm, pattern, DEFAULT_TILES_PER_BOX)
}

/// Estimate tile requirements with an explicit tiles-per-box packaging
///
/// The raw count is the ceiling of room area over tile footprint; the wastage
/// multiplier is applied afterwards and the product rounded up again.
///
/// # Errors
///
/// As [`estimate`], plus [`crate::EstimateError::InvalidParameter`] when
/// `tiles_per_box` is zero.
pub fn estimate_with_box_size(
    room: &RoomDimensions,
    tile: &TileSpec,
    gap_mm: f64,
    pattern: InstallPattern,
    tiles_per_box: u64,
) -> Result<CoverageResult> {
    if !gap_mm.is_finite() || gap_mm < 0.0 {
        return Err(invalid_parameter(
            "gap_mm",
            &gap_mm,
            &"grout gap must be a non-negative number of millimeters",
        ));
    }
    if tiles_per_box == 0 {
        return Err(invalid_parameter(
            "tiles_per_box",
            &tiles_per_box,
            &"a box must hold at least one tile",
        ));
    }

    let room_area_mm2 = room.area_square_millimeters()?;
    let footprint_mm2 = tile.footprint_square_millimeters(gap_mm)?;

    let raw_count = (room_area_mm2 / footprint_mm2).ceil();
    let tiles_required = (raw_count * pattern.wastage_multiplier()).ceil() as u64;

    Ok(CoverageResult {
        tiles_required,
        total_area: room.area(),
        boxes_needed: tiles_required.div_ceil(tiles_per_box),
    })
}
