//! Measurement units and room dimension handling
//!
//! Rooms are entered in feet or meters and converted to millimeters before any
//! footprint arithmetic, so the estimator works in a single unit throughout.

use crate::io::configuration::{MM_PER_FOOT, MM_PER_METER};
use crate::io::error::{EstimateError, Result};

/// Supported room measurement units
///
/// Both conversion factors are exact; no other units are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Imperial feet (1 ft = 304.8 mm)
    Feet,
    /// Metric meters (1 m = 1000 mm)
    Meters,
}

impl LengthUnit {
    /// Convert a value measured in this unit to millimeters
    pub const fn to_millimeters(self, value: f64) -> f64 {
        match self {
            Self::Feet => value * MM_PER_FOOT,
            Self::Meters => value * MM_PER_METER,
        }
    }

    /// Lowercase display name of the unit
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feet => "feet",
            Self::Meters => "meters",
        }
    }
}

/// User-entered room geometry
///
/// Values may be fractional and are validated at estimation time rather than
/// at construction, mirroring how the inputs arrive from a form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDimensions {
    /// Room length in `unit`
    pub length: f64,
    /// Room width in `unit`
    pub width: f64,
    /// Unit both dimensions are measured in
    pub unit: LengthUnit,
}

impl RoomDimensions {
    /// Create room dimensions without validating them
    pub const fn new(length: f64, width: f64, unit: LengthUnit) -> Self {
        Self {
            length,
            width,
            unit,
        }
    }

    /// Room area in the original input unit, for display only
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Room area in square millimeters
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::MissingInformation`] when either dimension is
    /// missing, zero, negative, or not a finite number.
    pub fn area_square_millimeters(&self) -> Result<f64> {
        let length_mm = self.unit.to_millimeters(require_positive("length", self.length)?);
        let width_mm = self.unit.to_millimeters(require_positive("width", self.width)?);
        Ok(length_mm * width_mm)
    }
}

/// Reject missing, zero, negative, or non-finite user input for a named field
///
/// # Errors
///
/// Returns [`EstimateError::MissingInformation`] naming the offending field
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::MissingInformation { field })
    }
}
