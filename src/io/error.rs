//! Error types for estimation and pattern operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all estimation and pattern operations
#[derive(Debug)]
pub enum EstimateError {
    /// A required user input is missing, zero, negative, or not a number
    ///
    /// Distinct from a zero result: the estimator must never silently compute
    /// with a missing dimension and report a misleading zero tile count.
    MissingInformation {
        /// Name of the missing or invalid field
        field: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell index exceeds the grid's cell count
    CellOutOfBounds {
        /// The invalid flat cell index
        index: usize,
        /// Number of cells in the grid
        cell_count: usize,
    },

    /// Palette is shorter than the layout rule indexes into
    PaletteTooSmall {
        /// Name of the layout being applied
        layout: &'static str,
        /// Palette length the layout requires
        required: usize,
        /// Palette length actually provided
        provided: usize,
    },

    /// Failed to save an exported grid image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInformation { field } => {
                write!(f, "Missing information: '{field}' must be a positive number")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOutOfBounds { index, cell_count } => {
                write!(
                    f,
                    "Cell index {index} is out of bounds (grid has {cell_count} cells)"
                )
            }
            Self::PaletteTooSmall {
                layout,
                required,
                provided,
            } => {
                write!(
                    f,
                    "Layout '{layout}' needs at least {required} palette colors, got {provided}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for estimation results
pub type Result<T> = std::result::Result<T, EstimateError>;

impl From<image::ImageError> for EstimateError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for EstimateError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EstimateError {
    EstimateError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
