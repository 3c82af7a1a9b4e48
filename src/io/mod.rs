//! Input/output operations and error handling

/// Command-line interface for estimation and pattern export
pub mod cli;
/// Default values and safety limits
pub mod configuration;
/// Error types for estimation and pattern operations
pub mod error;
/// PNG export of pattern grids
pub mod image;
