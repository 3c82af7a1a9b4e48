//! Color grid management and named layout fills
//!
//! This module contains pattern-builder functionality including:
//! - Fixed-size color grid with flat-index cell addressing
//! - Named deterministic layout rules
//! - Seeded randomized fills and drag-paint batches

/// Randomized fills and drag-paint batches
pub mod fill;
/// Fixed-size color grid and the swatch palette
pub mod grid;
/// Named deterministic layout rules
pub mod layout;

pub use fill::{RandomSelector, paint_run, randomize};
pub use grid::{ColorToken, Grid};
pub use layout::{Layout, apply_layout};
