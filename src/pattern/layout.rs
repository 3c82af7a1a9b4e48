//! Named deterministic layout rules
//!
//! Each layout is a pure function of cell position, so re-applying the same
//! layout to the same grid size with the same palette always yields the same
//! result. The diagonal and herringbone rules are modulo-arithmetic stagger
//! approximations rather than true geometric tile-cut layouts.

use crate::io::error::{EstimateError, Result};
use crate::pattern::grid::{ColorToken, Grid};

/// Position-based fill rule mapping grid row/column to a palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Alternating colors on every anti-diagonal
    Checkerboard,
    /// Two-color runs that swap assignment by row parity
    Brick,
    /// Stripes on every third anti-diagonal
    Diagonal,
    /// Staggered accents offset between even and odd rows
    Herringbone,
}

impl Layout {
    /// Every layout, in display order
    pub const ALL: [Self; 4] = [
        Self::Checkerboard,
        Self::Brick,
        Self::Diagonal,
        Self::Herringbone,
    ];

    /// Lowercase display name of the layout
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkerboard => "checkerboard",
            Self::Brick => "brick",
            Self::Diagonal => "diagonal",
            Self::Herringbone => "herringbone",
        }
    }

    /// Minimum palette length the rule indexes into
    pub const fn palette_required(self) -> usize {
        match self {
            Self::Brick => 3,
            Self::Checkerboard | Self::Diagonal | Self::Herringbone => 2,
        }
    }

    /// Palette slot for the cell at a zero-indexed row/column position
    pub const fn palette_slot(self, row: usize, col: usize) -> usize {
        match self {
            Self::Checkerboard => {
                if (row + col) % 2 == 0 { 1 } else { 0 }
            }
            Self::Brick => match (row % 2, col % 2) {
                (0, 0) | (1, 1) => 1,
                _ => 2,
            },
            Self::Diagonal => {
                if (row + col) % 3 == 0 { 1 } else { 0 }
            }
            Self::Herringbone => {
                if (row % 2 == 0 && col % 3 == 0) || (row % 2 == 1 && col % 3 == 1) {
                    1
                } else {
                    0
                }
            }
        }
    }
}

/// Fill every cell of the grid according to a named layout rule
///
/// # Errors
///
/// Returns [`EstimateError::PaletteTooSmall`] when the palette is shorter than
/// the layout's required length
pub fn apply_layout(grid: &mut Grid, layout: Layout, palette: &[ColorToken]) -> Result<()> {
    if palette.len() < layout.palette_required() {
        return Err(EstimateError::PaletteTooSmall {
            layout: layout.name(),
            required: layout.palette_required(),
            provided: palette.len(),
        });
    }

    let cols = grid.cols();
    for index in 0..grid.cell_count() {
        let slot = layout.palette_slot(index / cols, index % cols);
        let color = palette.get(slot).copied().unwrap_or_default();
        grid.paint_cell(index, color)?;
    }
    Ok(())
}
