//! Fixed-size color grid with flat-index cell addressing
//!
//! The grid's dimensions are set at construction and constant for its lifetime;
//! every cell always holds exactly one palette color. Cells are addressed by a
//! flat index (`row * cols + col`) matching how a rendered grid numbers them.

use ndarray::Array2;

use crate::io::configuration::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, MAX_GRID_DIMENSION};
use crate::io::error::{EstimateError, Result, invalid_parameter};

/// Closed palette of swatch colors available to the pattern builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorToken {
    /// Off-white base glaze
    #[default]
    White,
    /// Warm sand
    Sand,
    /// Fired terracotta
    Terracotta,
    /// Muted sage green
    Sage,
    /// Deep navy blue
    Navy,
    /// Near-black charcoal
    Charcoal,
}

impl ColorToken {
    /// Every swatch in the palette, in display order
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Sand,
        Self::Terracotta,
        Self::Sage,
        Self::Navy,
        Self::Charcoal,
    ];

    /// RGBA value used when exporting the grid as an image
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::White => [250, 250, 247, 255],
            Self::Sand => [216, 194, 158, 255],
            Self::Terracotta => [188, 98, 66, 255],
            Self::Sage => [156, 175, 136, 255],
            Self::Navy => [31, 42, 68, 255],
            Self::Charcoal => [54, 54, 54, 255],
        }
    }

    /// Lowercase display name of the swatch
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Sand => "sand",
            Self::Terracotta => "terracotta",
            Self::Sage => "sage",
            Self::Navy => "navy",
            Self::Charcoal => "charcoal",
        }
    }
}

/// Fixed-size grid of swatch colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<ColorToken>,
}

impl Default for Grid {
    /// A default-sized grid filled with the default swatch
    fn default() -> Self {
        Self {
            cells: Array2::from_elem((DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS), ColorToken::default()),
        }
    }
}

impl Grid {
    /// Create a grid of the given dimensions filled with one color
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidParameter`] when either dimension is zero
    /// or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(rows: usize, cols: usize, fill: ColorToken) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("cols", cols)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("grid dimensions must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(Self {
            cells: Array2::from_elem((rows, cols), fill),
        })
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total cell count
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Color at a row/column position, if in bounds
    pub fn color_at(&self, row: usize, col: usize) -> Option<ColorToken> {
        self.cells.get([row, col]).copied()
    }

    /// Color at a flat cell index
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::CellOutOfBounds`] for an out-of-range index
    pub fn color_at_index(&self, index: usize) -> Result<ColorToken> {
        let position = self.position_of(index)?;
        Ok(self.cells.get(position).copied().unwrap_or_default())
    }

    /// Override one cell's color
    ///
    /// Drag painting is a sequence of these calls, one per cell entered.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::CellOutOfBounds`] for an out-of-range index
    pub fn paint_cell(&mut self, index: usize, color: ColorToken) -> Result<()> {
        let position = self.position_of(index)?;
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = color;
        }
        Ok(())
    }

    /// Reset every cell to one color
    pub fn clear(&mut self, color: ColorToken) {
        self.cells.fill(color);
    }

    /// Convert a flat index to a row/column pair, rejecting out-of-range indices
    fn position_of(&self, index: usize) -> Result<[usize; 2]> {
        if index >= self.cell_count() {
            return Err(EstimateError::CellOutOfBounds {
                index,
                cell_count: self.cell_count(),
            });
        }
        Ok([index / self.cols(), index % self.cols()])
    }
}
