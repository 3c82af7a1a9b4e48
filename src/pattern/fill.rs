//! Randomized fills and drag-paint batches

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::pattern::grid::{ColorToken, Grid};

/// Seeded random selector for reproducible swatch choices
///
/// Callers inject the selector rather than relying on a global generator, so a
/// fixed seed replays the same randomized fill.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly choose an index below `count`
    pub fn uniform_choice(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        self.rng.random_range(0..count)
    }
}

/// Assign every cell an independently, uniformly chosen palette color
///
/// # Errors
///
/// Returns [`crate::EstimateError::InvalidParameter`] when the palette is empty
pub fn randomize(
    grid: &mut Grid,
    palette: &[ColorToken],
    selector: &mut RandomSelector,
) -> Result<()> {
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &"empty",
            &"a randomized fill needs at least one color",
        ));
    }

    for index in 0..grid.cell_count() {
        let choice = selector.uniform_choice(palette.len());
        let color = palette.get(choice).copied().unwrap_or_default();
        grid.paint_cell(index, color)?;
    }
    Ok(())
}

/// Paint a sequence of cells with one color, as a drag gesture does
///
/// # Errors
///
/// Returns [`crate::EstimateError::CellOutOfBounds`] at the first out-of-range
/// index; cells before it are already painted
pub fn paint_run(
    grid: &mut Grid,
    indices: impl IntoIterator<Item = usize>,
    color: ColorToken,
) -> Result<()> {
    for index in indices {
        grid.paint_cell(index, color)?;
    }
    Ok(())
}
