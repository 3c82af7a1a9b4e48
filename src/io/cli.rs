//! Command-line interface for coverage estimation and pattern fill export

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::estimate::coverage::{InstallPattern, TileSpec, estimate_with_box_size};
use crate::estimate::units::{LengthUnit, RoomDimensions};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_GROUT_GAP_MM, DEFAULT_SEED,
    DEFAULT_TILES_PER_BOX,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::pattern::fill::{RandomSelector, randomize};
use crate::pattern::grid::{ColorToken, Grid};
use crate::pattern::layout::{Layout, apply_layout};

#[derive(Parser)]
#[command(name = "tileplan")]
#[command(
    author,
    version,
    about = "Estimate tile coverage and generate pattern fills"
)]
/// Command-line arguments for the tile planning tool
pub struct Cli {
    /// Selected subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Estimate tiles required for a room, including wastage and boxes
    Estimate(EstimateArgs),
    /// Fill a color grid with a named or randomized pattern and export it as PNG
    Pattern(PatternArgs),
}

/// Arguments for the coverage estimator
#[derive(Args)]
pub struct EstimateArgs {
    /// Room length in the selected unit
    #[arg(short, long)]
    pub length: f64,

    /// Room width in the selected unit
    #[arg(short, long)]
    pub width: f64,

    /// Unit the room is measured in
    #[arg(short, long, value_enum, default_value_t = UnitArg::Feet)]
    pub unit: UnitArg,

    /// Tile size in millimeters, either one edge (600) or two (600x1200)
    #[arg(short, long, value_parser = parse_tile_spec)]
    pub tile: TileSpec,

    /// Grout joint width in millimeters
    #[arg(short, long, default_value_t = DEFAULT_GROUT_GAP_MM)]
    pub gap: f64,

    /// Installation pattern, which sets the wastage allowance
    #[arg(short, long, value_enum, default_value_t = PatternArg::Standard)]
    pub pattern: PatternArg,

    /// Tiles packed per box
    #[arg(short = 'b', long, default_value_t = DEFAULT_TILES_PER_BOX)]
    pub tiles_per_box: u64,
}

/// Arguments for the pattern builder
#[derive(Args)]
pub struct PatternArgs {
    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Named layout rule to apply
    #[arg(short, long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Fill the grid with uniformly random swatches instead of a layout
    #[arg(short, long, conflicts_with = "layout")]
    pub random: bool,

    /// Random seed for reproducible randomized fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Comma-separated palette the fill draws from
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [SwatchArg::White, SwatchArg::Navy, SwatchArg::Terracotta]
    )]
    pub palette: Vec<SwatchArg>,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Edge length in pixels of one exported cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u32,
}

/// Room measurement unit as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// Imperial feet
    Feet,
    /// Metric meters
    Meters,
}

impl UnitArg {
    /// Corresponding core unit
    pub const fn into_unit(self) -> LengthUnit {
        match self {
            Self::Feet => LengthUnit::Feet,
            Self::Meters => LengthUnit::Meters,
        }
    }
}

/// Installation pattern as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    /// Grid-aligned install
    Standard,
    /// 45-degree install
    Diagonal,
    /// Herringbone install
    Herringbone,
}

impl PatternArg {
    /// Corresponding core pattern
    pub const fn into_pattern(self) -> InstallPattern {
        match self {
            Self::Standard => InstallPattern::Standard,
            Self::Diagonal => InstallPattern::Diagonal,
            Self::Herringbone => InstallPattern::Herringbone,
        }
    }
}

/// Layout rule as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Alternating colors on every anti-diagonal
    Checkerboard,
    /// Two-color runs swapping by row parity
    Brick,
    /// Stripes on every third anti-diagonal
    Diagonal,
    /// Staggered accents offset between rows
    Herringbone,
}

impl LayoutArg {
    /// Corresponding core layout
    pub const fn into_layout(self) -> Layout {
        match self {
            Self::Checkerboard => Layout::Checkerboard,
            Self::Brick => Layout::Brick,
            Self::Diagonal => Layout::Diagonal,
            Self::Herringbone => Layout::Herringbone,
        }
    }
}

/// Palette swatch as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwatchArg {
    /// Off-white base glaze
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

impl SwatchArg {
    /// Corresponding core swatch
    pub const fn into_color(self) -> ColorToken {
        match self {
            Self::White => ColorToken::White,
            Self::Sand => ColorToken::Sand,
            Self::Terracotta => ColorToken::Terracotta,
            Self::Sage => ColorToken::Sage,
            Self::Navy => ColorToken::Navy,
            Self::Charcoal => ColorToken::Charcoal,
        }
    }
}

/// Parse a tile specification of the form `600` or `600x1200`
///
/// # Errors
///
/// Returns a message naming the unparseable edge
pub fn parse_tile_spec(raw: &str) -> std::result::Result<TileSpec, String> {
    fn parse_edge(part: &str) -> std::result::Result<f64, String> {
        let trimmed = part.trim();
        let edge: f64 = trimmed
            .parse()
            .map_err(|_| format!("invalid tile edge '{trimmed}'"))?;
        if edge.is_finite() && edge > 0.0 {
            Ok(edge)
        } else {
            Err(format!("tile edge '{trimmed}' must be positive"))
        }
    }

    match raw.split_once(['x', 'X']) {
        Some((first, second)) => Ok(TileSpec::Rectangular(
            parse_edge(first)?,
            parse_edge(second)?,
        )),
        None => Ok(TileSpec::Square(parse_edge(raw)?)),
    }
}

/// Execute the parsed command
///
/// # Errors
///
/// Returns an error if input validation or image export fails
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Estimate(args) => run_estimate(args),
        Command::Pattern(args) => run_pattern(args),
    }
}

// Allow print for reporting results to the user
#[allow(clippy::print_stdout)]
fn run_estimate(args: &EstimateArgs) -> Result<()> {
    let unit = args.unit.into_unit();
    let room = RoomDimensions::new(args.length, args.width, unit);
    let result = estimate_with_box_size(
        &room,
        &args.tile,
        args.gap,
        args.pattern.into_pattern(),
        args.tiles_per_box,
    )?;

    println!("Tiles required: {}", result.tiles_required);
    println!(
        "Covered area: {:.2} square {}",
        result.total_area,
        unit.name()
    );
    println!("Boxes needed: {}", result.boxes_needed);
    Ok(())
}

// Allow print for reporting the export location to the user
#[allow(clippy::print_stdout)]
fn run_pattern(args: &PatternArgs) -> Result<()> {
    let mut grid = Grid::new(args.rows, args.cols, ColorToken::default())?;
    let palette: Vec<ColorToken> = args
        .palette
        .iter()
        .map(|swatch| swatch.into_color())
        .collect();

    if let Some(layout) = args.layout {
        apply_layout(&mut grid, layout.into_layout(), &palette)?;
    } else if args.random {
        let mut selector = RandomSelector::new(args.seed);
        randomize(&mut grid, &palette, &mut selector)?;
    }

    export_grid_as_png(&grid, args.cell_size, &args.output)?;
    println!("Pattern written to {}", args.output.display());
    Ok(())
}
