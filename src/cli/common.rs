//! Shared CLI infrastructure: error type, exit codes, and the argument
//! groups reused by every planning command.

use crate::input::{self, ColorSpace};
use crate::models::{CmykColor, Color, GridConfig, RgbColor};
use clap::Args;
use std::fmt;
use std::io;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, mapped to distinct exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Bad user input: arguments, configuration, or planner preconditions
    Validation(String),
    /// Filesystem or stream failure
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Io(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Swatch color selection, shared by the planning commands.
///
/// When `--color` is omitted the command prompts for each channel on the
/// terminal, re-prompting until a value in range is entered.
#[derive(Debug, Clone, Args)]
pub struct ColorArgs {
    /// Color space for the swatch color
    #[arg(long, value_enum, default_value = "cmyk")]
    pub color_space: ColorSpace,

    /// Swatch color: "#RRGGBB" or "r,g,b" for RGB, "c,m,y,k" for CMYK
    /// (prompts interactively if omitted)
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,
}

impl ColorArgs {
    /// Resolves the color from the flag or interactive prompts.
    pub fn resolve(&self) -> CliResult<Color> {
        match &self.color {
            Some(literal) => parse_color(self.color_space, literal),
            None => {
                let stdin = io::stdin();
                let mut reader = stdin.lock();
                let mut writer = io::stdout();
                input::collect_color(&mut reader, &mut writer, self.color_space)
                    .map_err(|e| CliError::io(format!("Failed to collect color: {e}")))
            }
        }
    }
}

/// Parses a color literal for the given color space.
pub fn parse_color(space: ColorSpace, literal: &str) -> CliResult<Color> {
    match space {
        ColorSpace::Rgb => literal
            .parse::<RgbColor>()
            .map(Color::Rgb)
            .map_err(|e| CliError::validation(format!("Invalid RGB color '{literal}': {e}"))),
        ColorSpace::Cmyk => literal
            .parse::<CmykColor>()
            .map(Color::Cmyk)
            .map_err(|e| CliError::validation(format!("Invalid CMYK color '{literal}': {e}"))),
    }
}

/// Grid layout overrides, shared by the planning commands.
///
/// Anything left unset falls back to the stored configuration.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Number of swatch rows/columns
    #[arg(long, value_name = "N")]
    pub grid_size: Option<u32>,

    /// Swatch edge length in pixels
    #[arg(long, value_name = "PX")]
    pub box_size: Option<f64>,

    /// Gap between adjacent swatches in pixels
    #[arg(long, value_name = "PX")]
    pub gap_size: Option<f64>,

    /// Canvas edge length in pixels
    #[arg(long, value_name = "PX")]
    pub canvas_size: Option<f64>,

    /// Row/column index left free of adjustment bands
    #[arg(long, value_name = "INDEX", conflicts_with = "no_skip")]
    pub skip_index: Option<u32>,

    /// Apply adjustment bands to every row and column
    #[arg(long)]
    pub no_skip: bool,
}

impl GridArgs {
    /// Applies the overrides on top of the configured defaults.
    #[must_use]
    pub fn apply(&self, base: GridConfig) -> GridConfig {
        let mut grid = base;
        if let Some(grid_size) = self.grid_size {
            grid.grid_size = grid_size;
        }
        if let Some(box_size) = self.box_size {
            grid.box_size = box_size;
        }
        if let Some(gap_size) = self.gap_size {
            grid.gap_size = gap_size;
        }
        if let Some(canvas_size) = self.canvas_size {
            grid.canvas_size = canvas_size;
        }
        if self.no_skip {
            grid.band_skip_index = None;
        } else if let Some(skip) = self.skip_index {
            grid.band_skip_index = Some(skip);
        }
        grid
    }
}
