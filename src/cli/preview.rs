//! Preview command: render the plan to an SVG for inspection.

use crate::cli::common::{CliError, CliResult, ColorArgs, GridArgs};
use crate::config::Config;
use crate::planner::plan_grid;
use crate::render::{self, SvgRenderer};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render an SVG preview of the grid without the host application
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    color: ColorArgs,

    #[command(flatten)]
    grid: GridArgs,

    /// Output path for the SVG (defaults to color_grid_preview_[date].svg)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let grid = self.grid.apply(config.grid.to_grid_config());
        let color = self.color.resolve()?;

        let ops = plan_grid(&grid, color).map_err(|e| CliError::validation(e.to_string()))?;

        let mut svg = SvgRenderer::new(grid.canvas_size);
        render::execute(&mut svg, &ops)
            .map_err(|e| CliError::io(format!("Failed to render preview: {e}")))?;
        let document = svg.finish();

        let output_path = self.output_path();
        fs::write(&output_path, document)
            .map_err(|e| CliError::io(format!("Failed to write preview file: {e}")))?;

        println!("✓ Wrote preview to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn output_path(&self) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("color_grid_preview_{date}.svg"))
    }
}
