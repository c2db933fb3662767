//! Plan command: inspect the drawing sequence without rendering it.

use crate::cli::common::{CliError, CliResult, ColorArgs, GridArgs};
use crate::config::Config;
use crate::models::DrawOp;
use crate::planner::plan_grid;
use clap::Args;

/// Print the drawing plan for a grid, as a summary or as JSON
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    color: ColorArgs,

    #[command(flatten)]
    grid: GridArgs,

    /// Output the full op sequence as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let grid = self.grid.apply(config.grid.to_grid_config());
        let color = self.color.resolve()?;

        let ops = plan_grid(&grid, color).map_err(|e| CliError::validation(e.to_string()))?;

        if self.json {
            let json = serde_json::to_string_pretty(&ops)
                .map_err(|e| CliError::io(format!("Failed to serialize plan: {e}")))?;
            println!("{json}");
        } else {
            print_summary(&ops, grid.grid_size, grid.canvas_size, &color.to_string());
        }

        Ok(())
    }
}

/// Prints per-kind op counts and the total.
fn print_summary(ops: &[DrawOp], grid_size: u32, canvas_size: f64, color: &str) {
    let count = |kind: &str| ops.iter().filter(|op| op.kind() == kind).count();

    println!(
        "Plan: {grid_size}x{grid_size} grid of {color} on a {canvas_size}px canvas"
    );
    println!("  fill ops:   {}", count("fill"));
    println!("  band ops:   {}", count("band"));
    println!("  label ops:  {}", count("label"));
    println!("  group ops:  {}", count("group"));
    println!("  total:      {}", ops.len());
}
