//! Generate command: plan a grid and write the host automation script.

use crate::cli::common::{CliError, CliResult, ColorArgs, GridArgs};
use crate::config::Config;
use crate::planner::plan_grid;
use crate::render::photoshop::{DocumentMode, ScriptSettings};
use crate::render::{self, ExportSettings, PhotoshopScript};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate a Photoshop automation script for a color proof grid
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    color: ColorArgs,

    #[command(flatten)]
    grid: GridArgs,

    /// Output path for the script (defaults to [document]_[date].jsx)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Document name shown in the host application
    #[arg(long, value_name = "NAME")]
    pub title: Option<String>,

    /// Append a batch-export step saving into this directory
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// JPEG quality (1-12) for the exported raster copy
    #[arg(long, value_name = "QUALITY", default_value_t = 10)]
    pub jpeg_quality: u8,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if !(1..=12).contains(&self.jpeg_quality) {
            return Err(CliError::validation(format!(
                "Invalid JPEG quality {}. Must be 1-12",
                self.jpeg_quality
            )));
        }

        let config = Config::load().unwrap_or_default();
        let grid = self.grid.apply(config.grid.to_grid_config());
        let color = self.color.resolve()?;

        let ops = plan_grid(&grid, color).map_err(|e| CliError::validation(e.to_string()))?;

        let document_name = self
            .title
            .clone()
            .unwrap_or_else(|| config.script.document_name.clone());

        let export = self.export_dir.as_ref().map(|dir| ExportSettings {
            directory: dir.clone(),
            base_name: slugify(&document_name),
            jpeg_quality: self.jpeg_quality,
        });

        let settings = ScriptSettings {
            document_name: document_name.clone(),
            canvas_size: grid.canvas_size,
            resolution: config.script.resolution,
            action_set: config.script.action_set.clone(),
            adjustment_action: config.script.adjustment_action.clone(),
            finishing_action: config.script.finishing_action.clone(),
            export,
        };

        let mut script = PhotoshopScript::new(settings, DocumentMode::for_color(&color));
        render::execute(&mut script, &ops)
            .map_err(|e| CliError::io(format!("Failed to render script: {e}")))?;
        let source = script.finish();

        let output_path = self.output_path(&document_name);
        fs::write(&output_path, source)
            .map_err(|e| CliError::io(format!("Failed to write script file: {e}")))?;

        println!(
            "✓ Wrote {} ops ({}x{} grid, {}) to: {}",
            ops.len(),
            grid.grid_size,
            grid.grid_size,
            color,
            output_path.display()
        );

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn output_path(&self, document_name: &str) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!("{}_{}.jsx", slugify(document_name), date))
    }
}

/// Lowercases a document name into a file stem.
fn slugify(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}
