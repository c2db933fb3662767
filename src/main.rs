//! Color Grid - plan color-variation proof grids and script them for
//! desktop image editors.
//!
//! The planner lays out an n-by-n grid of colored swatches with periodic
//! adjustment bands and row/column labels; the renderers turn the plan into
//! a Photoshop automation script or an SVG preview.

use clap::{Parser, Subcommand};
use colorgrid::cli::{ConfigArgs, GenerateArgs, PlanArgs, PreviewArgs};

/// Color Grid - color proof grid planner and script generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a Photoshop automation script for a color proof grid
    Generate(GenerateArgs),
    /// Print the drawing plan for a grid, as a summary or as JSON
    Plan(PlanArgs),
    /// Render an SVG preview of the grid without the host application
    Preview(PreviewArgs),
    /// Manage the stored configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => args.execute(),
        Command::Plan(args) => args.execute(),
        Command::Preview(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}
