//! Interactive color collection.
//!
//! Prompts for one channel at a time and re-prompts until a value inside the
//! declared range is obtained, so the planner always receives a fully
//! validated [`Color`]. Generic over reader/writer so tests can drive the
//! prompts with in-memory buffers.

// Parsed values are range-checked before the narrowing cast
#![allow(clippy::cast_possible_truncation)]

use crate::models::{CmykColor, Color, RgbColor};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Color space the user picks before entering channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorSpace {
    /// Red/green/blue channels, 0-255
    Rgb,
    /// Cyan/magenta/yellow/black percentages, 0-100
    Cmyk,
}

/// Collects a color interactively, one channel prompt at a time.
///
/// # Errors
///
/// Fails only when the input stream ends or an I/O error occurs; invalid
/// values are handled by re-prompting, never by returning an error.
pub fn collect_color<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    space: ColorSpace,
) -> Result<Color> {
    match space {
        ColorSpace::Rgb => {
            let red = prompt_component(reader, writer, "Red", 255)?;
            let green = prompt_component(reader, writer, "Green", 255)?;
            let blue = prompt_component(reader, writer, "Blue", 255)?;
            Ok(Color::Rgb(RgbColor::new(red, green, blue)))
        }
        ColorSpace::Cmyk => {
            let cyan = prompt_component(reader, writer, "Cyan", 100)?;
            let magenta = prompt_component(reader, writer, "Magenta", 100)?;
            let yellow = prompt_component(reader, writer, "Yellow", 100)?;
            let black = prompt_component(reader, writer, "Black", 100)?;
            Ok(Color::Cmyk(CmykColor::new(cyan, magenta, yellow, black)))
        }
    }
}

/// Prompts for one channel value, looping until it parses and is in range.
fn prompt_component<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    name: &str,
    max: u16,
) -> Result<u8> {
    loop {
        write!(writer, "Enter {name} Value (0-{max}): ")
            .and_then(|()| writer.flush())
            .context("Failed to write prompt")?;

        let mut line = String::new();
        let bytes = reader
            .read_line(&mut line)
            .context(format!("Failed to read {name} value"))?;
        if bytes == 0 {
            anyhow::bail!("Input ended while waiting for {name} value");
        }

        match line.trim().parse::<u16>() {
            Ok(value) if value <= max => return Ok(value as u8),
            _ => {
                writeln!(writer, "Please enter a valid {name} value (0-{max}).")
                    .context("Failed to write prompt")?;
            }
        }
    }
}
