//! Color values in the two color spaces the proofing workflow supports.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and from comma-separated
/// channel lists, plus serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use colorgrid::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let red = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let green = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let blue = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(red, green, blue))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    /// Parses either "#RRGGBB" hex or a "red,green,blue" channel list.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') || !s.contains(',') {
            return Self::from_hex(s);
        }

        let channels = parse_channel_list(s, &["red", "green", "blue"], 255)?;
        Ok(Self::new(channels[0], channels[1], channels[2]))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

/// CMYK color value with ink percentages.
///
/// Each component is a percentage (0-100). The `u8` representation can hold
/// values above 100, so range validation is exposed separately and re-checked
/// by the planner before a plan is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CmykColor {
    /// Cyan percentage (0-100)
    pub cyan: u8,
    /// Magenta percentage (0-100)
    pub magenta: u8,
    /// Yellow percentage (0-100)
    pub yellow: u8,
    /// Black percentage (0-100)
    pub black: u8,
}

impl CmykColor {
    /// Creates a new `CmykColor` from individual ink percentages.
    #[must_use]
    pub const fn new(cyan: u8, magenta: u8, yellow: u8, black: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }

    /// Returns true if every component is within 0-100.
    #[must_use]
    pub const fn in_range(&self) -> bool {
        self.cyan <= 100 && self.magenta <= 100 && self.yellow <= 100 && self.black <= 100
    }

    /// Approximates the color in RGB space for on-screen preview.
    ///
    /// Uses the naive uncalibrated conversion; good enough for a preview,
    /// not for print.
    #[must_use]
    pub fn to_rgb_approx(&self) -> RgbColor {
        let channel = |ink: u8| {
            let ink = f64::from(ink.min(100)) / 100.0;
            let key = f64::from(self.black.min(100)) / 100.0;
            (255.0 * (1.0 - ink) * (1.0 - key)).round() as u8
        };

        RgbColor::new(channel(self.cyan), channel(self.magenta), channel(self.yellow))
    }
}

impl FromStr for CmykColor {
    type Err = anyhow::Error;

    /// Parses a "cyan,magenta,yellow,black" percentage list.
    fn from_str(s: &str) -> Result<Self> {
        let components = parse_channel_list(s, &["cyan", "magenta", "yellow", "black"], 100)?;
        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C{} M{} Y{} K{}",
            self.cyan, self.magenta, self.yellow, self.black
        )
    }
}

/// A color in one of the two supported color spaces.
///
/// Exactly one variant is active; component ranges are enforced when the
/// value is collected and defensively re-checked by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Additive screen color, channels 0-255.
    Rgb(RgbColor),
    /// Subtractive print color, percentages 0-100.
    Cmyk(CmykColor),
}

impl Color {
    /// Returns true if every component is within its declared range.
    ///
    /// RGB channels are range-enforced by their type; only CMYK percentages
    /// can be out of range.
    #[must_use]
    pub const fn in_range(&self) -> bool {
        match self {
            Self::Rgb(_) => true,
            Self::Cmyk(cmyk) => cmyk.in_range(),
        }
    }

    /// The color approximated in RGB space, for preview rendering.
    #[must_use]
    pub fn to_rgb_approx(&self) -> RgbColor {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Cmyk(cmyk) => cmyk.to_rgb_approx(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => write!(f, "{rgb}"),
            Self::Cmyk(cmyk) => write!(f, "{cmyk}"),
        }
    }
}

/// Parses a comma-separated list of numeric components, one per name,
/// each within 0..=max.
fn parse_channel_list(s: &str, names: &[&str], max: u16) -> Result<Vec<u8>> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != names.len() {
        anyhow::bail!(
            "Expected {} comma-separated values ({}), got {}",
            names.len(),
            names.join(","),
            parts.len()
        );
    }

    let mut values = Vec::with_capacity(names.len());
    for (part, name) in parts.iter().zip(names) {
        let value: u16 = part
            .parse()
            .context(format!("Invalid {name} value '{part}'"))?;
        if value > max {
            anyhow::bail!("{name} value {value} is out of range (0-{max})");
        }
        values.push(value as u8);
    }

    Ok(values)
}
