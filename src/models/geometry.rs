//! Canvas-space geometry primitives.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas coordinates.
///
/// The origin is the top-left corner; `y` grows downward, matching the host
/// document coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a square of the given side length.
    #[must_use]
    pub const fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// The four corner points in host polygon-selection drawing order:
    /// top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.x, self.y],
            [self.x + self.width, self.y],
            [self.x + self.width, self.y + self.height],
            [self.x, self.y + self.height],
        ]
    }

    /// Right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
