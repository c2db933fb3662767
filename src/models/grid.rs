//! Grid layout parameters.

use crate::constants::{
    DEFAULT_BAND_SKIP_INDEX, DEFAULT_BOX_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_GAP_SIZE,
    DEFAULT_GRID_SIZE, DEFAULT_LABEL_MARGIN,
};
use serde::{Deserialize, Serialize};

/// Immutable layout parameters for one proof grid.
///
/// Constructed once per run (from configuration plus command-line overrides)
/// and handed to the planner; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Canvas edge length in pixels (the document is square). Must exceed
    /// the grid extent `grid_size * (box_size + gap_size) - gap_size`.
    pub canvas_size: f64,
    /// Number of swatch rows and columns.
    pub grid_size: u32,
    /// Swatch edge length in pixels.
    pub box_size: f64,
    /// Gap between adjacent swatches in pixels.
    pub gap_size: f64,
    /// Row/column index excluded from adjustment bands on both axes, if any.
    pub band_skip_index: Option<u32>,
    /// Distance from the canvas edge to the label anchor, in pixels.
    pub label_margin: f64,
}

impl GridConfig {
    /// Distance from one swatch origin to the next.
    #[must_use]
    pub fn cell_stride(&self) -> f64 {
        self.box_size + self.gap_size
    }

    /// Total span of the grid along one axis, trailing gap excluded.
    #[must_use]
    pub fn grid_extent(&self) -> f64 {
        if self.grid_size == 0 {
            return 0.0;
        }
        f64::from(self.grid_size) * self.cell_stride() - self.gap_size
    }
}

impl Default for GridConfig {
    /// The layout used by the original proofing documents: a 15x15 grid of
    /// 450px swatches with 20px gaps on a 7140px canvas, row/column 7 left
    /// free of adjustment bands.
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            grid_size: DEFAULT_GRID_SIZE,
            box_size: DEFAULT_BOX_SIZE,
            gap_size: DEFAULT_GAP_SIZE,
            band_skip_index: Some(DEFAULT_BAND_SKIP_INDEX),
            label_margin: DEFAULT_LABEL_MARGIN,
        }
    }
}
