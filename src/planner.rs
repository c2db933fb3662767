//! Grid layout planning.
//!
//! Turns a [`GridConfig`] and a [`Color`] into an ordered sequence of
//! [`DrawOp`]s. Planning is pure computation: it touches no external
//! resource, and identical inputs always produce identical plans. A renderer
//! consumes the sequence strictly in order, because later ops depend on
//! layers created by earlier ones.

use crate::constants::LABEL_GROUP_NAME;
use crate::models::{Color, DrawOp, GridConfig, LayerRef, Rect};
use thiserror::Error;

/// Letters available for the alphabetic row/column labels.
const LABEL_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors raised by [`plan_grid`].
///
/// Both variants are terminal for the planning call; no partial plan is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Dimensions or color values violate the planner's preconditions.
    #[error("invalid grid configuration: {0}")]
    InvalidConfig(String),
    /// The grid has more rows than the alphabetic labeling scheme can name.
    #[error("grid size {grid_size} exceeds the {max} available label letters")]
    LabelAlphabetExhausted {
        /// The offending grid size
        grid_size: u32,
        /// Number of letters available
        max: usize,
    },
}

/// Plans the complete drawing sequence for one proof grid.
///
/// The returned plan is emitted in four stages, and the order within and
/// across stages is part of the contract:
///
/// 1. One `Fill` per cell, row-major (top-to-bottom, then left-to-right
///    within a row); this is the paint order.
/// 2. `AdjustmentBand`s, all row bands before all column bands, skipping
///    `band_skip_index` on each axis; this is the adjustment-layer stacking
///    order.
/// 3. Two `Label`s per row index: the numeric label on the right edge, then
///    the alphabetic label on the bottom edge, each centered on its band.
/// 4. A single `Group` collecting every label layer, always last.
///
/// # Errors
///
/// Returns [`PlanError::InvalidConfig`] for non-positive dimensions, a canvas
/// smaller than the grid extent, a skip index outside the grid, or color
/// components out of range; [`PlanError::LabelAlphabetExhausted`] when
/// `grid_size` exceeds the available letters.
pub fn plan_grid(config: &GridConfig, color: Color) -> Result<Vec<DrawOp>, PlanError> {
    validate(config, color)?;

    let n = config.grid_size;
    let stride = config.cell_stride();
    let mut ops = Vec::with_capacity(plan_len_upper_bound(config));

    // Stage 1: swatch fills, row-major
    for row in 0..n {
        for column in 0..n {
            let rect = Rect::square(
                f64::from(column) * stride,
                f64::from(row) * stride,
                config.box_size,
            );
            ops.push(DrawOp::Fill { rect, color });
        }
    }

    // Stage 2: adjustment bands, rows first
    for is_row in [true, false] {
        for i in 0..n {
            if config.band_skip_index == Some(i) {
                continue;
            }
            let offset = f64::from(i) * stride;
            let rect = if is_row {
                Rect::new(0.0, offset, config.canvas_size, config.box_size)
            } else {
                Rect::new(offset, 0.0, config.box_size, config.canvas_size)
            };
            ops.push(DrawOp::AdjustmentBand { rect });
        }
    }

    // Stage 3: labels, numeric on the right edge then alphabetic on the
    // bottom edge, centered on each band
    let outward = config.canvas_size - config.label_margin;
    let mut next_layer = 0;
    let mut label = |ops: &mut Vec<DrawOp>, text: String, x: f64, y: f64| {
        let layer = LayerRef(next_layer);
        next_layer += 1;
        ops.push(DrawOp::Label { layer, text, x, y });
        layer
    };

    let mut label_layers = Vec::with_capacity(2 * n as usize);
    for row in 0..n {
        let inward = f64::from(row) * stride + config.box_size / 2.0;
        label_layers.push(label(&mut ops, (row + 1).to_string(), outward, inward));
        let letter = char::from(LABEL_ALPHABET[row as usize]);
        label_layers.push(label(&mut ops, letter.to_string(), inward, outward));
    }

    // Stage 4: group every label layer
    ops.push(DrawOp::Group {
        layers: label_layers,
        name: LABEL_GROUP_NAME.to_string(),
    });

    Ok(ops)
}

/// Checks the planner preconditions, failing fast before any op is emitted.
fn validate(config: &GridConfig, color: Color) -> Result<(), PlanError> {
    let invalid = |message: String| Err(PlanError::InvalidConfig(message));

    if config.grid_size == 0 {
        return invalid("grid_size must be positive".to_string());
    }
    if !(config.box_size.is_finite() && config.box_size > 0.0) {
        return invalid(format!("box_size must be positive, got {}", config.box_size));
    }
    if !(config.gap_size.is_finite() && config.gap_size >= 0.0) {
        return invalid(format!(
            "gap_size must be non-negative, got {}",
            config.gap_size
        ));
    }
    if !config.canvas_size.is_finite() || config.canvas_size <= config.grid_extent() {
        return invalid(format!(
            "canvas_size {} does not exceed the grid extent {}",
            config.canvas_size,
            config.grid_extent()
        ));
    }
    if let Some(skip) = config.band_skip_index {
        if skip >= config.grid_size {
            return invalid(format!(
                "band_skip_index {skip} is outside the grid (size {})",
                config.grid_size
            ));
        }
    }
    if !color.in_range() {
        return invalid(format!("color components out of range: {color}"));
    }
    if config.grid_size as usize > LABEL_ALPHABET.len() {
        return Err(PlanError::LabelAlphabetExhausted {
            grid_size: config.grid_size,
            max: LABEL_ALPHABET.len(),
        });
    }

    Ok(())
}

/// Upper bound on the plan length, used to size the op vector.
fn plan_len_upper_bound(config: &GridConfig) -> usize {
    let n = config.grid_size as usize;
    n * n + 2 * n + 2 * n + 1
}
