//! Drawing plan produced by the planner and consumed by renderers.

use crate::models::{Color, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a layer created by an earlier [`DrawOp::Label`].
///
/// Refs are assigned in label emission order, so a renderer that keeps its
/// created text layers in a list can resolve a ref by index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LayerRef(pub usize);

impl fmt::Display for LayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// One drawing operation against the target surface.
///
/// A plan is an ordered sequence of these; the order is part of the contract.
/// Fill order determines paint order, band order determines adjustment-layer
/// stacking, and the final `Group` refers back to layers created by earlier
/// `Label` ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Select `rect` and fill it with `color`.
    Fill {
        /// Region to fill
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Select `rect` and apply the pre-recorded adjustment-layer action.
    AdjustmentBand {
        /// Band region spanning the canvas on one axis
        rect: Rect,
    },
    /// Create a text layer with `text` anchored at `(x, y)`.
    Label {
        /// Identifier by which later ops reference the created layer
        layer: LayerRef,
        /// Label contents
        text: String,
        /// Horizontal anchor in canvas space
        x: f64,
        /// Vertical anchor in canvas space
        y: f64,
    },
    /// Create a named group and re-parent the referenced layers into it.
    Group {
        /// Layers to collect, in creation order
        layers: Vec<LayerRef>,
        /// Group name
        name: String,
    },
}

impl DrawOp {
    /// Short lowercase tag for summaries and counting.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Fill { .. } => "fill",
            Self::AdjustmentBand { .. } => "band",
            Self::Label { .. } => "label",
            Self::Group { .. } => "group",
        }
    }
}
