//! Application-wide constants.
//!
//! This module defines constants used throughout the application, including
//! the application name and the grid geometry defaults inherited from the
//! original proofing workflow.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Color Grid";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "colorgrid";

/// Default canvas edge length in pixels (square document).
pub const DEFAULT_CANVAS_SIZE: f64 = 7140.0;

/// Default number of swatch rows/columns.
pub const DEFAULT_GRID_SIZE: u32 = 15;

/// Default swatch edge length in pixels.
pub const DEFAULT_BOX_SIZE: f64 = 450.0;

/// Default gap between adjacent swatches in pixels.
pub const DEFAULT_GAP_SIZE: f64 = 20.0;

/// Default row/column index left free of adjustment bands.
pub const DEFAULT_BAND_SKIP_INDEX: u32 = 7;

/// Default distance from the canvas edge to the label anchor, in pixels.
pub const DEFAULT_LABEL_MARGIN: f64 = 55.0;

/// Name of the layer group that collects all label layers.
pub const LABEL_GROUP_NAME: &str = "Text Layers";

/// Default name of the generated document.
pub const DEFAULT_DOCUMENT_NAME: &str = "Color Variations";

/// Default document resolution in pixels per inch.
pub const DEFAULT_RESOLUTION: f64 = 300.0;

/// Name of the host action set holding the pre-recorded actions.
pub const DEFAULT_ACTION_SET: &str = "MakeColorGrid";

/// Name of the pre-recorded action that adds one adjustment layer.
pub const DEFAULT_ADJUSTMENT_ACTION: &str = "AddAdjustmentLayer";

/// Name of the pre-recorded action run once after the grid is complete.
pub const DEFAULT_FINISHING_ACTION: &str = "SetValues";
