//! ExtendScript generation for Adobe Photoshop.
//!
//! Renders a plan into a `.jsx` automation script that drives the host
//! document/layer API: polygon selections filled with a solid color,
//! pre-recorded adjustment-layer actions applied to row/column bands, text
//! layers collected into a named group, and an optional two-format batch
//! export at the end.

use crate::models::{CmykColor, Color, LayerRef, Rect, RgbColor};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::PathBuf;

use super::Renderer;

/// Host document color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentMode {
    /// `NewDocumentMode.RGB`
    Rgb,
    /// `NewDocumentMode.CMYK`
    Cmyk,
}

impl DocumentMode {
    /// The document mode matching a fill color's color space.
    #[must_use]
    pub const fn for_color(color: &Color) -> Self {
        match color {
            Color::Rgb(_) => Self::Rgb,
            Color::Cmyk(_) => Self::Cmyk,
        }
    }

    const fn host_constant(self) -> &'static str {
        match self {
            Self::Rgb => "NewDocumentMode.RGB",
            Self::Cmyk => "NewDocumentMode.CMYK",
        }
    }
}

/// Optional batch-export step appended after the grid is complete.
///
/// Saves the layered document in the host's native format first, then
/// flattens and saves a compressed raster copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Target directory for both files
    pub directory: PathBuf,
    /// File stem shared by both files
    pub base_name: String,
    /// JPEG quality on the host's 1-12 scale
    pub jpeg_quality: u8,
}

/// Script-level settings independent of the grid geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSettings {
    /// Name of the created document
    pub document_name: String,
    /// Square canvas edge length in pixels
    pub canvas_size: f64,
    /// Document resolution in pixels per inch
    pub resolution: f64,
    /// Host action set holding the pre-recorded actions
    pub action_set: String,
    /// Pre-recorded action that adds one adjustment layer to the selection
    pub adjustment_action: String,
    /// Pre-recorded action run once after the grid is complete, if any
    pub finishing_action: Option<String>,
    /// Batch export appended at the end of the script, if requested
    pub export: Option<ExportSettings>,
}

/// Accumulates a plan into ExtendScript source.
///
/// Feed it a plan through [`super::execute`], then call
/// [`PhotoshopScript::finish`] for the complete script text.
#[derive(Debug)]
pub struct PhotoshopScript {
    settings: ScriptSettings,
    mode: DocumentMode,
    body: String,
    /// Fill colors already declared in the script, with their variable names
    color_vars: Vec<(Color, String)>,
    labels_created: usize,
}

impl PhotoshopScript {
    /// Creates a renderer producing a script for the given document mode.
    #[must_use]
    pub fn new(settings: ScriptSettings, mode: DocumentMode) -> Self {
        Self {
            settings,
            mode,
            body: String::new(),
            color_vars: Vec::new(),
            labels_created: 0,
        }
    }

    /// Returns the complete script source.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out = String::new();

        out.push_str("#target photoshop\n\n");
        out.push_str(HELPER_FUNCTIONS);
        out.push('\n');

        let _ = writeln!(
            out,
            "var doc = app.documents.add({size}, {size}, {res}, {name}, {mode}, DocumentFill.TRANSPARENT);",
            size = num(self.settings.canvas_size),
            res = num(self.settings.resolution),
            name = js_quote(&self.settings.document_name),
            mode = self.mode.host_constant(),
        );
        out.push_str("var textLayers = [];\n\n");

        out.push_str(&self.body);

        if let Some(action) = &self.settings.finishing_action {
            let _ = writeln!(
                out,
                "\napp.doAction({}, {});",
                js_quote(action),
                js_quote(&self.settings.action_set)
            );
        }

        if let Some(export) = &self.settings.export {
            out.push('\n');
            out.push_str(&export_block(export));
        }

        out
    }

    /// Variable name for a fill color, declaring it on first use.
    fn color_var(&mut self, color: &Color) -> String {
        if let Some((_, name)) = self.color_vars.iter().find(|(c, _)| c == color) {
            return name.clone();
        }

        let name = format!("fillColor{}", self.color_vars.len() + 1);
        match color {
            Color::Rgb(RgbColor { red, green, blue }) => {
                let _ = writeln!(self.body, "var {name} = new RGBColor();");
                let _ = writeln!(self.body, "{name}.red = {red};");
                let _ = writeln!(self.body, "{name}.green = {green};");
                let _ = writeln!(self.body, "{name}.blue = {blue};");
            }
            Color::Cmyk(CmykColor {
                cyan,
                magenta,
                yellow,
                black,
            }) => {
                let _ = writeln!(self.body, "var {name} = new CMYKColor();");
                let _ = writeln!(self.body, "{name}.cyan = {cyan};");
                let _ = writeln!(self.body, "{name}.magenta = {magenta};");
                let _ = writeln!(self.body, "{name}.yellow = {yellow};");
                let _ = writeln!(self.body, "{name}.black = {black};");
            }
        }
        self.color_vars.push((*color, name.clone()));
        name
    }
}

impl Renderer for PhotoshopScript {
    fn fill(&mut self, rect: &Rect, color: &Color) -> Result<()> {
        let var = self.color_var(color);
        let _ = writeln!(self.body, "drawSquare(doc, {var}, {});", corners(rect));
        Ok(())
    }

    fn adjustment_band(&mut self, rect: &Rect) -> Result<()> {
        let _ = writeln!(
            self.body,
            "addAdjustmentBand(doc, {}, {}, {});",
            corners(rect),
            js_quote(&self.settings.adjustment_action),
            js_quote(&self.settings.action_set)
        );
        Ok(())
    }

    fn label(&mut self, layer: LayerRef, text: &str, x: f64, y: f64) -> Result<()> {
        if layer.0 != self.labels_created {
            anyhow::bail!(
                "label layer {layer} arrived out of order (expected layer#{})",
                self.labels_created
            );
        }
        self.labels_created += 1;
        let _ = writeln!(
            self.body,
            "textLayers.push(addTextLayer(doc, {}, {}, {}));",
            js_quote(text),
            num(x),
            num(y)
        );
        Ok(())
    }

    fn group(&mut self, layers: &[LayerRef], name: &str) -> Result<()> {
        let all_in_order = layers.len() == self.labels_created
            && layers.iter().enumerate().all(|(i, l)| l.0 == i);

        let array = if all_in_order {
            "textLayers".to_string()
        } else {
            let refs: Vec<String> = layers
                .iter()
                .map(|layer| format!("textLayers[{}]", layer.0))
                .collect();
            format!("[{}]", refs.join(", "))
        };

        let _ = writeln!(self.body, "groupLayers(doc, {array}, {});", js_quote(name));
        Ok(())
    }
}

/// Helper functions shared by every generated script.
const HELPER_FUNCTIONS: &str = r#"function drawSquare(doc, color, shapeRef) {
    doc.selection.select(shapeRef);
    doc.selection.fill(color);
    doc.selection.deselect();
}

function addAdjustmentBand(doc, shapeRef, actionName, actionSet) {
    doc.selection.select(shapeRef);
    app.doAction(actionName, actionSet);
    doc.selection.deselect();
}

function addTextLayer(doc, text, posX, posY) {
    var textLayer = doc.artLayers.add();
    textLayer.kind = LayerKind.TEXT;
    var textItem = textLayer.textItem;
    textItem.contents = text;
    textItem.position = [posX, posY];
    return textLayer;
}

function groupLayers(doc, layers, name) {
    var group = doc.layerSets.add();
    group.name = name;
    for (var i = 0; i < layers.length; i++) {
        layers[i].move(group, ElementPlacement.INSIDE);
    }
}
"#;

/// The two-format export epilogue: layered native save, flatten, raster save.
fn export_block(export: &ExportSettings) -> String {
    let dir = export.directory.to_string_lossy().replace('\\', "/");
    let mut out = String::new();

    let _ = writeln!(out, "var exportFolder = new Folder({});", js_quote(&dir));
    out.push_str("if (!exportFolder.exists) {\n    exportFolder.create();\n}\n");
    let _ = writeln!(
        out,
        "var psdFile = new File(exportFolder.fullName + {});",
        js_quote(&format!("/{}.psd", export.base_name))
    );
    out.push_str("doc.saveAs(psdFile);\n");
    out.push_str("doc.flatten();\n");
    out.push_str("var jpegOptions = new JPEGSaveOptions();\n");
    let _ = writeln!(out, "jpegOptions.quality = {};", export.jpeg_quality);
    let _ = writeln!(
        out,
        "var jpegFile = new File(exportFolder.fullName + {});",
        js_quote(&format!("/{}.jpg", export.base_name))
    );
    out.push_str("doc.saveAs(jpegFile, jpegOptions, true);\n");

    out
}

/// Formats a rectangle as the host polygon-selection array literal.
fn corners(rect: &Rect) -> String {
    let pts = rect.corners();
    let formatted: Vec<String> = pts
        .iter()
        .map(|[x, y]| format!("[{}, {}]", num(*x), num(*y)))
        .collect();
    format!("[{}]", formatted.join(", "))
}

/// Formats a coordinate; integral values print without a fractional part.
fn num(value: f64) -> String {
    format!("{value}")
}

/// Quotes a string as a JavaScript double-quoted literal.
fn js_quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
