//! SVG preview renderer.
//!
//! Produces a standalone SVG of the planned grid so the layout can be
//! inspected without the host application. Adjustment bands are drawn as
//! translucent overlays; CMYK fills are approximated in RGB.

use crate::models::{Color, LayerRef, Rect};
use anyhow::Result;
use std::fmt::Write as _;

use super::Renderer;

/// Band overlay opacity in the preview.
const BAND_OPACITY: f64 = 0.15;

/// Accumulates a plan into an SVG document.
///
/// Feed it a plan through [`super::execute`], then call
/// [`SvgRenderer::finish`] for the complete document text.
#[derive(Debug)]
pub struct SvgRenderer {
    canvas_size: f64,
    fills: String,
    bands: String,
    labels: Vec<String>,
    group: Option<(String, Vec<LayerRef>)>,
}

impl SvgRenderer {
    /// Creates a renderer for a square canvas of the given edge length.
    #[must_use]
    pub fn new(canvas_size: f64) -> Self {
        Self {
            canvas_size,
            fills: String::new(),
            bands: String::new(),
            labels: Vec::new(),
            group: None,
        }
    }

    /// Returns the complete SVG document.
    #[must_use]
    pub fn finish(self) -> String {
        let size = self.canvas_size;
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        let _ = writeln!(out, r##"<rect width="{size}" height="{size}" fill="#FFFFFF"/>"##);
        out.push_str(&self.fills);
        out.push_str(&self.bands);

        match &self.group {
            Some((name, _refs)) => {
                let _ = writeln!(out, r#"<g data-name="{}">"#, xml_escape(name));
                for label in &self.labels {
                    out.push_str(label);
                }
                out.push_str("</g>\n");
            }
            None => {
                for label in &self.labels {
                    out.push_str(label);
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Renderer for SvgRenderer {
    fn fill(&mut self, rect: &Rect, color: &Color) -> Result<()> {
        let rgb = color.to_rgb_approx();
        let _ = writeln!(
            self.fills,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rgb.to_hex()
        );
        Ok(())
    }

    fn adjustment_band(&mut self, rect: &Rect) -> Result<()> {
        let _ = writeln!(
            self.bands,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#000000" fill-opacity="{BAND_OPACITY}"/>"##,
            rect.x, rect.y, rect.width, rect.height
        );
        Ok(())
    }

    fn label(&mut self, layer: LayerRef, text: &str, x: f64, y: f64) -> Result<()> {
        if layer.0 != self.labels.len() {
            anyhow::bail!(
                "label layer {layer} arrived out of order (expected layer#{})",
                self.labels.len()
            );
        }
        let font_size = self.canvas_size * 0.02;
        self.labels.push(format!(
            "<text x=\"{x}\" y=\"{y}\" font-size=\"{font_size}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            xml_escape(text)
        ));
        Ok(())
    }

    fn group(&mut self, layers: &[LayerRef], name: &str) -> Result<()> {
        for layer in layers {
            if layer.0 >= self.labels.len() {
                anyhow::bail!("group references unknown layer {layer}");
            }
        }
        self.group = Some((name.to_string(), layers.to_vec()));
        Ok(())
    }
}

/// Escapes text content for XML.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
