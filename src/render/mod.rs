//! Plan renderers.
//!
//! A renderer consumes a drawing plan strictly in sequence order and turns
//! it into a concrete artifact: an ExtendScript automation script for the
//! host image editor, or an SVG preview for inspection without the host.

pub mod photoshop;
pub mod svg;

pub use photoshop::{ExportSettings, PhotoshopScript};
pub use svg::SvgRenderer;

use crate::models::{Color, DrawOp, LayerRef, Rect};
use anyhow::Result;

/// The narrow interface a drawing surface exposes to a plan.
///
/// One method per [`DrawOp`] variant. Implementations may assume ops arrive
/// in plan order: every `LayerRef` passed to [`Renderer::group`] names a
/// layer created by an earlier [`Renderer::label`] call.
pub trait Renderer {
    /// Fills `rect` with `color`.
    fn fill(&mut self, rect: &Rect, color: &Color) -> Result<()>;

    /// Applies the periodic adjustment to `rect`.
    fn adjustment_band(&mut self, rect: &Rect) -> Result<()>;

    /// Creates a text layer identified by `layer` at `(x, y)`.
    fn label(&mut self, layer: LayerRef, text: &str, x: f64, y: f64) -> Result<()>;

    /// Collects the referenced layers into a named group.
    fn group(&mut self, layers: &[LayerRef], name: &str) -> Result<()>;
}

/// Executes a plan against a renderer, op by op, in order.
///
/// Stops at the first failing op; earlier side effects are the renderer's
/// to deal with.
pub fn execute<R: Renderer>(renderer: &mut R, ops: &[DrawOp]) -> Result<()> {
    for op in ops {
        match op {
            DrawOp::Fill { rect, color } => renderer.fill(rect, color)?,
            DrawOp::AdjustmentBand { rect } => renderer.adjustment_band(rect)?,
            DrawOp::Label { layer, text, x, y } => renderer.label(*layer, text, *x, *y)?,
            DrawOp::Group { layers, name } => renderer.group(layers, name)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    /// Records the op tags it sees, to check dispatch order.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn fill(&mut self, rect: &Rect, _color: &Color) -> Result<()> {
            self.calls.push(format!("fill@{},{}", rect.x, rect.y));
            Ok(())
        }

        fn adjustment_band(&mut self, rect: &Rect) -> Result<()> {
            self.calls.push(format!("band@{},{}", rect.x, rect.y));
            Ok(())
        }

        fn label(&mut self, layer: LayerRef, text: &str, _x: f64, _y: f64) -> Result<()> {
            self.calls.push(format!("label:{text}:{layer}"));
            Ok(())
        }

        fn group(&mut self, layers: &[LayerRef], name: &str) -> Result<()> {
            self.calls.push(format!("group:{name}:{}", layers.len()));
            Ok(())
        }
    }

    #[test]
    fn test_execute_dispatches_in_order() {
        let ops = vec![
            DrawOp::Fill {
                rect: Rect::square(0.0, 0.0, 10.0),
                color: Color::Rgb(RgbColor::new(1, 2, 3)),
            },
            DrawOp::AdjustmentBand {
                rect: Rect::new(0.0, 20.0, 100.0, 10.0),
            },
            DrawOp::Label {
                layer: LayerRef(0),
                text: "1".to_string(),
                x: 90.0,
                y: 5.0,
            },
            DrawOp::Group {
                layers: vec![LayerRef(0)],
                name: "Text Layers".to_string(),
            },
        ];

        let mut renderer = RecordingRenderer::default();
        execute(&mut renderer, &ops).unwrap();

        assert_eq!(
            renderer.calls,
            vec![
                "fill@0,0",
                "band@0,20",
                "label:1:layer#0",
                "group:Text Layers:1",
            ]
        );
    }
}
