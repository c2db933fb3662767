//! Integration tests for the grid layout planner.

use colorgrid::models::{CmykColor, Color, DrawOp, GridConfig, LayerRef, RgbColor};
use colorgrid::planner::{plan_grid, PlanError};

/// The layout used by the original proofing documents.
fn proof_config() -> GridConfig {
    GridConfig {
        canvas_size: 7140.0,
        grid_size: 15,
        box_size: 450.0,
        gap_size: 20.0,
        band_skip_index: Some(7),
        label_margin: 55.0,
    }
}

fn black() -> Color {
    Color::Cmyk(CmykColor::new(0, 0, 0, 100))
}

fn fills(ops: &[DrawOp]) -> Vec<&DrawOp> {
    ops.iter().filter(|op| op.kind() == "fill").collect()
}

fn bands(ops: &[DrawOp]) -> Vec<&DrawOp> {
    ops.iter().filter(|op| op.kind() == "band").collect()
}

fn labels(ops: &[DrawOp]) -> Vec<&DrawOp> {
    ops.iter().filter(|op| op.kind() == "label").collect()
}

#[test]
fn fill_count_is_grid_size_squared() {
    for n in [1, 2, 5, 15, 26] {
        let config = GridConfig {
            grid_size: n,
            canvas_size: f64::from(n) * 470.0 + 100.0,
            band_skip_index: None,
            ..proof_config()
        };
        let ops = plan_grid(&config, black()).unwrap();
        assert_eq!(fills(&ops).len(), (n * n) as usize, "grid size {n}");
    }
}

#[test]
fn fills_are_row_major() {
    let ops = plan_grid(&proof_config(), black()).unwrap();

    let origins: Vec<(f64, f64)> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { rect, .. } => Some((rect.x, rect.y)),
            _ => None,
        })
        .collect();

    for (index, (x, y)) in origins.iter().enumerate() {
        let row = index / 15;
        let column = index % 15;
        assert_eq!(*x, column as f64 * 470.0);
        assert_eq!(*y, row as f64 * 470.0);
    }
}

#[test]
fn band_rects_tile_at_stride_multiples() {
    let ops = plan_grid(&proof_config(), black()).unwrap();

    for op in bands(&ops) {
        let DrawOp::AdjustmentBand { rect } = op else {
            unreachable!();
        };
        // One axis spans the canvas, the other starts on a stride multiple
        if rect.width == 7140.0 {
            assert_eq!(rect.height, 450.0);
            assert_eq!(rect.y % 470.0, 0.0);
        } else {
            assert_eq!(rect.width, 450.0);
            assert_eq!(rect.height, 7140.0);
            assert_eq!(rect.x % 470.0, 0.0);
        }
    }
}

#[test]
fn skip_index_removes_one_band_per_axis() {
    let skipped = plan_grid(&proof_config(), black()).unwrap();
    assert_eq!(bands(&skipped).len(), 28);

    // No band starts at the skipped offset on either axis
    let skip_offset = 7.0 * 470.0;
    for op in bands(&skipped) {
        let DrawOp::AdjustmentBand { rect } = op else {
            unreachable!();
        };
        if rect.width == 7140.0 {
            assert_ne!(rect.y, skip_offset);
        } else {
            assert_ne!(rect.x, skip_offset);
        }
    }

    let config = GridConfig {
        band_skip_index: None,
        ..proof_config()
    };
    let unskipped = plan_grid(&config, black()).unwrap();
    assert_eq!(bands(&unskipped).len(), 30);
}

#[test]
fn labels_count_and_contents() {
    let ops = plan_grid(&proof_config(), black()).unwrap();
    let label_ops = labels(&ops);
    assert_eq!(label_ops.len(), 30);

    let texts: Vec<&str> = label_ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();

    // Numeric and alphabetic labels alternate, one pair per row
    assert_eq!(&texts[..4], &["1", "A", "2", "B"]);
    assert_eq!(&texts[28..], &["15", "O"]);
}

#[test]
fn labels_sit_outside_the_grid() {
    let config = proof_config();
    let ops = plan_grid(&config, black()).unwrap();
    let extent = 15.0 * 470.0 - 20.0;

    for op in labels(&ops) {
        let DrawOp::Label { x, y, .. } = op else {
            unreachable!();
        };
        // One coordinate is the outward anchor past the grid extent
        let outward = config.canvas_size - config.label_margin;
        assert!(
            (*x == outward && *y < extent) || (*y == outward && *x < extent),
            "label at ({x}, {y}) is not anchored outside the grid"
        );
    }
}

#[test]
fn group_is_last_and_references_every_label() {
    let ops = plan_grid(&proof_config(), black()).unwrap();

    let DrawOp::Group { layers, name } = ops.last().unwrap() else {
        panic!("last op must be the group");
    };
    assert_eq!(name, "Text Layers");
    assert_eq!(layers.len(), 30);

    let label_refs: Vec<LayerRef> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Label { layer, .. } => Some(*layer),
            _ => None,
        })
        .collect();
    assert_eq!(*layers, label_refs);

    // Exactly one group op in the whole plan
    assert_eq!(ops.iter().filter(|op| op.kind() == "group").count(), 1);
}

#[test]
fn proof_scenario_with_skip() {
    let ops = plan_grid(&proof_config(), black()).unwrap();
    assert_eq!(fills(&ops).len(), 225);
    assert_eq!(bands(&ops).len(), 28);
    assert_eq!(labels(&ops).len(), 30);
    assert_eq!(ops.len(), 284);
}

#[test]
fn proof_scenario_without_skip() {
    let config = GridConfig {
        band_skip_index: None,
        ..proof_config()
    };
    let ops = plan_grid(&config, black()).unwrap();
    assert_eq!(bands(&ops).len(), 30);
    assert_eq!(ops.len(), 286);
}

#[test]
fn planning_is_idempotent() {
    let config = proof_config();
    let color = Color::Rgb(RgbColor::new(200, 100, 50));
    assert_eq!(
        plan_grid(&config, color).unwrap(),
        plan_grid(&config, color).unwrap()
    );
}

#[test]
fn zero_grid_fails_with_invalid_config() {
    let config = GridConfig {
        grid_size: 0,
        ..proof_config()
    };
    assert!(matches!(
        plan_grid(&config, black()),
        Err(PlanError::InvalidConfig(_))
    ));
}

#[test]
fn oversized_grid_fails_with_alphabet_exhausted() {
    let config = GridConfig {
        grid_size: 30,
        canvas_size: 30.0 * 470.0,
        band_skip_index: None,
        ..proof_config()
    };
    assert!(matches!(
        plan_grid(&config, black()),
        Err(PlanError::LabelAlphabetExhausted { grid_size: 30, .. })
    ));
}

#[test]
fn stage_order_is_fills_bands_labels_group() {
    let ops = plan_grid(&proof_config(), black()).unwrap();
    let kinds: Vec<&str> = ops.iter().map(DrawOp::kind).collect();

    let first_band = kinds.iter().position(|k| *k == "band").unwrap();
    let first_label = kinds.iter().position(|k| *k == "label").unwrap();
    let group = kinds.iter().position(|k| *k == "group").unwrap();
    let last_fill = kinds.iter().rposition(|k| *k == "fill").unwrap();
    let last_band = kinds.iter().rposition(|k| *k == "band").unwrap();
    let last_label = kinds.iter().rposition(|k| *k == "label").unwrap();

    assert!(last_fill < first_band);
    assert!(last_band < first_label);
    assert!(last_label < group);
    assert_eq!(group, ops.len() - 1);
}
