//! End-to-end tests for `colorgrid config`.

use std::path::Path;
use std::process::{Command, Output};

/// Path to the colorgrid binary
fn colorgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_colorgrid")
}

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(colorgrid_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_show_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(&["config", "show"], temp.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "config show should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[grid]"));
    assert!(stdout.contains("grid_size = 15"));
    assert!(stdout.contains("[script]"));
    assert!(stdout.contains("action_set = \"MakeColorGrid\""));
}

#[test]
fn test_config_show_json() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(&["config", "show", "--json"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["grid"]["grid_size"], 15);
    assert_eq!(config["grid"]["band_skip_index"], 7);
    assert_eq!(config["script"]["adjustment_action"], "AddAdjustmentLayer");
}

#[test]
fn test_config_init_then_generate_uses_stored_defaults() {
    let temp = tempfile::tempdir().unwrap();

    let output = run(&["config", "init"], temp.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "config init should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Second init without --force refuses to overwrite
    let output = run(&["config", "init"], temp.path());
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["config", "init", "--force"], temp.path());
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_config_path_prints_location() {
    let temp = tempfile::tempdir().unwrap();
    let output = run(&["config", "path"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ColorGrid"));
    assert!(stdout.trim_end().ends_with("config.toml"));
}

#[test]
fn test_stored_grid_defaults_drive_the_planner() {
    let temp = tempfile::tempdir().unwrap();

    // Write a config with a smaller grid, then plan without overrides
    let config_dir = temp.path().join("ColorGrid");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[grid]\ngrid_size = 4\ncanvas_size = 2000.0\nband_skip_index = 1\n",
    )
    .unwrap();

    let output = run(&["plan", "--color", "0,0,0,100", "--json"], temp.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "plan should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let ops: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    // 16 fills + 6 bands (index 1 skipped per axis) + 8 labels + 1 group
    assert_eq!(ops.len(), 31);
}
