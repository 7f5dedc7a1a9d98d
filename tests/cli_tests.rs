//! CLI integration tests
//!
//! These tests run the charsheet binary and check its output files and
//! exit codes.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get the path to the charsheet binary
fn charsheet_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_charsheet"))
}

fn charsheet(args: &[&str], cwd: &Path) -> Output {
    Command::new(charsheet_binary())
        .args(args)
        .current_dir(cwd)
        .env_remove("CHARSHEET_LOG")
        .output()
        .expect("Failed to execute charsheet")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_redraw_default_paths() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["redraw"], temp.path());

    assert!(output.status.success(), "redraw failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Saved: public/chars-idle.png"), "{out}");
    assert!(out.contains("Saved: public/chars-action.json"), "{out}");
    assert!(out.trim_end().ends_with("wrote sprite sheets"), "{out}");

    let img = image::open(temp.path().join("public/chars-action.png")).expect("sheet written");
    assert_eq!((img.width(), img.height()), (1024, 1536));
}

#[test]
fn test_redraw_out_dir_without_atlas() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["redraw", "--out-dir", "sheets", "--no-atlas"], temp.path());

    assert!(output.status.success(), "redraw failed: {}", stderr(&output));
    assert!(temp.path().join("sheets/chars-idle.png").exists());
    assert!(!temp.path().join("sheets/chars-idle.json").exists());
    assert!(!temp.path().join("public").exists());
}

#[test]
fn test_tinted_with_source() {
    let temp = TempDir::new().expect("should create temp dir");
    let mut source = RgbaImage::new(153, 17);
    for col in [0, 1, 7, 8] {
        for y in 3..13 {
            for x in 4..12 {
                source.put_pixel(col * 17 + x, y, Rgba([150, 110, 90, 255]));
            }
        }
    }
    source.save(temp.path().join("ref.png")).expect("should write reference");

    let output = charsheet(&["tinted", "--source", "ref.png", "-o", "out"], temp.path());

    assert!(output.status.success(), "tinted failed: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Generated out/chars-idle.png and out/chars-action.png");
    assert!(temp.path().join("out/chars-idle.png").exists());
}

#[test]
fn test_tinted_missing_source_fails() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["tinted", "--source", "nope.png"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: cannot open reference image 'nope.png'"));
    assert!(!temp.path().join("public").exists());
}

#[test]
fn test_invalid_config_exit_code() {
    let temp = TempDir::new().expect("should create temp dir");
    std::fs::write(temp.path().join("bad.toml"), "[redraw]\nscale = 0\n").expect("write config");

    let output = charsheet(&["redraw", "--config", "bad.toml"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("redraw.scale"), "{}", stderr(&output));
}

#[test]
fn test_config_overrides_output_names() {
    let temp = TempDir::new().expect("should create temp dir");
    std::fs::write(
        temp.path().join("charsheet.toml"),
        "[output]\ndir = \"assets\"\nidle = \"idle.png\"\naction = \"action.png\"\n",
    )
    .expect("write config");

    let output = charsheet(&["redraw", "-c", "charsheet.toml"], temp.path());

    assert!(output.status.success(), "redraw failed: {}", stderr(&output));
    assert!(temp.path().join("assets/idle.png").exists());
    assert!(temp.path().join("assets/action.json").exists());
}

#[test]
fn test_locate_agent() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["locate", "02-threat-hunter", "walk2"], temp.path());

    assert!(output.status.success(), "locate failed: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "02-threat-hunter -> cortana-walk2 in public/chars-action.png at x=512 y=512 w=256 h=512"
    );
}

#[test]
fn test_locate_unknown_pose() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["locate", "main", "dancing"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown pose 'dancing'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = charsheet(&["-v", "redraw"], temp.path());

    assert!(output.status.success());
    assert!(stderr(&output).contains("wrote sheet"), "{}", stderr(&output));
    assert!(!stdout(&output).contains("wrote sheet\n"));
}
