//! End-to-end tests for the `plotlang` binary.

mod common;

use std::fs;
use std::process::Command;

use common::plotlang_binary;
use tempfile::tempdir;

fn write_program(dir: &std::path::Path, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, source).expect("write source file");
    path
}

#[test]
fn test_run_writes_ppm_image() {
    let dir = tempdir().expect("create temp dir");
    let source = write_program(
        dir.path(),
        "circle.plot",
        "ORIGIN IS (16, 16);\nFOR T FROM 0 TO 2*PI STEP 0.1 DRAW (8*COS(T), 8*SIN(T));\n",
    );
    let output = dir.path().join("circle.ppm");

    let status = Command::new(plotlang_binary())
        .arg("run")
        .arg(&source)
        .arg("-o")
        .arg(&output)
        .args(["--width", "32", "--height", "32"])
        .status()
        .expect("run plotlang");
    assert!(status.success());

    let image = fs::read(&output).expect("read rendered image");
    assert!(image.starts_with(b"P6\n32 32\n255\n"));
    // Header plus one RGB triple per pixel.
    assert_eq!(image.len(), b"P6\n32 32\n255\n".len() + 32 * 32 * 3);
}

#[test]
fn test_run_defaults_output_next_to_source() {
    let dir = tempdir().expect("create temp dir");
    let source = write_program(dir.path(), "dot.plot", "FOR T FROM 0 TO 0 STEP 1 DRAW (T, T);");

    let status = Command::new(plotlang_binary())
        .arg("run")
        .arg(&source)
        .status()
        .expect("run plotlang");
    assert!(status.success());
    assert!(dir.path().join("dot.ppm").exists());
}

#[test]
fn test_run_empty_program_succeeds() {
    let dir = tempdir().expect("create temp dir");
    let source = write_program(dir.path(), "empty.plot", "-- nothing\n");

    let status = Command::new(plotlang_binary())
        .arg("run")
        .arg(&source)
        .status()
        .expect("run plotlang");
    assert!(status.success());
}

#[test]
fn test_ast_prints_tree() {
    let dir = tempdir().expect("create temp dir");
    let source = write_program(
        dir.path(),
        "tree.plot",
        "FOR T FROM 0 TO 1 STEP 1 DRAW (T, SIN(T));",
    );

    let output = Command::new(plotlang_binary())
        .arg("ast")
        .arg(&source)
        .output()
        .expect("run plotlang");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Program"), "stdout: {}", stdout);
    assert!(stdout.contains("For T"), "stdout: {}", stdout);
    assert!(stdout.contains("Call SIN"), "stdout: {}", stdout);
}
