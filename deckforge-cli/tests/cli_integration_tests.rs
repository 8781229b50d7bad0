//! Integration tests for the deckforge CLI
//!
//! Tests command-line interface functionality including:
//! - The default build and its two status lines
//! - Output path and compression flags
//! - The slide outline in table and JSON form
//! - Error reporting for unwritable paths

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deckforge"))
}

fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()?;
    Ok(output)
}

fn assert_pdf_exists_and_valid(path: &Path) -> Vec<u8> {
    assert!(path.exists(), "PDF file should exist: {}", path.display());
    let content = fs::read(path).expect("Failed to read PDF file");
    assert!(content.len() > 1000, "PDF file should have content");
    assert!(
        content.starts_with(b"%PDF-1.7"),
        "File should start with PDF header"
    );
    content
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}

#[test]
fn test_build_prints_two_status_lines() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("deck.pdf");

    let output = run_cli_command(&["build", "--output", output_path.to_str().unwrap()]).unwrap();
    assert!(output.status.success(), "build should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("✅ 簡報已生成：{}", output_path.display()).as_str(),
            "📊 共 15 頁投影片",
        ]
    );

    let content = assert_pdf_exists_and_valid(&output_path);
    assert!(contains(&content, "/Count 15"));
}

#[test]
fn test_build_overwrites_existing_file() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("deck.pdf");
    fs::write(&output_path, b"old contents").unwrap();

    let output = run_cli_command(&["build", "-o", output_path.to_str().unwrap()]).unwrap();
    assert!(output.status.success());
    assert_pdf_exists_and_valid(&output_path);
}

#[test]
fn test_build_uncompressed() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("plain.pdf");

    let output = run_cli_command(&[
        "build",
        "--uncompressed",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .unwrap();
    assert!(output.status.success());

    let content = assert_pdf_exists_and_valid(&output_path);
    assert!(!contains(&content, "/FlateDecode"));
    assert!(contains(&content, "/MSung-Light"));
}

#[test]
fn test_build_to_missing_directory_fails() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("missing").join("deck.pdf");

    let output = run_cli_command(&["build", "--output", output_path.to_str().unwrap()]).unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("deck.pdf");

    let output =
        run_cli_command(&["-v", "build", "--output", output_path.to_str().unwrap()]).unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered slide"));
}

#[test]
fn test_outline_table() {
    let output = run_cli_command(&["outline"]).unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // header, rule and one line per slide
    assert_eq!(stdout.lines().count(), 17);
    assert!(stdout.contains("poster"));
    assert!(stdout.contains("94Cram"));
}

#[test]
fn test_outline_json() {
    let output = run_cli_command(&["outline", "--json"]).unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["pages"], 15);

    let slides = report["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 15);
    assert_eq!(slides[0]["number"], 1);
    assert_eq!(slides[0]["background"], "Dark");
    assert_eq!(slides[0]["first_text"], "94Cram");
    assert_eq!(slides[8]["kind"], "comparison");
}

#[test]
fn test_help_lists_commands() {
    let output = run_cli_command(&["--help"]).unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("build"));
    assert!(stdout.contains("outline"));
}

#[test]
fn test_unknown_command_fails() {
    let output = run_cli_command(&["explode"]).unwrap();
    assert!(!output.status.success());
}
