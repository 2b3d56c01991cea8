//! CLI integration tests
//!
//! Runs the compiled binary against generated fixtures.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use common::{read_sheet, write_text_pdf};

fn cli() -> Command {
    Command::cargo_bin("pdf-paragraphs").unwrap()
}

// TC-CLI-001: help lists subcommands
#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("info"));
}

// TC-CLI-002: info prints version
#[test]
fn test_info() {
    cli()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("Config File Locations"));
}

// TC-CLI-003: convert a single PDF
#[test]
fn test_convert_single_file() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("notes.pdf");
    write_text_pdf(&pdf, &[&["First line", "continues here.", "Second."]]);
    let out = dir.path().join("out");

    cli()
        .arg("convert")
        .arg(&pdf)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion completed successfully!"));

    let rows = read_sheet(&out.join("notes").join("notes_paragraphs.xlsx"), "Paragraphs");
    assert_eq!(
        rows,
        vec![
            vec!["Ordinal", "Paragraph"],
            vec!["1st", "First line continues here."],
            vec!["2nd", "Second."],
        ]
    );
}

// TC-CLI-004: file mode rejects a non-PDF input before writing anything
#[test]
fn test_convert_rejects_non_pdf() {
    let dir = tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    std::fs::write(&txt, b"text").unwrap();
    let out = dir.path().join("out");

    cli()
        .arg("convert")
        .arg(&txt)
        .arg("-o")
        .arg(&out)
        .arg("--mode")
        .arg("file")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a PDF"));

    assert!(!out.exists());
}

// TC-CLI-005: missing input
#[test]
fn test_convert_missing_input() {
    let dir = tempdir().unwrap();
    cli()
        .arg("convert")
        .arg(dir.path().join("missing.pdf"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .code(3);
}

// TC-CLI-006: empty folder
#[test]
fn test_convert_empty_folder() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();

    cli()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No PDF files found"));
}

// TC-CLI-007: dry run writes nothing
#[test]
fn test_dry_run() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("plan.pdf");
    write_text_pdf(&pdf, &[&["Text."]]);
    let out = dir.path().join("out");

    cli()
        .arg("convert")
        .arg(&pdf)
        .arg("-o")
        .arg(&out)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry Run"))
        .stdout(predicate::str::contains("plan_paragraphs.xlsx"));

    assert!(!out.exists());
}

// TC-CLI-008: partial failure exit code and JSON report
#[test]
fn test_partial_failure_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    write_text_pdf(&input.join("good.pdf"), &[&["Fine."]]);
    std::fs::write(input.join("bad.pdf"), b"garbage").unwrap();

    cli()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg("--json")
        .assert()
        .code(4)
        .stdout(predicate::str::contains("\"status\": \"partially_completed\""))
        .stdout(predicate::str::contains("bad.pdf"));
}

// TC-CLI-009: explicit config file that does not parse is fatal
#[test]
fn test_bad_config_file() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("a.pdf");
    write_text_pdf(&pdf, &[&["Text."]]);
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[export\n").unwrap();

    cli()
        .arg("convert")
        .arg(&pdf)
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("loading config"));
}

// TC-CLI-010: config file settings reach the workbook
#[test]
fn test_config_sheet_name() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("a.pdf");
    write_text_pdf(&pdf, &[&["Text."]]);
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "[export]\nsheet_name = \"Extracted\"\n").unwrap();
    let out = dir.path().join("out");

    cli()
        .arg("convert")
        .arg(&pdf)
        .arg("-o")
        .arg(&out)
        .arg("--config")
        .arg(&config)
        .arg("-q")
        .assert()
        .success();

    let rows = read_sheet(&out.join("a").join("a_paragraphs.xlsx"), "Extracted");
    assert_eq!(rows[1], vec!["1st", "Text."]);
}

// TC-CLI-011: dry run as JSON lists the planned outputs
#[test]
fn test_dry_run_json() {
    let dir = tempdir().unwrap();
    let pdf = dir.path().join("plan.pdf");
    write_text_pdf(&pdf, &[&["Text."]]);
    let out = dir.path().join("out");

    let output = cli()
        .arg("convert")
        .arg(&pdf)
        .arg("-o")
        .arg(&out)
        .arg("--dry-run")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["layout"]["sheet_name"], "Paragraphs");
    let xlsx = json["files"][0]["xlsx"].as_str().unwrap();
    assert!(xlsx.ends_with("plan_paragraphs.xlsx"));
    assert!(!out.exists());
}
