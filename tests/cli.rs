//! End-to-end tests for the sheetcmp binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, rows.join("\n")).unwrap();
    path
}

fn base_rows() -> Vec<&'static str> {
    vec!["id,name,amt", "1,A,10", "2,B,5"]
}

#[test]
fn reports_one_sided_keys() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(
        dir.path(),
        "compare.csv",
        &["id,name,amt", "1,A,10", "3,C,7"],
    );

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .args(["--base"])
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .args(["--keys", "id", "--no-export"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Using user-defined key column(s): id"))
        .stdout(predicate::str::contains(
            "--- Present in base only ---\n2",
        ))
        .stdout(predicate::str::contains(
            "--- Present in compare only ---\n3",
        ));
}

#[test]
fn discovers_key_and_reports_changes() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(
        dir.path(),
        "compare.csv",
        &["id,name,amt", "1,A,20", "2,B,5"],
    );

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .arg("--no-export")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Detected key column(s): id"))
        .stdout(predicate::str::contains("1 | amt: 10 / 20"));
}

#[test]
fn identical_files_exit_clean() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(dir.path(), "compare.csv", &base_rows());

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .arg("--no-export")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Differences on matching keys ---"));
}

#[test]
fn header_is_located_below_banner_rows() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(
        dir.path(),
        "base.csv",
        &["Weekly Report,,", ",,", "id,name,amt", "1,A,10"],
    );
    let compare = write_csv(dir.path(), "compare.csv", &["id,name,amt", "1,A,11"]);

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .args(["--keys", "id", "--no-export"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 | amt: 10 / 11"));
}

#[test]
fn missing_base_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let compare = write_csv(dir.path(), "compare.csv", &base_rows());

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(dir.path().join("gone.csv"))
        .arg("--compare")
        .arg(&compare)
        .arg("--no-export")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("base file not found"));
}

#[test]
fn unknown_key_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(dir.path(), "compare.csv", &base_rows());

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .args(["--keys", "reference", "--no-export"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "key column(s) missing in the base file: reference",
        ));
}

#[test]
fn auto_detects_inputs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "a.csv", &base_rows());
    write_csv(dir.path(), "b.csv", &["id,name,amt", "1,A,10", "3,C,7"]);

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .current_dir(dir.path())
        .args(["--keys", "id", "--no-export"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("a.csv"))
        .stdout(predicate::str::contains("b.csv"));
}

#[test]
fn auto_detection_needs_two_files() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "a.csv", &base_rows());

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .current_dir(dir.path())
        .arg("--no-export")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least two"));
}

#[test]
fn writes_export_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(
        dir.path(),
        "compare.csv",
        &["id,name,amt", "1,A,20", "2,B,5"],
    );
    let export = dir.path().join("result.xlsx");

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .arg("--export")
        .arg(&export)
        .args(["--keys", "id"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Results saved to"));

    assert!(export.is_file());
}

#[test]
fn debug_flag_prints_loaded_tables() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_csv(dir.path(), "base.csv", &base_rows());
    let compare = write_csv(dir.path(), "compare.csv", &base_rows());

    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--base")
        .arg(&base)
        .arg("--compare")
        .arg(&compare)
        .args(["--debug", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG: Loaded columns"))
        .stdout(predicate::str::contains("DEBUG: Column types"));
}

#[test]
fn rejects_unknown_options() {
    Command::cargo_bin("sheetcmp")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn rejects_non_integer_row_cap() {
    Command::cargo_bin("sheetcmp")
        .unwrap()
        .args(["--max-rows", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
