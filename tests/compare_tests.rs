//! Compare command integration tests
//!
//! Runs the built binary against artifact directories on disk.

use predicates::prelude::*;
use std::fs;

mod common;
use common::fixtures::{self, ArtifactDir};
use common::get_bin;

#[test]
fn test_compare_reports_grown_contract() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("RUNTIME GAS"))
        .stdout(predicate::str::contains("RUNTIME BYTES"))
        .stdout(predicate::str::contains("INITIALIZATION BYTES"))
        .stdout(predicate::str::is_match(r"Foo\.json\s+200 more gas\s+\+1\s+0\n").unwrap());
}

#[test]
fn test_compare_table_is_framed_by_blank_lines() {
    let old = ArtifactDir::new().unwrap();
    let new = ArtifactDir::new().unwrap();
    old.write("Foo.json", "0x00000000", "0x0000").unwrap();
    new.write("Foo.json", "0x0000000000", "0x000000").unwrap();

    let output = get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with('\n'));
    assert!(stdout.ends_with("\n\n"));
    assert_eq!(stdout.trim().lines().count(), 2);
}

#[test]
fn test_compare_warns_about_orphaned_contract() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: could not compare some contracts that might have been renamed or removed",
        ))
        .stderr(predicate::str::contains(format!(
            "Missing from {}: Bar.json",
            new.path().display()
        )));
}

#[test]
fn test_compare_relative_paths_name_absolute_directories() {
    let work = tempfile::TempDir::new().unwrap();
    // The child's working directory is reported without symlinks
    let root = work.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("old")).unwrap();
    fs::create_dir_all(root.join("new")).unwrap();
    fs::write(root.join("old/Foo.json"), fixtures::artifact_json("0x00", "0x00")).unwrap();
    fs::write(root.join("new/Foo.json"), fixtures::artifact_json("0x00", "0x00")).unwrap();
    fs::write(root.join("old/Bar.json"), fixtures::artifact_json("0x00", "0x00")).unwrap();

    get_bin()
        .current_dir(&root)
        .args(["compare", "old", "new"])
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Missing from {}: Bar.json",
            root.join("new").display()
        )));
}

#[test]
fn test_compare_suppresses_identical_contract_by_default() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Baz.json").not());
}

#[test]
fn test_compare_shows_identical_contract_without_suppression() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .args(["--suppress-same", "false"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Baz\.json\s+Same\s+0\s+0\n").unwrap());
}

#[test]
fn test_compare_warns_about_missing_bytecode() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Qux.json").not())
        .stderr(predicate::str::contains(
            "Warning: Qux.json could not be compared due to missing bytecode",
        ));
}

#[test]
fn test_compare_without_warnings_is_quiet() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .args(["--warning", "false"])
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_compare_missing_old_directory_fails() {
    let new = ArtifactDir::new().unwrap();
    let missing = new.path().join("does-not-exist");

    get_bin()
        .arg("compare")
        .arg(&missing)
        .arg(new.path())
        .assert()
        .failure()
        .code(66)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_compare_file_instead_of_directory_fails() {
    let old = ArtifactDir::new().unwrap();
    let file = old.write("Foo.json", "0x00", "0x00").unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(&file)
        .assert()
        .failure()
        .code(66)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_compare_directory_with_itself_prints_no_table() {
    let (old, _new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(old.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_compare_verbose_announces_each_file() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    get_bin()
        .arg("-v")
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparing Foo.json..."))
        .stdout(predicate::str::contains("Comparing Baz.json..."))
        .stdout(predicate::str::contains("Comparing Bar.json...").not());
}

#[test]
fn test_compare_invalid_json_is_reported_and_skipped() {
    let old = ArtifactDir::new().unwrap();
    let new = ArtifactDir::new().unwrap();
    old.write_raw("Broken.json", "{ not json").unwrap();
    new.write("Broken.json", "0x00", "0x00").unwrap();
    old.write("Foo.json", "0x00000000", "0x0000").unwrap();
    new.write("Foo.json", "0x0000000000", "0x000000").unwrap();

    get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo.json"))
        .stderr(predicate::str::contains("Unable to compare Broken.json:"));
}

#[test]
fn test_compare_json_output_is_parseable() {
    let (old, new) = fixtures::scenario_dirs().unwrap();

    let output = get_bin()
        .arg("compare")
        .arg(old.path())
        .arg(new.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diffs = json["diffs"].as_array().unwrap();
    let foo = diffs.iter().find(|diff| diff["name"] == "Foo.json").unwrap();
    assert_eq!(foo["deployed_code_bytes"], 1);
    assert_eq!(foo["init_code_bytes"], 0);
    assert_eq!(foo["gas_cost"], 200);
    assert_eq!(json["only_old"], serde_json::json!(["Bar.json"]));
    assert_eq!(json["incomparable"], serde_json::json!(["Qux.json"]));
}

#[test]
fn test_compare_honors_configured_keys() {
    let work = tempfile::TempDir::new().unwrap();
    let old = work.path().join("old");
    let new = work.path().join("new");
    fs::create_dir_all(&old).unwrap();
    fs::create_dir_all(&new).unwrap();
    fs::write(old.join("A.json"), r#"{"code": "0x0000", "runtime": "0x00"}"#).unwrap();
    fs::write(new.join("A.json"), r#"{"code": "0x00000000", "runtime": "0x0000"}"#).unwrap();
    fs::write(
        work.path().join(".bytecode-diff.toml"),
        "[keys]\nbytecode = \"code\"\ndeployed-bytecode = \"runtime\"\n",
    )
    .unwrap();

    get_bin()
        .current_dir(work.path())
        .args(["compare", "old", "new"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"A\.json\s+200 more gas\s+\+1\s+\+1\n").unwrap());
}

#[test]
fn test_compare_invalid_config_fails() {
    let work = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(work.path().join("old")).unwrap();
    fs::create_dir_all(work.path().join("new")).unwrap();
    fs::write(work.path().join(".bytecode-diff.toml"), "[report]\nname-width = 1\n").unwrap();

    get_bin()
        .current_dir(work.path())
        .args(["compare", "old", "new"])
        .assert()
        .failure()
        .code(78)
        .stderr(predicate::str::contains("name-width"));
}
