use std::ffi::OsStr;
use std::fs;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;

use uigen::compile_str;

mod stubs;

use stubs::device_configs;

fn validate_all_assert(layouts_dir: impl AsRef<OsStr>) -> Assert {
    let mut cmd = Command::cargo_bin("uigen").unwrap();
    cmd.arg("validate-all").arg(layouts_dir).assert()
}

#[test]
fn validate_all_accepts_generated_layouts() {
    let tempdir = tempfile::tempdir().unwrap();
    for (stem, raw) in [
        ("energy-meter-3p", device_configs::ENERGY_METER_3P),
        ("smart-irrigation", device_configs::SMART_IRRIGATION),
    ] {
        let layout = compile_str(raw).unwrap();
        fs::write(
            tempdir.path().join(format!("{stem}-layout.json")),
            serde_json::to_string_pretty(&layout).unwrap(),
        )
        .unwrap();
    }

    validate_all_assert(tempdir.path())
        .success()
        .stdout(predicate::str::contains("2 valid, 0 invalid"));
}

#[test]
fn validate_all_rejects_unknown_widget_type() {
    let tempdir = tempfile::tempdir().unwrap();
    fs::write(
        tempdir.path().join("broken-layout.json"),
        device_configs::INVALID_LAYOUT,
    )
    .unwrap();

    validate_all_assert(tempdir.path())
        .failure()
        .stdout(predicate::str::contains("has invalid type: not-a-real-type"));
}

#[test]
fn validate_all_ignores_other_files() {
    let tempdir = tempfile::tempdir().unwrap();
    fs::write(tempdir.path().join("config.json"), device_configs::INVALID_LAYOUT).unwrap();

    validate_all_assert(tempdir.path())
        .success()
        .stdout(predicate::str::contains("Found 0 layout files"));
}

#[test]
fn validate_all_fails_without_directory() {
    let tempdir = tempfile::tempdir().unwrap();
    validate_all_assert(tempdir.path().join("missing"))
        .failure()
        .stderr(predicate::str::contains("No generated layouts found"));
}

#[test]
fn validate_all_uses_output_dir_env() {
    let tempdir = tempfile::tempdir().unwrap();
    let layout = compile_str(device_configs::ENVIRONMENT_SENSOR).unwrap();
    fs::write(
        tempdir.path().join("environment-sensor-layout.json"),
        serde_json::to_string(&layout).unwrap(),
    )
    .unwrap();

    Command::cargo_bin("uigen")
        .unwrap()
        .env("UIGEN_OUTPUT_DIR", tempdir.path())
        .arg("validate-all")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 valid, 0 invalid"));
}
