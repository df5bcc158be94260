//! Integration tests for the `designer` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"
designs:
  - name: button
    title: Button
    parameters:
      label: Save
    render: "<Button>${label} for ${brand}</Button>"
    variants:
      Primary:
        parameters:
          label: Continue
      Ghost: "<Button ghost>${label}</Button>"
  - name: broken
    variants:
      Nothing: {}
"#;

fn setup_project(catalog: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".designer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yml"),
        "parameters:\n  brand: Acme\ncatalogs: [designs.yml]\n",
    )
    .unwrap();
    fs::write(dir.join("designs.yml"), catalog).unwrap();
    temp
}

fn designer(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("designer"));
    cmd.current_dir(temp.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("designer"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("preview"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("designer"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_lists_pages() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary"))
        .stdout(predicate::str::contains("Ghost"))
        .stderr(predicate::str::contains("Skipped 'broken'"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .args(["list", "--json", "--search", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"Button/Ghost\""))
        .stdout(predicate::str::contains("Primary").not());
    Ok(())
}

#[test]
fn cli_preview_renders_page() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .args(["preview", "Button/Primary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<Button>Continue for Acme</Button>"));
    Ok(())
}

#[test]
fn cli_preview_unknown_page_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .args(["preview", "Button/Huge"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown page: Button/Huge"));
    Ok(())
}

#[test]
fn cli_check_reports_broken_module() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken"));
    Ok(())
}

#[test]
fn cli_check_passes_clean_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("designs:\n  - name: card\n    render: \"<Card/>\"\n");
    designer(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 designs, 1 variants ready"));
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    let elsewhere = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("designer"));
    cmd.current_dir(elsewhere.path())
        .arg("--project")
        .arg(temp.path())
        .args(["preview", "Button/Ghost"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<Button ghost>Save</Button>"));
    Ok(())
}

#[test]
fn cli_no_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("designer"));
    cmd.current_dir(temp.path()).arg("list");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"));
    Ok(())
}

#[test]
fn cli_config_shows_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CATALOG);
    designer(&temp)
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"brand\": \"Acme\""));
    Ok(())
}
