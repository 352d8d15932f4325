//! Integration tests for the config subcommands

use predicates::prelude::*;

use folio::Config;

use crate::helpers::folio_cmd;

#[test]
fn config_path_prints_env_location() {
    let (mut cmd, _dir, path) = folio_cmd();
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));
}

#[test]
fn config_init_writes_loadable_defaults() {
    let (mut cmd, _dir, path) = folio_cmd();
    cmd.args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written to"));

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn config_init_refuses_to_overwrite() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(&path, "[prompt]\nuser = \"kept\"\n").unwrap();

    cmd.args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("kept"));
}

#[test]
fn config_init_force_overwrites() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(&path, "[prompt]\nuser = \"old\"\n").unwrap();

    cmd.args(["config", "init", "--force"]).assert().success();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn config_show_prints_effective_values() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(&path, "[ui]\ntheme = \"ocean\"\n").unwrap();

    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[prompt]"))
        .stdout(predicate::str::contains("theme = \"ocean\""))
        .stdout(predicate::str::contains("user = \"guest\""));
}

#[test]
fn config_show_without_file_prints_defaults() {
    let (mut cmd, _dir, _path) = folio_cmd();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history_size = 100"));
}

#[test]
fn malformed_config_reports_parse_error() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(&path, "[prompt\n").unwrap();

    cmd.args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}
