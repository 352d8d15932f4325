//! Shared helpers for integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `folio` command isolated from the user's config and terminal colors.
///
/// The returned TempDir holds the config location; keep it alive for the
/// duration of the test.
pub fn folio_cmd() -> (Command, TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.toml");

    let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
    cmd.env("FOLIO_CONFIG", &config_path)
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_LOG");

    (cmd, dir, config_path)
}

/// Run folio with `args` and optional stdin, returning (stdout, stderr, exit code).
pub fn run_folio(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let (mut cmd, _dir, _path) = folio_cmd();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("Failed to execute folio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
