//! Integration tests for the folio CLI

use predicates::prelude::*;

use crate::helpers::{folio_cmd, run_folio};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_folio(&["--help"], None);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Portfolio command terminal"));
    for sub in ["shell", "repl", "run", "commands", "config", "completions"] {
        assert!(stdout.contains(sub), "help should mention {}", sub);
    }
}

#[test]
fn version_flag_prints_package_version() {
    let (stdout, _stderr, exit_code) = run_folio(&["--version"], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_folio(&["frobnicate"], None);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("frobnicate"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[test]
fn run_unknown_command_prints_not_found() {
    let (stdout, _stderr, exit_code) = run_folio(&["run", "foo"], None);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    guest@portfolio:~$ foo
    Command not found: foo. Type 'help' for available commands.
    ");
}

#[test]
fn run_clear_discards_earlier_entries() {
    let (stdout, _stderr, exit_code) =
        run_folio(&["run", "help", "ls", "clear", "whoami"], None);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout, @r"
    guest@portfolio:~$ whoami
    Jordan Reyes - Software Engineer (Lisbon, Portugal)
    ");
}

#[test]
fn run_is_case_insensitive() {
    let (upper, _, _) = run_folio(&["run", "CONTACT"], None);
    let (lower, _, _) = run_folio(&["run", "contact"], None);

    assert_eq!(upper.lines().nth(1), lower.lines().nth(1));
    assert_eq!(upper.lines().next(), Some("guest@portfolio:~$ CONTACT"));
}

#[test]
fn run_blank_line_prints_nothing() {
    let (stdout, _stderr, exit_code) = run_folio(&["run", "   "], None);
    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn run_json_outputs_tagged_entries() {
    let (stdout, _stderr, exit_code) = run_folio(&["run", "skills", "--json"], None);
    assert_eq!(exit_code, 0);

    let entries: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = entries.as_array().expect("array of entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["kind"], "echo");
    assert_eq!(entries[0]["prompt"], "guest@portfolio:~$");
    assert_eq!(entries[0]["input"], "skills");
    assert_eq!(entries[1]["kind"], "output");
    assert!(entries[1]["text"].as_str().unwrap().starts_with("Skills: "));
}

#[test]
fn run_json_marks_unknown_commands_unrecognized() {
    let (stdout, _stderr, exit_code) = run_folio(&["run", "foo", "ls", "--json"], None);
    assert_eq!(exit_code, 0);

    let entries: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(entries[1]["recognized"], false);
    assert_eq!(entries[3]["recognized"], true);
}

#[test]
fn run_without_lines_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_folio(&["run"], None);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<LINE>"));
}

// ============================================================================
// Line Mode Tests
// ============================================================================

#[test]
fn repl_reads_commands_from_stdin() {
    let (stdout, _stderr, exit_code) = run_folio(&["repl"], Some("whoami\n\nfoo\n"));

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "guest@portfolio:~$ whoami");
    assert_eq!(lines[2], "guest@portfolio:~$ foo");
    assert_eq!(
        lines[3],
        "Command not found: foo. Type 'help' for available commands."
    );
}

#[test]
fn shell_falls_back_to_line_mode_without_tty() {
    let (stdout, _stderr, exit_code) = run_folio(&[], Some("help\n"));

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Available commands: help, clear, whoami"));
}

#[test]
fn repl_with_empty_stdin_prints_nothing() {
    let (stdout, _stderr, exit_code) = run_folio(&["repl"], Some(""));
    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

// ============================================================================
// Commands and Completions Tests
// ============================================================================

#[test]
fn commands_lists_vocabulary_in_help_order() {
    let (stdout, _stderr, exit_code) = run_folio(&["commands"], None);

    assert_eq!(exit_code, 0);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        names,
        vec!["help", "clear", "whoami", "ls", "projects", "skills", "contact", "social"]
    );
}

#[test]
fn completions_generate_for_bash() {
    let (mut cmd, _dir, _path) = folio_cmd();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

// ============================================================================
// Config-driven Output Tests
// ============================================================================

#[test]
fn configured_prompt_and_profile_are_used() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(
        &path,
        "[prompt]\nuser = \"ada\"\nhost = \"engine\"\n\n[profile]\nemail = \"ada@example.com\"\n",
    )
    .unwrap();

    cmd.args(["run", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@engine:~$ contact"))
        .stdout(predicate::str::contains("Email: ada@example.com"));
}

#[test]
fn invalid_config_exits_1_with_message() {
    let (mut cmd, _dir, path) = folio_cmd();
    std::fs::write(&path, "[ui]\ntheme = \"neon\"\n").unwrap();

    cmd.args(["run", "help"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ui.theme"))
        .stderr(predicate::str::contains("neon"));
}

#[test]
fn explicit_config_flag_overrides_environment() {
    let (mut cmd, dir, _path) = folio_cmd();
    let other = dir.path().join("other.toml");
    std::fs::write(&other, "[prompt]\nuser = \"flag\"\n").unwrap();

    cmd.arg("--config")
        .arg(&other)
        .args(["run", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("flag@portfolio:~$ ls"));
}
