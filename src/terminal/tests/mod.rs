//! Terminal session tests.
//!
//! Organized by behavior:
//! - lookup: known commands, case folding, unknown names
//! - blank input
//! - clear and reset
//! - multi-command scenarios

use super::*;

fn session() -> TerminalSession {
    TerminalSession::default()
}

fn echo(input: &str) -> TranscriptEntry {
    TranscriptEntry::echo(&Prompt::default(), input)
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn every_table_command_appends_echo_then_its_response() {
    let table = CommandTable::default_portfolio();
    for name in table.names() {
        let mut session = session();
        let effect = session.execute(name);

        let expected = table.get(name).unwrap();
        assert_eq!(
            effect,
            TerminalEffect::Output {
                text: expected.to_string(),
                recognized: true
            }
        );
        assert_eq!(
            session.transcript().entries(),
            &[echo(name), TranscriptEntry::output(expected)]
        );
    }
}

#[test]
fn matching_is_case_insensitive() {
    let mut upper = session();
    let mut lower = session();

    let a = upper.execute("WHOAMI");
    let b = lower.execute("whoami");

    assert_eq!(a, b);
    assert_eq!(upper.transcript().last_output(), lower.transcript().last_output());
}

#[test]
fn surrounding_whitespace_is_ignored_for_lookup() {
    let mut session = session();
    let effect = session.execute("  skills \t");
    assert!(matches!(effect, TerminalEffect::Output { recognized: true, .. }));
}

#[test]
fn echo_keeps_the_typed_case() {
    let mut session = session();
    session.execute("  WhoAmI ");
    assert_eq!(session.transcript().entries()[0], echo("WhoAmI"));
}

#[test]
fn unknown_command_reports_not_found() {
    let mut session = session();
    let effect = session.execute("foo");

    assert_eq!(
        effect.output_text(),
        Some("Command not found: foo. Type 'help' for available commands.")
    );
    assert!(matches!(effect, TerminalEffect::Output { recognized: false, .. }));
    assert_eq!(
        session.transcript().entries(),
        &[
            echo("foo"),
            TranscriptEntry::not_found(
                "Command not found: foo. Type 'help' for available commands."
            ),
        ]
    );
}

#[test]
fn unknown_commands_mention_input_and_help() {
    for input in ["foo", "sudo rm", "help me", "ls -la", "x"] {
        let mut session = session();
        session.execute(input);
        let text = session.transcript().last_output().unwrap();
        assert!(text.contains(input), "{:?} missing from {:?}", input, text);
        assert!(text.contains("help"));
    }
}

#[test]
fn not_found_message_uses_normalized_input() {
    let mut session = session();
    session.execute("  FOO ");
    assert_eq!(
        session.transcript().last_output(),
        Some("Command not found: foo. Type 'help' for available commands.")
    );
}

#[test]
fn arguments_are_not_supported() {
    let mut session = session();
    let effect = session.execute("ls projects");
    assert!(matches!(effect, TerminalEffect::Output { recognized: false, .. }));
}

#[test]
fn injected_table_is_used_for_lookup() {
    let table = CommandTable::new().with("ping", "pong");
    let mut session = TerminalSession::new(table, Prompt::new("me", "box"));

    session.execute("ping");

    assert_eq!(
        session.transcript().entries(),
        &[
            TranscriptEntry::echo(&Prompt::new("me", "box"), "ping"),
            TranscriptEntry::output("pong"),
        ]
    );
}

// ============================================================================
// Blank input
// ============================================================================

#[test]
fn blank_input_appends_nothing() {
    let mut session = session();
    assert_eq!(session.execute(""), TerminalEffect::Ignored);
    assert_eq!(session.execute("   "), TerminalEffect::Ignored);
    assert_eq!(session.execute("\t\n"), TerminalEffect::Ignored);
    assert!(session.transcript().is_empty());
}

#[test]
fn blank_input_keeps_existing_entries() {
    let mut session = session();
    session.execute("ls");
    session.execute(" ");
    assert_eq!(session.transcript().len(), 2);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn clear_empties_transcript_regardless_of_length() {
    let mut session = session();
    for _ in 0..10 {
        session.execute("help");
    }
    assert_eq!(session.transcript().len(), 20);

    assert_eq!(session.execute("clear"), TerminalEffect::Cleared);
    assert!(session.transcript().is_empty());
}

#[test]
fn clear_on_empty_transcript_stays_empty() {
    let mut session = session();
    session.execute("CLEAR");
    assert!(session.transcript().is_empty());
}

#[test]
fn reset_empties_transcript() {
    let mut session = session();
    session.execute("contact");
    session.reset();
    assert!(session.transcript().is_empty());
}

#[test]
fn clear_is_not_shadowed_by_table_entry() {
    let table = CommandTable::new().with("clear", "should never print");
    let mut session = TerminalSession::new(table, Prompt::default());
    session.execute("social");
    assert_eq!(session.execute("clear"), TerminalEffect::Cleared);
    assert!(session.transcript().is_empty());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn help_ls_clear_whoami_leaves_only_whoami() {
    let mut session = session();
    for line in ["help", "ls", "clear", "whoami"] {
        session.execute(line);
    }

    let whoami = CommandTable::default_portfolio()
        .get("whoami")
        .unwrap()
        .to_string();
    assert_eq!(
        session.transcript().entries(),
        &[echo("whoami"), TranscriptEntry::output(whoami)]
    );
}

#[test]
fn every_echo_is_followed_by_at_most_one_output() {
    let mut session = session();
    for line in ["help", "", "nope", "WHOAMI", "  ", "projects", "social"] {
        session.execute(line);
    }

    let entries = session.transcript().entries();
    for (i, entry) in entries.iter().enumerate() {
        if entry.is_output() {
            assert!(i > 0 && entries[i - 1].is_echo(), "orphan output at {}", i);
        }
    }
    assert_eq!(entries.len(), 10);
}

#[test]
fn since_returns_entries_added_by_last_call() {
    let mut session = session();
    session.execute("ls");
    let before = session.transcript().len();
    session.execute("skills");
    let added = session.transcript().since(before);
    assert_eq!(added.len(), 2);
    assert!(added[0].is_echo());
    assert!(session.transcript().since(99).is_empty());
}
