//! Integration tests for the terminal session public API

use folio::terminal::{CommandTable, Profile, TranscriptEntry, PORTFOLIO_COMMANDS};
use folio::{Config, Prompt, TerminalEffect, TerminalSession};

#[test]
fn session_from_config_uses_profile_and_prompt() {
    let config = Config::parse(
        "[prompt]\nuser = \"visitor\"\n\n[profile]\nname = \"Ada\"\nrole = \"Engineer\"\nlocation = \"\"\n",
    )
    .unwrap();
    let mut session = TerminalSession::new(config.command_table(), config.prompt());

    let effect = session.execute("whoami");

    assert_eq!(effect.output_text(), Some("Ada - Engineer"));
    assert_eq!(
        session.transcript().entries()[0],
        TranscriptEntry::echo(&Prompt::new("visitor", "portfolio"), "whoami")
    );
}

#[test]
fn every_documented_command_is_recognized() {
    for name in PORTFOLIO_COMMANDS {
        let mut session = TerminalSession::default();
        let effect = session.execute(name);
        assert!(
            !matches!(effect, TerminalEffect::Output { recognized: false, .. }),
            "{} should be recognized",
            name
        );
    }
}

#[test]
fn custom_table_replaces_vocabulary() {
    let table = CommandTable::new().with("hello", "world");
    let mut session = TerminalSession::new(table, Prompt::default());

    assert_eq!(session.execute("HELLO").output_text(), Some("world"));
    assert!(matches!(
        session.execute("whoami"),
        TerminalEffect::Output {
            recognized: false,
            ..
        }
    ));
}

#[test]
fn help_text_lists_the_vocabulary() {
    let table = CommandTable::portfolio(&Profile::default());
    assert_eq!(
        table.get("help"),
        Some("Available commands: help, clear, whoami, ls, projects, skills, contact, social")
    );
}
