//! Line-mode host for the terminal session.
//!
//! Used when stdin or stdout is not a TTY, and by `folio repl`. Reads one
//! command per line and writes the entries each line appended.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::terminal::{TerminalEffect, TerminalSession, Transcript, TranscriptEntry};
use crate::theme::Theme;

/// Execute every line from `reader`, writing new entries to `writer`.
///
/// Stops at EOF. Returns the number of lines read (blank lines included).
/// Bytes that are not UTF-8 are replaced with U+FFFD; the line still runs.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut TerminalSession,
    mut reader: R,
    writer: &mut W,
    theme: &Theme,
) -> io::Result<usize> {
    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            tracing::warn!(line = count, "input is not valid UTF-8, invalid bytes replaced");
        }

        let before = session.transcript().len();
        if let TerminalEffect::Output { .. } = session.execute(&line) {
            for entry in session.transcript().since(before) {
                write_entry(writer, entry, theme)?;
            }
        }
        writer.flush()?;
    }
    tracing::debug!(lines = count, "input exhausted");
    Ok(count)
}

/// Write a whole transcript, oldest entry first.
pub fn write_transcript<W: Write>(
    writer: &mut W,
    transcript: &Transcript,
    theme: &Theme,
) -> io::Result<()> {
    for entry in transcript {
        write_entry(writer, entry, theme)?;
    }
    Ok(())
}

fn write_entry<W: Write>(
    writer: &mut W,
    entry: &TranscriptEntry,
    theme: &Theme,
) -> io::Result<()> {
    match entry {
        TranscriptEntry::Echo { prompt, input } => {
            writeln!(writer, "{} {}", theme.accent_text(prompt), input)
        }
        TranscriptEntry::Output { text, recognized } => {
            for line in text.lines() {
                if *recognized {
                    writeln!(writer, "{}", theme.primary_text(line))?;
                } else {
                    writeln!(writer, "{}", theme.error_text(line))?;
                }
            }
            Ok(())
        }
    }
}
