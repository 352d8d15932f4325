//! The command table: a closed vocabulary of names and their fixed responses.

use super::profile::Profile;

/// Command that lists the vocabulary.
pub const HELP_COMMAND: &str = "help";

/// Command that empties the transcript. Handled by the session, never looked up.
pub const CLEAR_COMMAND: &str = "clear";

/// Command names in the order `help` lists them.
pub const PORTFOLIO_COMMANDS: &[&str] = &[
    HELP_COMMAND,
    CLEAR_COMMAND,
    "whoami",
    "ls",
    "projects",
    "skills",
    "contact",
    "social",
];

/// Mapping from a lowercase command name to its response text.
///
/// Built once before a session starts and never mutated afterwards;
/// the session only holds it by value and reads from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<(String, String)>,
}

impl CommandTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, returning the table for chaining.
    ///
    /// Names are stored trimmed and lowercased. Re-adding a name replaces
    /// its response in place.
    pub fn with(mut self, name: &str, response: impl Into<String>) -> Self {
        self.insert(name, response);
        self
    }

    /// Add a command. See [`CommandTable::with`].
    pub fn insert(&mut self, name: &str, response: impl Into<String>) {
        let name = name.trim().to_lowercase();
        let response = response.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = response,
            None => self.entries.push((name, response)),
        }
    }

    /// Exact-match lookup on an already normalized name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, response)| response.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Command names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the portfolio vocabulary from a profile.
    pub fn portfolio(profile: &Profile) -> Self {
        Self::new()
            .with(HELP_COMMAND, help_text())
            .with("whoami", whoami_text(profile))
            .with("ls", ls_text(profile))
            .with("projects", projects_text(profile))
            .with("skills", skills_text(profile))
            .with("contact", contact_text(profile))
            .with("social", social_text(profile))
    }

    /// Portfolio vocabulary for the built-in profile.
    pub fn default_portfolio() -> Self {
        Self::portfolio(&Profile::default())
    }
}

/// Message for a name that is not in the table.
pub fn not_found_message(input: &str) -> String {
    format!(
        "Command not found: {}. Type '{}' for available commands.",
        input, HELP_COMMAND
    )
}

fn help_text() -> String {
    format!("Available commands: {}", PORTFOLIO_COMMANDS.join(", "))
}

fn whoami_text(profile: &Profile) -> String {
    let mut text = profile.name.clone();
    if !profile.role.is_empty() {
        if !text.is_empty() {
            text.push_str(" - ");
        }
        text.push_str(&profile.role);
    }
    if !profile.location.is_empty() {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&format!("({})", profile.location));
    }
    text
}

fn ls_text(profile: &Profile) -> String {
    profile
        .directories
        .iter()
        .map(|dir| format!("{}/", dir))
        .collect::<Vec<_>>()
        .join("  ")
}

fn projects_text(profile: &Profile) -> String {
    if profile.projects.is_empty() {
        return "No projects listed yet.".to_string();
    }
    let mut text = String::from("Projects:");
    for project in &profile.projects {
        text.push_str("\n  - ");
        text.push_str(project);
    }
    text
}

fn skills_text(profile: &Profile) -> String {
    format!("Skills: {}", profile.skills.join(", "))
}

fn contact_text(profile: &Profile) -> String {
    format!("Email: {}", profile.email)
}

fn social_text(profile: &Profile) -> String {
    format!("GitHub: {}\nLinkedIn: {}", profile.github, profile.linkedin)
}
