//! Portfolio owner data that the command responses are rendered from.

use serde::{Deserialize, Serialize};

/// Who the portfolio belongs to and what it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Full name shown by `whoami`
    pub name: String,
    /// Job title shown by `whoami`
    pub role: String,
    /// City or region shown by `whoami`
    pub location: String,
    /// Address shown by `contact`
    pub email: String,
    /// GitHub URL shown by `social`
    pub github: String,
    /// LinkedIn URL shown by `social`
    pub linkedin: String,
    /// Project one-liners shown by `projects`
    pub projects: Vec<String>,
    /// Skill names shown by `skills`
    pub skills: Vec<String>,
    /// Directory names shown by `ls`
    pub directories: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jordan Reyes".to_string(),
            role: "Software Engineer".to_string(),
            location: "Lisbon, Portugal".to_string(),
            email: "hello@jordanreyes.dev".to_string(),
            github: "https://github.com/jordanreyes".to_string(),
            linkedin: "https://linkedin.com/in/jordanreyes".to_string(),
            projects: vec![
                "E-Commerce Platform - full-stack storefront with payments".to_string(),
                "Task Manager - collaborative boards with realtime sync".to_string(),
                "Weather Dashboard - forecasts from a public weather API".to_string(),
            ],
            skills: vec![
                "Rust".to_string(),
                "TypeScript".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string(),
            ],
            directories: vec![
                "about".to_string(),
                "projects".to_string(),
                "skills".to_string(),
                "certificates".to_string(),
                "contact".to_string(),
            ],
        }
    }
}
