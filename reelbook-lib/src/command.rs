//! Top-level commands accepted at the session prompt.

use std::fmt;

/// Menu shown before each command is read.
pub const MENU: &str = "Do you want to add, delete, edit a movie, or exit? (add/delete/edit/exit)";

/// Hint printed for unrecognized input.
pub const USAGE: &str = "Invalid choice. Please type add, delete, edit, or exit.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Edit,
    Exit,
    /// Anything else, kept as typed (after trimming).
    Invalid(String),
}

impl Command {
    /// Parse a command line. Matching ignores case and surrounding whitespace.
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "add" => Command::Add,
            "delete" => Command::Delete,
            "edit" => Command::Edit,
            "exit" => Command::Exit,
            _ => Command::Invalid(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add => write!(f, "add"),
            Command::Delete => write!(f, "delete"),
            Command::Edit => write!(f, "edit"),
            Command::Exit => write!(f, "exit"),
            Command::Invalid(s) => write!(f, "{s}"),
        }
    }
}
