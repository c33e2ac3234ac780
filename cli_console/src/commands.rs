//! # Console Commands
//!
//! - `clear` - Empty the transcript
//! - `help` - List the console commands
//! - `interpret` - Run the program
//!
//! Anything else is reported as not recognized.

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Clear,
    Help,
    Interpret,
    Unknown(String),
}

pub const HELP_LINE: &str = "Available commands: clear, help, interpret";

impl ConsoleCommand {
    /// Parses a console input line; blank input is ignored
    pub fn parse(input: &str) -> Option<Self> {
        let command = match input.trim() {
            "" => return None,
            "clear" => ConsoleCommand::Clear,
            "help" => ConsoleCommand::Help,
            "interpret" => ConsoleCommand::Interpret,
            _ => ConsoleCommand::Unknown(input.to_string()),
        };
        Some(command)
    }
}

/// Key reference shown when help is requested from the editor
pub const KEY_HELP: [&str; 4] = [
    "Normal mode: h/l move left/right, j/k move down/up",
    "Normal mode: a insert, d delete selected node, r run program, ? help",
    "Insert mode: type text, Enter to commit, Esc to return to normal mode",
    "Lines starting with ':' are console commands (:help for the list)",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(ConsoleCommand::parse("clear"), Some(ConsoleCommand::Clear));
        assert_eq!(ConsoleCommand::parse("  help "), Some(ConsoleCommand::Help));
        assert_eq!(
            ConsoleCommand::parse("interpret"),
            Some(ConsoleCommand::Interpret)
        );
    }

    #[test]
    fn test_parse_unknown_keeps_input() {
        assert_eq!(
            ConsoleCommand::parse("run it"),
            Some(ConsoleCommand::Unknown("run it".to_string()))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(ConsoleCommand::parse("   "), None);
    }
}
