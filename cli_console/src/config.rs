//! Command-line configuration

use crate::error::ConsoleError;
use std::path::PathBuf;

/// Console host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Settings overrides file
    pub settings_path: Option<PathBuf>,
    /// Start with an empty program regardless of settings
    pub program_empty: bool,
    /// Print usage and exit
    pub show_help: bool,
}

/// Parses arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<ConsoleConfig, ConsoleError> {
    let mut config = ConsoleConfig::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" | "-s" => {
                let path = args
                    .next()
                    .ok_or_else(|| ConsoleError::MissingValue("--settings".to_string()))?;
                config.settings_path = Some(PathBuf::from(path));
            }
            "--program-empty" => {
                config.program_empty = true;
            }
            "--help" | "-h" => {
                config.show_help = true;
            }
            other => return Err(ConsoleError::UnknownOption(other.to_string())),
        }
    }

    Ok(config)
}

pub fn usage(program: &str) -> Vec<String> {
    vec![
        format!("Usage: {} [OPTIONS]", program),
        String::new(),
        "Options:".to_string(),
        "  -s, --settings <FILE>    Load settings overrides from a JSON file".to_string(),
        "  --program-empty          Start with an empty program".to_string(),
        "  -h, --help               Show this help message".to_string(),
    ]
}
