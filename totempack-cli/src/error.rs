//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and exit codes.

use std::fmt;
use std::process;

use console::style;
use totempack::config::ConfigFileError;
use totempack::provider::HttpError;
use totempack::PackError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// HTTP client could not be created
    HttpClient(HttpError),
    /// The pack build failed
    Pack(PackError),
    /// Reading input or writing output failed
    Io(std::io::Error),
}

impl CliError {
    /// Exit the process with an error message and code 1.
    pub fn exit(&self) -> ! {
        match self {
            CliError::Pack(e) => eprintln!("{}", style(e.notice()).red()),
            other => eprintln!("{} {}", style("Error:").red().bold(), other),
        }

        match self {
            CliError::Pack(PackError::StaticAssetMissing { .. }) => {
                eprintln!();
                eprintln!("The pack descriptor and item model ship with totempack.");
                eprintln!("Set [assets] location in the config file or pass --assets <DIR|URL>.");
            }
            CliError::Pack(PackError::NotFound { .. }) => {
                eprintln!();
                eprintln!("Check the spelling; usernames are looked up exactly as typed.");
            }
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!(
                    "Fix the value in {} or run 'totempack init' on a fresh machine.",
                    totempack::config::config_file_path().display()
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Pack(e) => write!(f, "{}", e.notice()),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Pack(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<PackError> for CliError {
    fn from(e: PackError) -> Self {
        CliError::Pack(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_pack_error_displays_notice() {
        let err = CliError::from(PackError::NotFound {
            username: "ghost".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Error creating the resource pack: User 'ghost' not found or does not have a public skin."
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_empty_username_notice() {
        let err = CliError::from(PackError::EmptyUsername);
        assert_eq!(err.to_string(), "Please provide a username.");
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::from(ConfigFileError::InvalidValue {
            section: "preview".to_string(),
            key: "debounce_ms".to_string(),
            value: "soon".to_string(),
            reason: "must be a non-negative integer (milliseconds)".to_string(),
        });
        assert!(err.to_string().starts_with("Configuration error: Invalid configuration: preview.debounce_ms"));
    }

    #[test]
    fn test_logging_error_has_no_source() {
        let err = CliError::LoggingInit("busy".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: busy");
        assert!(err.source().is_none());
    }
}
