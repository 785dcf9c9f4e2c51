//! CLI runner for common setup.
//!
//! Loads the configuration file and initializes logging so command handlers
//! start from the same state.

use tracing::info;
use totempack::config::{default_log_file, ConfigFile};
use totempack::logging::{init_logging, split_log_path, LoggingGuard};

use crate::error::CliError;

/// Keeps logging alive and holds the loaded configuration.
pub struct CliRunner {
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and start logging.
    ///
    /// Log events are mirrored to stderr only when `stderr_logging` is set, so
    /// stdout stays reserved for command output.
    pub fn new(debug: bool, stderr_logging: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file)
            .or_else(|| split_log_path(&default_log_file()))
            .ok_or_else(|| {
                CliError::LoggingInit(format!(
                    "invalid log file path '{}'",
                    config.logging.file.display()
                ))
            })?;

        let logging_guard = init_logging(&log_dir, &log_file, stderr_logging, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("totempack v{}", totempack::VERSION);
        info!(
            log_file = %self.logging_guard.log_path().display(),
            "totempack CLI: {} command", command
        );
    }
}
