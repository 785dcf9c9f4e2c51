//! Default values for every configuration setting.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;

pub use crate::provider::DEFAULT_SKIN_SERVICE_URL;

/// Static pack files shipped with the crate.
pub const DEFAULT_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/totem");

/// Archives land in the working directory unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Log file name inside the log directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "totempack.log";

pub const DEFAULT_PREVIEW_DEBOUNCE_MS: u64 = 500;

/// Default log file: `~/.totempack/logs/totempack.log`.
pub fn default_log_file() -> PathBuf {
    config_directory().join("logs").join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            service: ServiceSettings {
                skin_url: DEFAULT_SKIN_SERVICE_URL.to_string(),
            },
            assets: AssetsSettings {
                location: DEFAULT_ASSETS_DIR.to_string(),
            },
            output: OutputSettings {
                directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
            preview: ViewerSettings {
                debounce_ms: DEFAULT_PREVIEW_DEBOUNCE_MS,
            },
        }
    }
}
