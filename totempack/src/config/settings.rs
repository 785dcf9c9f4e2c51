//! Settings structs, one per `[section]` of the INI file.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub service: ServiceSettings,
    pub assets: AssetsSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
    pub preview: ViewerSettings,
}

/// `[service]`
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    /// Base URL of the skin service.
    pub skin_url: String,
}

/// `[assets]`
#[derive(Debug, Clone, PartialEq)]
pub struct AssetsSettings {
    /// Directory or http(s) base URL holding the static pack files.
    pub location: String,
}

/// `[output]`
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Directory finished archives are written to.
    pub directory: PathBuf,
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file, truncated at the start of each session.
    pub file: PathBuf,
}

/// `[preview]`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    /// Quiet period before a username change reaches the viewer.
    pub debounce_ms: u64,
}

impl ViewerSettings {
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
