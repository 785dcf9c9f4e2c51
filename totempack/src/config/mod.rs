//! User configuration stored in `~/.totempack/config.ini`.
//!
//! Settings structs live in [`settings`], constants in [`defaults`],
//! parsing in `parser`, and serialization in `writer`.
//!
//! # Example
//!
//! ```
//! use totempack::config::{ConfigFile, DEFAULT_SKIN_SERVICE_URL};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.service.skin_url, DEFAULT_SKIN_SERVICE_URL);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use settings::{
    AssetsSettings, LoggingSettings, OutputSettings, ServiceSettings, ViewerSettings,
};
