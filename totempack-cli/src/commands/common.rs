//! Settings shared across commands: CLI arguments take precedence over the
//! config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use totempack::config::ConfigFile;

/// Effective settings for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub skin_url: String,
    pub assets: String,
    pub output_dir: PathBuf,
}

/// Overlay CLI overrides onto the loaded config.
pub fn resolve_settings(
    config: &ConfigFile,
    skin_service: Option<&str>,
    assets: Option<&str>,
    output: Option<&Path>,
) -> ResolvedSettings {
    ResolvedSettings {
        skin_url: skin_service
            .map(str::to_string)
            .unwrap_or_else(|| config.service.skin_url.clone()),
        assets: assets
            .map(str::to_string)
            .unwrap_or_else(|| config.assets.location.clone()),
        output_dir: output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.output.directory.clone()),
    }
}

/// Debounce window from an override or the config file.
pub fn resolve_debounce(config: &ConfigFile, debounce_ms: Option<u64>) -> Duration {
    debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.preview.debounce())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_values_without_overrides() {
        let config = ConfigFile::default();
        let resolved = resolve_settings(&config, None, None, None);

        assert_eq!(resolved.skin_url, config.service.skin_url);
        assert_eq!(resolved.assets, config.assets.location);
        assert_eq!(resolved.output_dir, config.output.directory);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = ConfigFile::default();
        let resolved = resolve_settings(
            &config,
            Some("http://localhost:9000"),
            Some("https://example.com/3dTotem"),
            Some(Path::new("/tmp/packs")),
        );

        assert_eq!(resolved.skin_url, "http://localhost:9000");
        assert_eq!(resolved.assets, "https://example.com/3dTotem");
        assert_eq!(resolved.output_dir, PathBuf::from("/tmp/packs"));
    }

    #[test]
    fn test_resolve_debounce() {
        let mut config = ConfigFile::default();
        config.preview.debounce_ms = 250;

        assert_eq!(resolve_debounce(&config, None), Duration::from_millis(250));
        assert_eq!(resolve_debounce(&config, Some(10)), Duration::from_millis(10));
    }
}
