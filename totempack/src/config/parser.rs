//! INI parsing: `Ini` to `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Empty values keep the default.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [service]
    if let Some(section) = ini.section(Some("service")) {
        if let Some(v) = non_empty(section.get("skin_url")) {
            if !is_http_url(v) {
                return Err(invalid(
                    "service",
                    "skin_url",
                    v,
                    "must start with http:// or https://",
                ));
            }
            config.service.skin_url = v.to_string();
        }
    }

    // [assets]
    if let Some(section) = ini.section(Some("assets")) {
        if let Some(v) = non_empty(section.get("location")) {
            config.assets.location = if is_http_url(v) {
                v.to_string()
            } else {
                expand_tilde(v).display().to_string()
            };
        }
    }

    // [output]
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = non_empty(section.get("directory")) {
            config.output.directory = expand_tilde(v);
        }
    }

    // [logging]
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("file")) {
            config.logging.file = expand_tilde(v);
        }
    }

    // [preview]
    if let Some(section) = ini.section(Some("preview")) {
        if let Some(v) = non_empty(section.get("debounce_ms")) {
            config.preview.debounce_ms = v.parse().map_err(|_| {
                invalid(
                    "preview",
                    "debounce_ms",
                    v,
                    "must be a non-negative integer (milliseconds)",
                )
            })?;
        }
    }

    Ok(config)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_overlay_values() {
        let config = parse(
            "[service]\nskin_url = http://localhost:9000\n\
             [assets]\nlocation = /srv/totem\n\
             [output]\ndirectory = /tmp/out\n\
             [preview]\ndebounce_ms = 100\n",
        )
        .unwrap();

        assert_eq!(config.service.skin_url, "http://localhost:9000");
        assert_eq!(config.assets.location, "/srv/totem");
        assert_eq!(config.output.directory, PathBuf::from("/tmp/out"));
        assert_eq!(config.preview.debounce_ms, 100);
        assert_eq!(config.logging.file, default_log_file());
    }

    #[test]
    fn test_remote_assets_location_kept_verbatim() {
        let config = parse("[assets]\nlocation = https://example.com/3dTotem\n").unwrap();
        assert_eq!(config.assets.location, "https://example.com/3dTotem");
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = parse("[service]\nskin_url =\n").unwrap();
        assert_eq!(config.service.skin_url, DEFAULT_SKIN_SERVICE_URL);
    }

    #[test]
    fn test_invalid_skin_url() {
        let err = parse("[service]\nskin_url = mineskin.eu\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                ..
            } => {
                assert_eq!(section, "service");
                assert_eq!(key, "skin_url");
                assert_eq!(value, "mineskin.eu");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_debounce() {
        let err = parse("[preview]\ndebounce_ms = soon\n").unwrap_err();
        assert!(err.to_string().contains("preview.debounce_ms = 'soon'"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/packs"), home.join("packs"));
        }
    }
}
