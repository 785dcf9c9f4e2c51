//! INI serialization: `ConfigFile` to the commented text written to disk.

use std::path::Path;

use super::settings::ConfigFile;

/// Render `config` as a commented INI string.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[service]
; Base URL of the skin service. Skins are fetched from <skin_url>/skin/<username>
; and pack icons from <skin_url>/avatar/<username>/256.png
skin_url = {}

[assets]
; Directory or http(s) base URL holding pack.mcmeta and
; assets/minecraft/models/item/totem_of_undying.json
location = {}

[output]
; Directory finished <username>.zip archives are written to
directory = {}

[logging]
; Log file, truncated at the start of each run
file = {}

[preview]
; Milliseconds of quiet before a username change reaches the 3D viewer
debounce_ms = {}
"#,
        config.service.skin_url,
        config.assets.location,
        path_to_string(&config.output.directory),
        path_to_string(&config.logging.file),
        config.preview.debounce_ms,
    )
}

/// Display a path, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_every_section_written() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[service]", "[assets]", "[output]", "[logging]", "[preview]"] {
            assert!(content.contains(section), "missing {}", section);
        }
        assert!(content.contains("skin_url = https://mineskin.eu"));
        assert!(content.contains("debounce_ms = 500"));
    }

    #[test]
    fn test_home_collapsed_to_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("packs")), "~/packs");
        }
        assert_eq!(path_to_string(&PathBuf::from("/srv/packs")), "/srv/packs");
    }
}
