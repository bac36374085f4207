use crate::config::types::{Settings, SettingsFormat};
use crate::config::validation::sanitize;
use crate::ConfigError;
use std::path::Path;

/// Parses settings from raw file content
///
/// Keys that are absent keep their default values and unknown keys are
/// ignored. Values that parse but are out of range are reset to their
/// defaults one key at a time.
///
/// # Arguments
///
/// * `content` - The raw configuration text
/// * `format` - Whether the text is TOML or JSON
///
/// # Returns
///
/// * `Ok(Settings)` - Successfully parsed settings, out-of-range values reset
/// * `Err(ConfigError)` - The content could not be parsed
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<Settings, ConfigError> {
    let settings: Settings = match format {
        SettingsFormat::Toml => toml::from_str(content)?,
        SettingsFormat::Json => serde_json::from_str(content)?,
    };

    Ok(sanitize(settings))
}

/// Reads and parses a settings file, picking the format from its extension
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use contact_gatherer::config::try_load_settings;
///
/// let settings = try_load_settings(Path::new("config/settings.example.toml")).unwrap();
/// println!("Max pages: {}", settings.max_pages);
/// ```
pub fn try_load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content, SettingsFormat::from_path(path))
}

/// Loads settings, falling back to defaults on any problem
///
/// A missing file is reported as a warning, an unreadable or malformed file
/// as an error. Neither aborts the run.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };

    if !path.exists() {
        tracing::warn!(
            "Config file '{}' not found, using default settings",
            path.display()
        );
        return Settings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            tracing::info!("Configuration loaded from {}", path.display());
            settings
        }
        Err(e) => {
            tracing::error!(
                "Failed to read config file '{}': {}; using default settings",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}
