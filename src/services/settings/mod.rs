//! Loading settings from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform config location, e.g. `~/.config/climb-calendar/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ClimbingProject", "climb-calendar")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let settings: Settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    check_date_format(&settings.date_format)
        .with_context(|| format!("invalid date_format in {}", path.display()))?;

    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Reject strftime patterns chrono cannot render.
pub fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("unsupported specifier in {:?}", format);
    }
    Ok(())
}

/// The explicit path if given, else the platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load from an explicit path, else the platform default, else defaults.
pub fn load_settings_or_default(explicit: Option<&Path>) -> Result<Settings> {
    match resolve_config_path(explicit) {
        Some(path) => load_settings(&path),
        None => {
            log::warn!("No config directory available, using default settings");
            Ok(Settings::default())
        }
    }
}
