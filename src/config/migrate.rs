//! Config file checks and in-place upgrades.
//!
//! Older config files may miss keys added in later releases. `check`
//! reports them; `migrate` rewrites the file with defaults filled in.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;

const KNOWN_KEYS: [&str; 4] = [
    "database",
    "default_location",
    "distance_rules",
    "default_distance_km",
];

/// List the keys missing from the on-disk config file.
pub fn missing_keys() -> AppResult<Vec<&'static str>> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("Unreadable config file: {e}")))?;

    let mut missing = Vec::new();
    for key in KNOWN_KEYS {
        if doc.get(key).is_none() {
            missing.push(key);
        }
    }
    Ok(missing)
}

/// Report whether the config file carries every known key.
pub fn check() -> AppResult<()> {
    let missing = missing_keys()?;

    if missing.is_empty() {
        success("Configuration file is up to date.");
    } else {
        for key in &missing {
            warning(format!("Missing key: {}", key));
        }
        info("Run 'rworklog config --migrate' to fill in defaults.");
    }
    Ok(())
}

/// Rewrite the config file with missing keys filled from defaults.
/// Present values are preserved by the serde defaults on load.
pub fn migrate() -> AppResult<()> {
    let missing = missing_keys()?;

    if missing.is_empty() {
        success("Configuration file is up to date, nothing to migrate.");
        return Ok(());
    }

    let cfg = Config::load();
    let yaml = serde_yaml::to_string(&cfg)
        .map_err(|e| AppError::Config(format!("Config serialization: {e}")))?;
    fs::write(Config::config_file(), yaml)?;

    success(format!(
        "Configuration migrated, {} key(s) added.",
        missing.len()
    ));
    Ok(())
}
