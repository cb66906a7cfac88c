//! Configuration loading and data folder resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Name of the SQLite database file inside the data folder
pub const DATABASE_FILE: &str = "dialog.db";

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&str>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(data_folder) = config.get("data_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(data_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_data_folder()
}

/// Full path of the database file inside the given data folder
pub fn database_path(data_folder: &std::path::Path) -> PathBuf {
    data_folder.join(DATABASE_FILE)
}

/// Create the data folder if it does not exist yet
pub fn ensure_data_folder(data_folder: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(data_folder)?;
    Ok(())
}

/// Get default configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/dialog/config.toml first, then /etc/dialog/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("dialog").join("config.toml"));
        let system_config = PathBuf::from("/etc/dialog/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("dialog").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// Get OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("dialog"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/dialog"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("dialog"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/dialog"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("dialog"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\dialog"))
    } else {
        PathBuf::from("./dialog_data")
    }
}
