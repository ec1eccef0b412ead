//! Filesystem locations used by the editor.

use std::path::PathBuf;

const APP_DIR: &str = "callsheet";

/// `<config_dir>/callsheet`, where user config and keybinding overrides live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

pub fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

pub fn user_keybindings_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("keybindings.toml"))
}

/// Log file path, falling back to the temp directory when no config dir exists.
pub fn log_path() -> PathBuf {
    config_dir()
        .map(|d| d.join("callsheet.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("callsheet.log"))
}

/// Default SQLite store: `<data_dir>/callsheet/callsheet.sqlite`.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("callsheet.sqlite")
}

pub fn default_export_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_file_name() {
        assert!(default_store_path().ends_with("callsheet.sqlite"));
    }

    #[test]
    fn log_path_has_file_name() {
        assert_eq!(log_path().file_name().and_then(|n| n.to_str()), Some("callsheet.log"));
    }
}
