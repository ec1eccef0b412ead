use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::paths;
use callsheet_types::{SheetDefaults, TempUnit};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

const MIN_DEBOUNCE_MS: u64 = 100;
const MAX_DEBOUNCE_MS: u64 = 60_000;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    autosave: AutosaveConfig,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    export: ExportConfig,
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct AutosaveConfig {
    enabled: Option<bool>,
    debounce_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct StorageConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct ExportConfig {
    dir: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    title: Option<String>,
    shoot_day: Option<String>,
    general_crew_call: Option<String>,
    temp_unit: Option<String>,
}

pub struct Config {
    autosave: AutosaveConfig,
    storage: StorageConfig,
    export: ExportConfig,
    defaults: DefaultsConfig,
}

impl Config {
    /// Embedded defaults merged with the user's config file, if any.
    pub fn load() -> Self {
        let mut config = Self::embedded();
        if let Some(path) = paths::user_config_path() {
            if path.exists() {
                config.merge_file(&path);
            }
        }
        config
    }

    /// Embedded defaults only.
    pub fn embedded() -> Self {
        let base = match toml::from_str::<ConfigFile>(DEFAULT_CONFIG) {
            Ok(base) => base,
            Err(e) => {
                log::error!(target: "config", "embedded config.toml is invalid: {}", e);
                ConfigFile::default()
            }
        };
        Self::from_file(base)
    }

    fn from_file(file: ConfigFile) -> Self {
        Self {
            autosave: file.autosave,
            storage: file.storage,
            export: file.export,
            defaults: file.defaults,
        }
    }

    /// Overlay keys from a user file. Malformed files are logged and ignored.
    pub fn merge_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(contents) => self.merge_str(&contents, path),
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
    }

    fn merge_str(&mut self, contents: &str, origin: &Path) {
        match toml::from_str::<ConfigFile>(contents) {
            Ok(user) => {
                merge_autosave(&mut self.autosave, user.autosave);
                merge_storage(&mut self.storage, user.storage);
                merge_export(&mut self.export, user.export);
                merge_defaults(&mut self.defaults, user.defaults);
            }
            Err(e) => {
                log::warn!(target: "config", "ignoring malformed config {}: {}", origin.display(), e)
            }
        }
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave.enabled.unwrap_or(true)
    }

    /// Quiet period before an autosave (clamped to 100ms..60s).
    pub fn debounce(&self) -> Duration {
        let ms = self
            .autosave
            .debounce_ms
            .unwrap_or(1000)
            .clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS);
        Duration::from_millis(ms)
    }

    pub fn store_path(&self) -> PathBuf {
        self.storage.path.clone().unwrap_or_else(paths::default_store_path)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export.dir.clone().unwrap_or_else(paths::default_export_dir)
    }

    pub fn sheet_defaults(&self) -> SheetDefaults {
        let fallback = SheetDefaults::default();
        SheetDefaults {
            title: self.defaults.title.clone().unwrap_or(fallback.title),
            shoot_day: self.defaults.shoot_day.clone().unwrap_or(fallback.shoot_day),
            general_crew_call: self
                .defaults
                .general_crew_call
                .clone()
                .unwrap_or(fallback.general_crew_call),
            temp_unit: self
                .defaults
                .temp_unit
                .as_deref()
                .and_then(TempUnit::parse)
                .unwrap_or(fallback.temp_unit),
        }
    }
}

fn merge_autosave(base: &mut AutosaveConfig, user: AutosaveConfig) {
    if user.enabled.is_some() {
        base.enabled = user.enabled;
    }
    if user.debounce_ms.is_some() {
        base.debounce_ms = user.debounce_ms;
    }
}

fn merge_storage(base: &mut StorageConfig, user: StorageConfig) {
    if user.path.is_some() {
        base.path = user.path;
    }
}

fn merge_export(base: &mut ExportConfig, user: ExportConfig) {
    if user.dir.is_some() {
        base.dir = user.dir;
    }
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.title.is_some() {
        base.title = user.title;
    }
    if user.shoot_day.is_some() {
        base.shoot_day = user.shoot_day;
    }
    if user.general_crew_call.is_some() {
        base.general_crew_call = user.general_crew_call;
    }
    if user.temp_unit.is_some() {
        base.temp_unit = user.temp_unit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("test.toml")
    }

    #[test]
    fn test_load_embedded_config() {
        let config = Config::embedded();
        assert!(config.autosave_enabled());
        assert_eq!(config.debounce(), Duration::from_millis(1000));
        let defaults = config.sheet_defaults();
        assert_eq!(defaults.title, "YOUR MOVIE NAME");
        assert_eq!(defaults.shoot_day, "1");
        assert_eq!(defaults.general_crew_call, "8:00");
        assert_eq!(defaults.temp_unit, TempUnit::F);
    }

    #[test]
    fn test_partial_override() {
        let mut config = Config::embedded();
        config.merge_str("[defaults]\ntitle = \"Night Shoot\"\ntemp_unit = \"C\"\n", origin());
        let defaults = config.sheet_defaults();
        assert_eq!(defaults.title, "Night Shoot");
        assert_eq!(defaults.temp_unit, TempUnit::C);
        assert_eq!(defaults.shoot_day, "1");
        assert!(config.autosave_enabled());
    }

    #[test]
    fn test_debounce_is_clamped() {
        let mut config = Config::embedded();
        config.merge_str("[autosave]\ndebounce_ms = 5\n", origin());
        assert_eq!(config.debounce(), Duration::from_millis(MIN_DEBOUNCE_MS));
        config.merge_str("[autosave]\ndebounce_ms = 999999\n", origin());
        assert_eq!(config.debounce(), Duration::from_millis(MAX_DEBOUNCE_MS));
    }

    #[test]
    fn test_malformed_override_is_ignored() {
        let mut config = Config::embedded();
        config.merge_str("[autosave\nenabled = ", origin());
        assert!(config.autosave_enabled());
        assert_eq!(config.sheet_defaults().title, "YOUR MOVIE NAME");
    }

    #[test]
    fn test_storage_and_export_paths() {
        let mut config = Config::embedded();
        assert!(config.store_path().ends_with("callsheet.sqlite"));
        config.merge_str("[storage]\npath = \"/tmp/x.sqlite\"\n[export]\ndir = \"/tmp/out\"\n", origin());
        assert_eq!(config.store_path(), PathBuf::from("/tmp/x.sqlite"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_unknown_unit_falls_back() {
        let mut config = Config::embedded();
        config.merge_str("[defaults]\ntemp_unit = \"K\"\n", origin());
        assert_eq!(config.sheet_defaults().temp_unit, TempUnit::F);
    }
}
