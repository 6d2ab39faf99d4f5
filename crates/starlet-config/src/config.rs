//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Asset location.
    pub assets: AssetConfig,
    /// Startup scene selection.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in borderless fullscreen.
    pub fullscreen: bool,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Asset configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Asset root directory. `None` uses the directory baked in at build time.
    pub root: Option<PathBuf>,
}

/// Scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Name of the scene loaded at startup.
    pub startup: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Append the measured frame rate to the window title.
    pub show_fps: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fullscreen: false,
            vsync: true,
            title: "Starlet Project".to_string(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            startup: "EmptyScene".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: false,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let write_error = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_startup_window() {
        let config = Config::default();
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.window.height, 1080);
        assert_eq!(config.window.title, "Starlet Project");
        assert_eq!(config.scene.startup, "EmptyScene");
        assert!(config.assets.root.is_none());
    }

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1920"));
        assert!(ron_str.contains("startup: \"EmptyScene\""));
    }

    #[test]
    fn test_config_roundtrip_with_asset_root() {
        let mut config = Config::default();
        config.assets.root = Some(PathBuf::from("content"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (width: 800))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 1080);
        assert_eq!(config.scene, SceneConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 1280;
        config.window.height = 720;
        config.scene.startup = "Hangar".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        let expected = dir.path().join(CONFIG_FILE_NAME);
        assert!(matches!(result, Err(ConfigError::Parse { ref path, .. }) if *path == expected));
    }

    #[test]
    fn test_error_message_names_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "(window: (width: -1))").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_save_into_file_reports_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let err = Config::default().save(&blocker).unwrap_err();
        assert!(matches!(err, ConfigError::Write { path, .. } if path == blocker.join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// Starlet settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
