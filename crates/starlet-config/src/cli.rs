//! Command-line argument parsing for Starlet.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Starlet command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "starlet", about = "Starlet engine launcher")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Window title.
    #[arg(long)]
    pub title: Option<String>,

    /// Start in borderless fullscreen.
    #[arg(long)]
    pub fullscreen: Option<bool>,

    /// Asset root directory.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Scene to load at startup.
    #[arg(long)]
    pub scene: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the scenes available under the asset root and exit.
    #[arg(long)]
    pub list_scenes: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref title) = args.title {
            self.window.title = title.clone();
        }
        if let Some(fs) = args.fullscreen {
            self.window.fullscreen = fs;
        }
        if let Some(ref root) = args.assets {
            self.assets.root = Some(root.clone());
        }
        if let Some(ref scene) = args.scene {
            self.scene.startup = scene.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1280),
            scene: Some("Hangar".to_string()),
            assets: Some(PathBuf::from("/srv/assets")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.scene.startup, "Hangar");
        assert_eq!(config.assets.root, Some(PathBuf::from("/srv/assets")));
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 1080);
        assert_eq!(config.window.title, "Starlet Project");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "starlet",
            "--width",
            "640",
            "--fullscreen",
            "true",
            "--log-level",
            "debug",
            "--list-scenes",
        ]);
        assert_eq!(args.width, Some(640));
        assert_eq!(args.fullscreen, Some(true));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.list_scenes);
        assert!(args.scene.is_none());
    }
}
