//! The `starlet` binary: resolves configuration, starts logging, and runs
//! the engine through its startup sequence.
//!
//! Run with: `cargo run -p starlet-app`

use std::path::PathBuf;

use clap::Parser;
use starlet_app::bootstrap::{self, LaunchSettings};
use starlet_app::platform::PlatformDirs;
use starlet_assets::AssetPaths;
use starlet_config::{CliArgs, Config};
use starlet_engine::Engine;
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    // Logging depends on the config, so problems found before it is up are
    // collected and reported afterwards.
    let mut deferred_warnings = Vec::new();

    let platform_dirs = match PlatformDirs::resolve() {
        Ok(dirs) => {
            if let Err(e) = dirs.create_dirs() {
                deferred_warnings.push(format!("Could not create platform directories: {e}"));
            }
            Some(dirs)
        }
        Err(e) => {
            deferred_warnings.push(format!("Platform directories unavailable: {e}"));
            None
        }
    };

    let config_dir: Option<PathBuf> = args
        .config
        .clone()
        .or_else(|| platform_dirs.as_ref().map(|d| d.config_dir.clone()));

    let mut config = match config_dir.as_deref().map(Config::load_or_create) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            deferred_warnings.push(format!("Using default config: {e}"));
            Config::default()
        }
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = platform_dirs.as_ref().map(|d| d.log_dir.as_path());
    starlet_log::init_logging(log_dir, cfg!(debug_assertions), Some(&config));
    for warning in &deferred_warnings {
        warn!("{warning}");
    }

    let settings = LaunchSettings::from_config(&config);

    if args.list_scenes {
        std::process::exit(list_scenes(&settings));
    }

    info!(
        "Starlet: {}x{} | {:?} | scene {:?} | assets {}",
        settings.width,
        settings.height,
        settings.title,
        settings.scene,
        settings.asset_root.display()
    );

    let code = {
        let mut engine = Engine::with_config(&config);
        bootstrap::launch(&mut engine, &settings).exit_code()
    };
    std::process::exit(code);
}

/// Prints the scene names under the asset root. Returns the exit code.
fn list_scenes(settings: &LaunchSettings) -> i32 {
    match AssetPaths::new(&settings.asset_root).list_scenes() {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
            0
        }
        Err(e) => {
            error!("Failed to list scenes: {e}");
            1
        }
    }
}
