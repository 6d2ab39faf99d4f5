//! Structured logging for Starlet.
//!
//! Console output with uptime timestamps and module paths, plus JSON file
//! logging in debug builds. The level comes from `RUST_LOG` when set, then
//! from the loaded configuration, then from [`DEFAULT_FILTER`].

use starlet_config::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "starlet.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (only used when `debug_build`)
/// * `debug_build` - enables the file layer
/// * `config` - optional configuration supplying `debug.log_level`
///
/// ```no_run
/// use starlet_config::Config;
///
/// let config = Config::default();
/// starlet_log::init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_env_filter(config));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_file_path(log_dir))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directive string derived from the config, falling back to [`DEFAULT_FILTER`].
pub fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// `EnvFilter` from the configured level. A level that does not parse falls
/// back to [`default_env_filter`].
pub fn config_env_filter(config: Option<&Config>) -> EnvFilter {
    EnvFilter::try_new(filter_string(config)).unwrap_or_else(|_| default_env_filter())
}

/// Location of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_quiets_gpu_crates() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_filter_string_without_config() {
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_filter_string_uses_config_level() {
        let mut config = Config::default();
        config.debug.log_level = "debug,starlet_engine=trace".to_string();
        assert_eq!(filter_string(Some(&config)), "debug,starlet_engine=trace");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_config_env_filter_uses_config_level() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        assert!(config_env_filter(Some(&config)).to_string().contains("debug"));
    }

    #[test]
    fn test_unparseable_level_falls_back_to_default() {
        let mut config = Config::default();
        config.debug.log_level = "starlet=loudest".to_string();
        let filter_str = config_env_filter(Some(&config)).to_string();
        assert!(filter_str.contains("wgpu=warn"));
        assert!(!filter_str.contains("loudest"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,starlet_render=trace",
            "warn,starlet_scene=debug,starlet_engine=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = log_file_path(temp_dir.path());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert_eq!(path.parent(), Some(temp_dir.path()));
    }
}
