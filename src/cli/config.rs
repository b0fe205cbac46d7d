//! Shared setup for CLI commands: logging and engine configuration

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::{app::EngineConfig, search::Difficulty, tictactoe::Mark};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` for this
/// crate and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "oxo=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the engine configuration file if one was given, else the defaults
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load engine config from {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Apply command-line overrides on top of a loaded configuration
pub fn apply_overrides(
    config: EngineConfig,
    computer: Option<Mark>,
    difficulty: Option<Difficulty>,
) -> EngineConfig {
    let config = match computer {
        Some(mark) => config.with_computer(mark),
        None => config,
    };
    match difficulty {
        Some(difficulty) => config.with_difficulty(difficulty),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DepthLimit;

    #[test]
    fn test_overrides_replace_file_values() {
        let base = EngineConfig::new(Mark::O).with_depth_limit(DepthLimit::Plies(6));
        let config = apply_overrides(base, Some(Mark::X), Some(Difficulty::Easy));
        assert_eq!(config.computer, Mark::X);
        assert_eq!(config.depth_limit, DepthLimit::Plies(2));

        let untouched = apply_overrides(base, None, None);
        assert_eq!(untouched, base);
    }

    #[test]
    fn test_missing_config_path_uses_defaults() {
        assert_eq!(load_engine_config(None).unwrap(), EngineConfig::default());
        assert!(load_engine_config(Some(Path::new("/nonexistent/oxo.json"))).is_err());
    }
}
