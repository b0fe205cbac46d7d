//! Configuration types for the computer player.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{DepthLimit, Difficulty},
    tictactoe::Mark,
};

/// Configuration for the search engine.
///
/// # Examples
///
/// ```
/// use oxo::app::EngineConfig;
/// use oxo::search::{DepthLimit, Difficulty};
/// use oxo::tictactoe::Mark;
///
/// let config = EngineConfig::new(Mark::X).with_difficulty(Difficulty::Medium);
/// assert_eq!(config.depth_limit, DepthLimit::Plies(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mark the engine plays and maximizes for
    pub computer: Mark,
    /// How far the search looks ahead
    pub depth_limit: DepthLimit,
    /// Answer with the center whenever it is free instead of searching
    pub opening_shortcut: bool,
}

impl EngineConfig {
    /// Create a configuration for the given computer mark.
    ///
    /// Uses default values for other parameters:
    /// - Depth limit: `DepthLimit::Unlimited`
    /// - Opening shortcut: enabled
    pub fn new(computer: Mark) -> Self {
        Self {
            computer,
            depth_limit: DepthLimit::Unlimited,
            opening_shortcut: true,
        }
    }

    /// Set the depth limit.
    pub fn with_depth_limit(mut self, depth_limit: DepthLimit) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Set the depth limit from a difficulty preset.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.depth_limit = difficulty.depth_limit();
        self
    }

    /// Set the computer's mark.
    pub fn with_computer(mut self, computer: Mark) -> Self {
        self.computer = computer;
        self
    }

    /// Always search, even when the center is free.
    pub fn without_opening_shortcut(mut self) -> Self {
        self.opening_shortcut = false;
        self
    }

    /// The mark the engine plays against
    pub fn human(&self) -> Mark {
        self.computer.opponent()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open engine config '{}'", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        if !config.depth_limit.keeps_heuristic_bounded() {
            tracing::warn!(
                depth_limit = %config.depth_limit,
                max = DepthLimit::MAX_BOUNDED_PLIES,
                "depth limit lets cutoff scores tie terminal scores"
            );
        }
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create engine config '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.computer, Mark::O);
        assert_eq!(config.human(), Mark::X);
        assert_eq!(config.depth_limit, DepthLimit::Unlimited);
        assert!(config.opening_shortcut);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "depth_limit": { "plies": 2 } }"#).unwrap();
        assert_eq!(config.depth_limit, DepthLimit::Plies(2));
        assert_eq!(config.computer, Mark::O);
        assert!(config.opening_shortcut);

        let config: EngineConfig =
            serde_json::from_str(r#"{ "computer": "X", "depth_limit": "unlimited" }"#).unwrap();
        assert_eq!(config.computer, Mark::X);
        assert_eq!(config.depth_limit, DepthLimit::Unlimited);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = EngineConfig::load("/nonexistent/oxo.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/oxo.json"));
    }
}
