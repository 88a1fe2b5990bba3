//! Search configuration, loadable from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tuning knobs for [`Searcher`](crate::Searcher).
///
/// Every key is optional in TOML; missing keys take the defaults, which
/// describe a sequential, unbounded, pruned search.
///
/// ```toml
/// pruning = true
/// parallel = false
/// max_depth = 4
/// time_limit_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Skip subtrees once `alpha >= beta`. Off means exhaustive minimax.
    pruning: bool,

    /// Search the root's children on the rayon pool.
    parallel: bool,

    /// Plies to look ahead before falling back to the heuristic.
    /// `None` searches to the end of the game.
    max_depth: Option<u32>,

    /// Wall-clock budget per search, in milliseconds.
    time_limit_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            parallel: false,
            max_depth: None,
            time_limit_ms: None,
        }
    }
}

impl SearchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading search config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Search config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// The time limit as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Turns alpha-beta pruning on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Turns the parallel root on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Limits lookahead to `plies`.
    pub fn with_max_depth(mut self, plies: u32) -> Self {
        self.max_depth = Some(plies);
        self
    }

    /// Limits each search to `limit` of wall-clock time.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }
}
