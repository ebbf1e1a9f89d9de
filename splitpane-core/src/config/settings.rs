//! Settings file model
//!
//! ```toml
//! [navigation]
//! tolerance = 0.001
//!
//! [logging]
//! level = "info"
//! file = "/tmp/splitpane.log"
//! thread_ids = false
//!
//! [state]
//! file = "/home/user/.local/share/splitpane/layout.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::split::NavigationConfig;
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directional navigation tuning.
    pub navigation: NavigationConfig,
    /// Log output.
    pub logging: LoggingSettings,
    /// Layout snapshot location.
    pub state: StateSettings,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level, one of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Log file, truncated on start. Logs go to stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Include thread IDs in log lines.
    pub thread_ids: bool,
    /// Raw `EnvFilter` directive, overriding `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: TracingLevel::default().to_string(),
            file: None,
            thread_ids: false,
            filter: None,
        }
    }
}

impl LoggingSettings {
    /// Returns the configured level, falling back to `info` for unknown names.
    #[must_use]
    pub fn tracing_level(&self) -> TracingLevel {
        self.level.parse().unwrap_or_default()
    }

    /// Builds the subscriber configuration for `level`, which callers
    /// derive from [`Self::tracing_level`] and their verbosity flags.
    #[must_use]
    pub fn tracing_config(&self, level: TracingLevel) -> TracingConfig {
        let output = self
            .file
            .clone()
            .map_or(TracingOutput::Stderr, TracingOutput::File);
        let config = TracingConfig::new()
            .with_level(level)
            .with_output(output)
            .with_thread_ids(self.thread_ids);
        match &self.filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

/// Where the layout snapshot lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    /// Snapshot file; the data directory default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
