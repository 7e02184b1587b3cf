//! Configuration types for reading charts.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them
//! from external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`OutputConfig`] - Controls how records are serialized.
//!
//! # Example
//!
//! ```
//! # use liuyao::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.debug());
//! assert!(config.output().pretty());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Emit the record JSON alongside the error report when a chart is invalid.
    #[serde(default)]
    debug: bool,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `debug` - Whether invalid records are also dumped as JSON.
    /// * `output` - Serialization options.
    pub fn new(debug: bool, output: OutputConfig) -> Self {
        Self { debug, output }
    }

    /// Returns `true` if debug output is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Serialization options for chart records.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON output. Defaults to `true`.
    #[serde(default = "default_pretty")]
    pretty: bool,
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Returns `true` if JSON output is indented.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
