// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the tracing layer.
//!
//! This module provides the configuration consumed at tracer construction:
//! per-backend enablement, scope pattern sets, output destinations, and the
//! simulation timescale. Loading and merging configuration trees belongs to
//! the orchestration layer; the structs here only define the keys and their
//! defaults, and derive `serde` support so that layer can deserialize them
//! (`sim.log.*`, `sim.vcd.*`, `sim.gtkw.*`).
//!
//! # Example: Using defaults
//!
//! ```rust
//! use simtrace::TraceConfig;
//!
//! // Both backends disabled; nothing is opened or written
//! let config = TraceConfig::default();
//! assert!(!config.log.enable);
//! assert!(!config.signal.enable);
//! ```
//!
//! # Example: Builder
//!
//! ```rust
//! use simtrace::{Level, TraceConfigBuilder, TimeUnit, Timescale};
//!
//! let config = TraceConfigBuilder::new()
//!     .timescale(Timescale::new(10, TimeUnit::Us).unwrap())
//!     .enable_log()
//!     .log_level(Level::Debug)
//!     .log_include("sim\\.net")
//!     .enable_signal("out.vcd")
//!     .build();
//! assert!(config.log.enable);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::timescale::Timescale;
use crate::tracer::log::DEFAULT_FORMAT;

/// Configuration for the whole tracing layer.
///
/// Use [`TraceConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Simulated-time scale shared by all backends
    pub timescale: Timescale,
    /// Text log backend (`sim.log.*`)
    pub log: LogConfig,
    /// Waveform signal backend (`sim.vcd.*`, viewer under `sim.gtkw.*`)
    pub signal: SignalConfig,
}

/// Configuration of the text log backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether the backend is enabled; fixed at construction
    pub enable: bool,
    /// Ordered include patterns; default matches every scope
    pub include_pat: Vec<String>,
    /// Ordered exclude patterns; default excludes nothing
    pub exclude_pat: Vec<String>,
    /// Output file; standard error when absent
    pub file: Option<PathBuf>,
    /// Maximum severity level emitted
    pub level: Level,
    /// Line template; see [`crate::LineTemplate`]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enable: false,
            include_pat: vec![".*".to_string()],
            exclude_pat: Vec::new(),
            file: None,
            level: Level::Info,
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Configuration of the waveform signal backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Whether the backend is enabled; fixed at construction
    pub enable: bool,
    /// Ordered include patterns; default matches every scope
    pub include_pat: Vec<String>,
    /// Ordered exclude patterns; default excludes nothing
    pub exclude_pat: Vec<String>,
    /// Waveform dump file
    pub dump_file: PathBuf,
    /// Reject out-of-order timestamps and over-wide values
    pub check_values: bool,
    /// Companion waveform viewer
    pub viewer: ViewerConfig,
}

impl Default for SignalConfig {
    fn default() -> Self {
        SignalConfig {
            enable: false,
            include_pat: vec![".*".to_string()],
            exclude_pat: Vec::new(),
            dump_file: PathBuf::from("sim.vcd"),
            check_values: true,
            viewer: ViewerConfig::default(),
        }
    }
}

/// Companion waveform-viewer settings.
///
/// Spawning the viewer is best-effort; a failed spawn never aborts tracing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Spawn the viewer against the live dump when the backend opens
    pub live: bool,
    /// Saved view layout handed to the viewer
    pub file: Option<PathBuf>,
}

/// Builder for [`TraceConfig`].
///
/// # Example
///
/// ```rust
/// use simtrace::{Level, TraceConfigBuilder};
///
/// let config = TraceConfigBuilder::new()
///     .enable_log()
///     .log_file("run.log")
///     .log_level(Level::Probe)
///     .log_exclude("sim\\.noisy")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceConfigBuilder {
    config: TraceConfig,
}

impl TraceConfigBuilder {
    /// Create a builder with both backends disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated-time scale.
    pub fn timescale(mut self, timescale: Timescale) -> Self {
        self.config.timescale = timescale;
        self
    }

    /// Enable the text log backend.
    pub fn enable_log(mut self) -> Self {
        self.config.log.enable = true;
        self
    }

    /// Send log lines to a file instead of standard error.
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log.file = Some(path.into());
        self
    }

    /// Set the maximum severity level emitted.
    pub fn log_level(mut self, level: Level) -> Self {
        self.config.log.level = level;
        self
    }

    /// Override the log line template.
    pub fn log_format(mut self, format: impl Into<String>) -> Self {
        self.config.log.format = format.into();
        self
    }

    /// Replace the log include patterns with a single pattern.
    pub fn log_include(mut self, pattern: impl Into<String>) -> Self {
        self.config.log.include_pat = vec![pattern.into()];
        self
    }

    /// Append a log exclude pattern.
    pub fn log_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.config.log.exclude_pat.push(pattern.into());
        self
    }

    /// Enable the signal backend, dumping to `path`.
    pub fn enable_signal(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.signal.enable = true;
        self.config.signal.dump_file = path.into();
        self
    }

    /// Replace the signal include patterns with a single pattern.
    pub fn signal_include(mut self, pattern: impl Into<String>) -> Self {
        self.config.signal.include_pat = vec![pattern.into()];
        self
    }

    /// Append a signal exclude pattern.
    pub fn signal_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.config.signal.exclude_pat.push(pattern.into());
        self
    }

    /// Enable or disable waveform value checking.
    pub fn check_values(mut self, check: bool) -> Self {
        self.config.signal.check_values = check;
        self
    }

    /// Spawn the companion viewer when the signal backend opens.
    pub fn live_viewer(mut self, save_file: impl Into<PathBuf>) -> Self {
        self.config.signal.viewer.live = true;
        self.config.signal.viewer.file = Some(save_file.into());
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> TraceConfig {
        self.config
    }
}
