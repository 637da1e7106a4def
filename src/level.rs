//! Severity levels for the text log backend.
//!
//! Levels strictly order `ERROR < WARNING < INFO < PROBE < DEBUG` by rank,
//! with `ERROR` most severe (rank 1). A message at level `M` passes a
//! configured maximum level `L` iff `rank(M) <= rank(L)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Severity level of a log message or probe record.
///
/// # Examples
///
/// ```rust
/// use simtrace::Level;
///
/// assert!(Level::Error.rank() < Level::Debug.rank());
/// assert!(Level::Info.passes(Level::Probe));
/// assert!(!Level::Debug.passes(Level::Info));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Most severe; also used for the final record on abnormal shutdown.
    Error,
    /// Unexpected but non-fatal conditions.
    Warning,
    /// General progress messages. Default maximum for the log backend.
    Info,
    /// Probe value records. Default level for probe callbacks.
    Probe,
    /// Least severe; verbose diagnostics.
    Debug,
}

impl Level {
    /// Numeric rank of this level: 1 (`Error`) through 5 (`Debug`).
    pub fn rank(self) -> u8 {
        match self {
            Level::Error => 1,
            Level::Warning => 2,
            Level::Info => 3,
            Level::Probe => 4,
            Level::Debug => 5,
        }
    }

    /// Whether a message at this level is emitted under the given maximum.
    pub fn passes(self, max: Level) -> bool {
        self.rank() <= max.rank()
    }

    /// Upper-case name as rendered into log lines.
    pub fn name(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Probe => "PROBE",
            Level::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    /// Parse a level name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARNING" => Ok(Level::Warning),
            "INFO" => Ok(Level::Info),
            "PROBE" => Ok(Level::Probe),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(ConfigError::unknown_level(s)),
        }
    }
}
