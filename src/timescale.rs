//! Simulated-time scale: a factor and a unit.
//!
//! The timescale is supplied by the surrounding simulation's configuration
//! and consumed in two renderings: the log backend's time-unit string
//! (`us`, or `(10us)` when the factor is not 1) and the waveform header's
//! `$timescale` directive (`10 us`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Unit of one simulated time tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Femtoseconds
    Fs,
    /// Picoseconds
    Ps,
    /// Nanoseconds
    Ns,
    /// Microseconds
    Us,
    /// Milliseconds
    Ms,
    /// Seconds
    S,
}

impl TimeUnit {
    /// Short unit suffix (`"fs"` .. `"s"`).
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Fs => "fs",
            TimeUnit::Ps => "ps",
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Scale of one simulated time tick: `factor` x `unit`.
///
/// # Examples
///
/// ```rust
/// use simtrace::{TimeUnit, Timescale};
///
/// let ts = Timescale::new(10, TimeUnit::Us).unwrap();
/// assert_eq!(ts.label(), "(10us)");
/// assert_eq!(ts.to_string(), "10 us");
///
/// let unit = Timescale::new(1, TimeUnit::Ns).unwrap();
/// assert_eq!(unit.label(), "ns");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timescale {
    /// Number of `unit`s per tick; must be 1, 10, or 100
    pub factor: u32,
    /// Unit of the scale
    pub unit: TimeUnit,
}

impl Timescale {
    /// Create a timescale, validating the factor.
    ///
    /// The waveform format only admits factors of 1, 10, or 100; anything
    /// else is a [`ConfigError::InvalidTimescale`].
    pub fn new(factor: u32, unit: TimeUnit) -> Result<Self, ConfigError> {
        match factor {
            1 | 10 | 100 => Ok(Timescale { factor, unit }),
            _ => Err(ConfigError::InvalidTimescale { factor }),
        }
    }

    /// Time-unit string for log lines.
    ///
    /// The bare unit when the factor is 1, otherwise `(factor unit)` to
    /// disambiguate scaled time.
    pub fn label(&self) -> String {
        if self.factor == 1 {
            self.unit.suffix().to_string()
        } else {
            format!("({}{})", self.factor, self.unit)
        }
    }
}

impl Default for Timescale {
    /// One second per tick.
    fn default() -> Self {
        Timescale {
            factor: 1,
            unit: TimeUnit::S,
        }
    }
}

impl fmt::Display for Timescale {
    /// `"10 us"` form, as used in the waveform header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.factor, self.unit)
    }
}
