//! Probe values flowing from observed targets into tracer callbacks.

use std::fmt;

/// One observed value of a probed target.
///
/// `Unknown` is the high-impedance sentinel: it renders as `z` in the
/// waveform and in text logs, and is used as the initial value of a counted
/// resource with no fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceValue {
    /// Integral value (queue depths, user counts, item counts)
    Int(i64),
    /// Floating value (continuous levels)
    Real(f64),
    /// Unknown/high-impedance sentinel
    Unknown,
}

impl TraceValue {
    /// Whether this value carries a floating level.
    pub fn is_real(&self) -> bool {
        matches!(self, TraceValue::Real(_))
    }
}

impl fmt::Display for TraceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceValue::Int(v) => write!(f, "{v}"),
            TraceValue::Real(v) => write!(f, "{v}"),
            TraceValue::Unknown => f.write_str("z"),
        }
    }
}

impl From<i64> for TraceValue {
    fn from(v: i64) -> Self {
        TraceValue::Int(v)
    }
}

impl From<i32> for TraceValue {
    fn from(v: i32) -> Self {
        TraceValue::Int(v.into())
    }
}

impl From<usize> for TraceValue {
    fn from(v: usize) -> Self {
        TraceValue::Int(v as i64)
    }
}

impl From<f64> for TraceValue {
    fn from(v: f64) -> Self {
        TraceValue::Real(v)
    }
}
