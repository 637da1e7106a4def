//! Per-probe, per-backend instrumentation hints.
//!
//! A hint bag is supplied by the instrumentation call site and is immutable
//! once passed to `auto_probe`. A backend whose entry is absent from the bag
//! declines to instrument that target: opting in per backend is deliberate
//! and independent of scope enablement.

use crate::level::Level;
use crate::tracer;
use crate::value::TraceValue;

/// Backend-specific options for one probe.
///
/// # Examples
///
/// ```rust
/// use simtrace::{HintBag, Level, LogHints, SignalHints};
///
/// let hints = HintBag::new()
///     .with_log(LogHints::new().level(Level::Debug))
///     .with_signal(SignalHints::new().size(8));
///
/// assert!(hints.mentions("log"));
/// assert!(hints.mentions("signal"));
/// assert!(!hints.mentions("metrics"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HintBag {
    /// Options for the text log backend; absent means "do not log"
    pub log: Option<LogHints>,
    /// Options for the signal backend; absent means "do not dump"
    pub signal: Option<SignalHints>,
}

impl HintBag {
    /// Empty bag: every backend declines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt the probe into the log backend.
    pub fn with_log(mut self, hints: LogHints) -> Self {
        self.log = Some(hints);
        self
    }

    /// Opt the probe into the signal backend.
    pub fn with_signal(mut self, hints: SignalHints) -> Self {
        self.signal = Some(hints);
        self
    }

    /// Whether the bag carries an entry for the named backend.
    pub fn mentions(&self, backend: &str) -> bool {
        match backend {
            tracer::log::NAME => self.log.is_some(),
            tracer::signal::NAME => self.signal.is_some(),
            _ => false,
        }
    }
}

/// Options for the text log backend.
#[derive(Debug, Clone)]
pub struct LogHints {
    /// Severity of the probe's records
    pub level: Level,
    /// Template with a `{value}` placeholder rendering the probed value
    pub value_fmt: String,
}

impl LogHints {
    /// Defaults: level `PROBE`, value format `{value}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record severity.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the value format template.
    pub fn value_fmt(mut self, fmt: impl Into<String>) -> Self {
        self.value_fmt = fmt.into();
        self
    }
}

impl Default for LogHints {
    fn default() -> Self {
        LogHints {
            level: Level::Probe,
            value_fmt: "{value}".to_string(),
        }
    }
}

/// Options for the signal backend.
#[derive(Debug, Clone, Default)]
pub struct SignalHints {
    /// Explicit signal kind name; overrides shape inference
    pub var_type: Option<String>,
    /// Explicit bit width
    pub size: Option<u32>,
    /// Explicit initial value; overrides the target's current value
    pub init: Option<TraceValue>,
    /// Explicit writer identifier code
    pub ident: Option<String>,
}

impl SignalHints {
    /// Defaults: everything inferred from the target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the signal kind.
    pub fn var_type(mut self, var_type: impl Into<String>) -> Self {
        self.var_type = Some(var_type.into());
        self
    }

    /// Force the bit width.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Force the initial value.
    pub fn init(mut self, init: impl Into<TraceValue>) -> Self {
        self.init = Some(init.into());
        self
    }

    /// Force the identifier code in the dump.
    pub fn ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }
}
