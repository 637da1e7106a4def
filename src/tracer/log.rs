// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Text log backend.
//!
//! Renders probe values and ad-hoc log messages as formatted text lines to a
//! file or standard error, with per-message severity filtering on top of the
//! scope filter. Lines are produced through a two-phase template: the static
//! placeholders are bound once per activation, only the simulated time and
//! message are substituted per record.

use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Stderr, Write};
use std::rc::Rc;

use crate::clock::SimClock;
use crate::config::TraceConfig;
use crate::errors::{InitError, TraceError};
use crate::hints::HintBag;
use crate::level::Level;
use crate::target::ProbeTarget;
use crate::template::{BoundTemplate, LineTemplate, ValueTemplate};
use crate::tracer::{Enablement, ProbeCallback, Tracer};

/// Backend name, as keyed in hint bags and configuration.
pub const NAME: &str = "log";

/// Default line template.
pub const DEFAULT_FORMAT: &str = "{level} {ts:.3f} {ts_unit}: {scope}: {message}";

/// Scope rendered into the final record of an abnormal shutdown.
const FAILURE_SCOPE: &str = "Exception";

/// Text log output destination.
#[derive(Debug)]
enum LogSink {
    File(BufWriter<File>),
    Stderr(Stderr),
}

impl LogSink {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        match self {
            LogSink::File(w) => writeln!(w, "{line}"),
            LogSink::Stderr(w) => writeln!(w, "{line}"),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            LogSink::File(w) => w.flush(),
            LogSink::Stderr(w) => w.flush(),
        }
    }
}

/// Resources held only while the backend is enabled and open.
#[derive(Debug)]
struct LogState {
    max_level: Level,
    template: LineTemplate,
    ts_unit: String,
    sink: Rc<RefCell<LogSink>>,
}

/// Tracer rendering probe values and log messages as text lines.
///
/// # Examples
///
/// ```rust
/// use simtrace::{Level, LogTracer, SimClock, TraceConfigBuilder, Tracer};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = TraceConfigBuilder::new()
///     .enable_log()
///     .log_file(dir.path().join("run.log"))
///     .build();
/// let mut tracer = LogTracer::new(&config, SimClock::new()).unwrap();
///
/// let info = tracer.log_fn("sim.net", Level::Info);
/// info.emit("link up").unwrap();
/// tracer.close().unwrap();
/// ```
#[derive(Debug)]
pub struct LogTracer {
    enablement: Enablement,
    clock: SimClock,
    state: Option<LogState>,
}

impl LogTracer {
    /// Construct from configuration, opening the output sink iff enabled.
    ///
    /// Falls back to standard error when no file is configured. A file that
    /// cannot be created is a fatal [`InitError`].
    pub fn new(config: &TraceConfig, clock: SimClock) -> Result<Self, TraceError> {
        let cfg = &config.log;
        let enablement =
            Enablement::from_patterns(cfg.enable, &cfg.include_pat, &cfg.exclude_pat)?;
        let state = if enablement.enabled() {
            let template = LineTemplate::parse(&cfg.format)?;
            let sink = match &cfg.file {
                Some(path) => {
                    let file = File::create(path).map_err(|source| {
                        InitError::open_failed(path.display().to_string(), source)
                    })?;
                    LogSink::File(BufWriter::new(file))
                }
                None => LogSink::Stderr(std::io::stderr()),
            };
            tracing::debug!(file = ?cfg.file, level = %cfg.level, "log tracer opened");
            Some(LogState {
                max_level: cfg.level,
                template,
                ts_unit: config.timescale.label(),
                sink: Rc::new(RefCell::new(sink)),
            })
        } else {
            None
        };
        Ok(LogTracer {
            enablement,
            clock,
            state,
        })
    }

    /// Scope enablement with severity filtering.
    ///
    /// `level: None` checks the scope filter alone.
    pub fn is_enabled_at(&self, scope: &str, level: Option<Level>) -> bool {
        let level_ok = match (&self.state, level) {
            (Some(state), Some(level)) => level.passes(state.max_level),
            (Some(_), None) => true,
            (None, _) => false,
        };
        level_ok && self.enablement.is_scope_enabled(scope)
    }

    /// Obtain a log function for a scope and severity.
    ///
    /// When the scope+level combination is disabled the returned function is
    /// a no-op, so call sites pay no formatting cost.
    pub fn log_fn(&self, scope: &str, level: Level) -> LogFn {
        match &self.state {
            Some(state) if self.is_enabled_at(scope, Some(level)) => LogFn {
                inner: Some(LogFnInner {
                    bound: state.template.bind(level, &state.ts_unit, scope),
                    sink: Rc::clone(&state.sink),
                    clock: self.clock.clone(),
                }),
            },
            _ => LogFn { inner: None },
        }
    }
}

impl Tracer for LogTracer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_scope_enabled(&self, scope: &str) -> bool {
        self.is_enabled_at(scope, None)
    }

    fn activate_probe(
        &mut self,
        scope: &str,
        _target: &ProbeTarget,
        hints: &HintBag,
    ) -> Result<Option<ProbeCallback>, TraceError> {
        let Some(log_hints) = &hints.log else {
            return Ok(None);
        };
        let level = log_hints.level;
        if !self.is_enabled_at(scope, Some(level)) {
            return Ok(None);
        }
        let value_fmt = ValueTemplate::parse(&log_hints.value_fmt)?;
        let Some(state) = &self.state else {
            return Ok(None);
        };
        let bound = state.template.bind(level, &state.ts_unit, scope);
        let sink = Rc::clone(&state.sink);
        let clock = self.clock.clone();
        Ok(Some(Box::new(move |value| {
            let line = bound.render(clock.now(), &value_fmt.render(&value));
            sink.borrow_mut().write_line(&line)?;
            Ok(())
        })))
    }

    fn close(&mut self) -> Result<(), TraceError> {
        if let Some(state) = self.state.take() {
            state.sink.borrow_mut().flush()?;
            tracing::debug!("log tracer closed");
        }
        Ok(())
    }

    fn log_failure(&mut self, summary: &str) {
        if let Some(state) = &self.state {
            let bound = state
                .template
                .bind(Level::Error, &state.ts_unit, FAILURE_SCOPE);
            let line = bound.render(self.clock.now(), summary);
            if state.sink.borrow_mut().write_line(&line).is_err() {
                tracing::warn!("failed to write final error record");
            }
        }
    }
}

/// Callable handed out by [`LogTracer::log_fn`].
///
/// A filtered-out scope+level yields a no-op instance so call sites in hot
/// simulation paths pay no formatting cost.
pub struct LogFn {
    inner: Option<LogFnInner>,
}

struct LogFnInner {
    bound: BoundTemplate,
    sink: Rc<RefCell<LogSink>>,
    clock: SimClock,
}

impl LogFn {
    /// Whether emits will produce output.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Emit one message at the current simulated time.
    pub fn emit(&self, message: &str) -> Result<(), TraceError> {
        self.emit_with(message, &[])
    }

    /// Emit one message followed by extra positional values.
    pub fn emit_with(&self, message: &str, extra: &[&dyn fmt::Display]) -> Result<(), TraceError> {
        let Some(inner) = &self.inner else {
            return Ok(());
        };
        let mut line = inner.bound.render(inner.clock.now(), message);
        for value in extra {
            line.push(' ');
            line.push_str(&value.to_string());
        }
        inner.sink.borrow_mut().write_line(&line)?;
        Ok(())
    }
}

impl fmt::Debug for LogFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_some() {
            f.write_str("LogFn(enabled)")
        } else {
            f.write_str("LogFn(disabled)")
        }
    }
}
