// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The trace manager: single entry point for instrumentation requests.
//!
//! The manager owns the fixed backend set and their combined lifecycle.
//! Backends open in construction order (log, then signal) and close in the
//! mirror order on every exit path, success or failure, so output is always
//! flushed and released exactly once. On an abnormal run the log backend
//! renders a final error record before anything closes, and the original
//! failure keeps propagating unchanged — tracing never masks it.

use std::fmt;

use crate::clock::SimClock;
use crate::config::TraceConfig;
use crate::errors::TraceError;
use crate::hints::HintBag;
use crate::level::Level;
use crate::target::ProbeTarget;
use crate::tracer::log::LogFn;
use crate::tracer::{LogTracer, ProbeCallback, SignalTracer, Tracer};

/// Probe-attachment collaborator.
///
/// The attachment mechanism lives outside this crate: given a bundle of
/// callbacks, it must arrange for them to be invoked, in registration order,
/// with the current observed value whenever the target changes.
pub trait ProbeAttach {
    /// Register a callback bundle for a target.
    fn attach(
        &mut self,
        scope: &str,
        target: &ProbeTarget,
        callbacks: Vec<ProbeCallback>,
        hints: &HintBag,
    );
}

impl<A: ProbeAttach> ProbeAttach for std::rc::Rc<std::cell::RefCell<A>> {
    fn attach(
        &mut self,
        scope: &str,
        target: &ProbeTarget,
        callbacks: Vec<ProbeCallback>,
        hints: &HintBag,
    ) {
        self.borrow_mut().attach(scope, target, callbacks, hints);
    }
}

/// Owner of the tracer set and single point of contact for instrumentation.
///
/// # Examples
///
/// ```rust,ignore
/// let manager = TraceManager::new(&config, clock, Box::new(attach))?;
/// manager.run(|tracing| {
///     // build the simulation, calling tracing.auto_probe(...) per component,
///     // then execute it
///     simulation.execute()
/// })?;
/// ```
pub struct TraceManager {
    log: LogTracer,
    signal: SignalTracer,
    attach: Box<dyn ProbeAttach>,
    closed: bool,
}

impl fmt::Debug for TraceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceManager")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl TraceManager {
    /// Construct all backends, opening resources for the enabled ones.
    ///
    /// Backends are constructed in order; if a later one fails to open, the
    /// earlier ones are dropped and release their resources — nothing leaks
    /// out of a failed construction.
    pub fn new(
        config: &TraceConfig,
        clock: SimClock,
        attach: Box<dyn ProbeAttach>,
    ) -> Result<Self, TraceError> {
        let log = LogTracer::new(config, clock.clone())?;
        let signal = SignalTracer::new(config, clock)?;
        Ok(TraceManager {
            log,
            signal,
            attach,
            closed: false,
        })
    }

    /// Request instrumentation of a target.
    ///
    /// Each backend is consulted iff its name appears in the hint bag *and*
    /// its scope filter enables the scope; hint presence is checked first so
    /// a call site can opt a probe out of a backend entirely, regardless of
    /// global filters. Accepted callbacks are bundled and handed to the
    /// attachment collaborator; an empty bundle attaches nothing, which is
    /// the common case for disabled backends and keeps hot paths cheap.
    pub fn auto_probe(
        &mut self,
        scope: &str,
        target: &ProbeTarget,
        hints: &HintBag,
    ) -> Result<(), TraceError> {
        let mut callbacks = Vec::new();
        let tracers: [&mut dyn Tracer; 2] = [&mut self.log, &mut self.signal];
        for tracer in tracers {
            if hints.mentions(tracer.name()) && tracer.is_scope_enabled(scope) {
                if let Some(callback) = tracer.activate_probe(scope, target, hints)? {
                    callbacks.push(callback);
                }
            }
        }
        if !callbacks.is_empty() {
            self.attach.attach(scope, target, callbacks, hints);
        }
        Ok(())
    }

    /// Obtain a log function from the log backend.
    ///
    /// No-op when the log backend is disabled for the scope+level.
    pub fn log_fn(&self, scope: &str, level: Level) -> LogFn {
        self.log.log_fn(scope, level)
    }

    /// Close all backends in reverse construction order. Idempotent.
    ///
    /// Both backends are always attempted; the first error (if any) is
    /// returned after the second close has run.
    pub fn close(&mut self) -> Result<(), TraceError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let signal_result = self.signal.close();
        let log_result = self.log.close();
        signal_result.and(log_result)
    }

    /// Close after an upstream failure.
    ///
    /// The log backend (if enabled) first renders one ERROR-level record
    /// carrying the failure summary, then everything closes as usual.
    pub fn close_after_failure(&mut self, summary: &str) -> Result<(), TraceError> {
        if !self.closed {
            self.log.log_failure(summary);
        }
        self.close()
    }

    /// Run a simulation body under this manager's lifecycle.
    ///
    /// On success the backends close normally; a close failure at that point
    /// is reported through `tracing::warn!` rather than clobbering the
    /// body's result. On failure the error is recorded (see
    /// [`Self::close_after_failure`]) and returned unchanged.
    pub fn run<T, E: fmt::Display>(
        mut self,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        match body(&mut self) {
            Ok(value) => {
                if let Err(error) = self.close() {
                    tracing::warn!(%error, "tracer shutdown failed after successful run");
                }
                Ok(value)
            }
            Err(error) => {
                if let Err(close_error) = self.close_after_failure(&error.to_string()) {
                    tracing::warn!(error = %close_error, "tracer shutdown failed during unwind");
                }
                Err(error)
            }
        }
    }
}

impl Drop for TraceManager {
    /// Best-effort shutdown for abandoned managers.
    fn drop(&mut self) {
        if !self.closed {
            if let Err(error) = self.close() {
                tracing::warn!(%error, "tracer shutdown failed during drop");
            }
        }
    }
}
