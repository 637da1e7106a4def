// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The tracer backend protocol.
//!
//! A tracer is one enablement-and-output backend. It owns its output
//! resources for its whole lifetime: opened at construction iff the backend
//! is enabled, released exactly once on shutdown. A disabled tracer holds no
//! resources and is never asked to activate a probe.

use crate::errors::{ConfigError, TraceError};
use crate::hints::HintBag;
use crate::scope::ScopeFilter;
use crate::target::ProbeTarget;
use crate::value::TraceValue;

pub mod log;
pub mod signal;

pub use log::LogTracer;
pub use signal::SignalTracer;

/// Callback converting one observed value into a backend-specific record.
///
/// Owned by the probe-attachment collaborator once bundled; invoked inline
/// with the simulation step that changed the observed state.
pub type ProbeCallback = Box<dyn FnMut(TraceValue) -> Result<(), TraceError>>;

/// One enablement-and-output backend.
pub trait Tracer {
    /// Backend name, as keyed in hint bags and configuration.
    fn name(&self) -> &'static str;

    /// Whether this backend wants probes at the given scope.
    ///
    /// Base semantics: the backend is enabled and the scope passes its
    /// include/exclude pattern sets. The log backend additionally filters by
    /// severity through its own entry points.
    fn is_scope_enabled(&self, scope: &str) -> bool;

    /// Offer a target to this backend.
    ///
    /// Returns a callback when the backend wants to instrument the target,
    /// `Ok(None)` when it declines, and an error only for genuine
    /// misconfiguration.
    fn activate_probe(
        &mut self,
        scope: &str,
        target: &ProbeTarget,
        hints: &HintBag,
    ) -> Result<Option<ProbeCallback>, TraceError>;

    /// Release output resources, flushing first. Idempotent.
    fn close(&mut self) -> Result<(), TraceError>;

    /// Render a final diagnostic record for an upstream failure.
    ///
    /// Called before `close` when the simulation run is unwinding with an
    /// error. Best-effort; only the log backend overrides this.
    fn log_failure(&mut self, _summary: &str) {}
}

/// Enablement state shared by the concrete backends: the global enable flag
/// and the compiled scope filter.
///
/// Patterns are only compiled for an enabled backend, so a disabled backend
/// never fails construction on a malformed pattern it would never use.
#[derive(Debug)]
pub(crate) struct Enablement {
    enabled: bool,
    filter: Option<ScopeFilter>,
}

impl Enablement {
    pub(crate) fn from_patterns(
        enabled: bool,
        include: &[String],
        exclude: &[String],
    ) -> Result<Self, ConfigError> {
        let filter = if enabled {
            Some(ScopeFilter::new(include, exclude)?)
        } else {
            None
        };
        Ok(Enablement { enabled, filter })
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn is_scope_enabled(&self, scope: &str) -> bool {
        match &self.filter {
            Some(filter) => self.enabled && filter.is_enabled(scope),
            None => false,
        }
    }
}
