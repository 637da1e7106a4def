// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Waveform signal backend.
//!
//! Renders probe value changes as typed signal transitions in a VCD dump,
//! keyed by (parent scope, leaf name). The signal kind is taken from an
//! explicit hint when present, otherwise inferred from the target's shape;
//! an unrecognized shape is a hard error rather than a silent guess. A
//! companion viewer can be auto-launched against the live dump, best-effort.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::{Command, Stdio};
use std::rc::Rc;

use crate::clock::SimClock;
use crate::config::{TraceConfig, ViewerConfig};
use crate::errors::{ConfigError, InitError, ProbeError, TraceError};
use crate::hints::HintBag;
use crate::scope::split_scope;
use crate::target::ProbeTarget;
use crate::tracer::{Enablement, ProbeCallback, Tracer};
use crate::vcd::{VarKind, VcdWriter};

/// Backend name, as keyed in hint bags and configuration.
pub const NAME: &str = "signal";

/// Resources held only while the backend is enabled and open.
struct SignalState {
    writer: Rc<RefCell<VcdWriter<BufWriter<File>>>>,
}

/// Tracer rendering probe values as typed signal changes in a waveform dump.
///
/// # Examples
///
/// ```rust
/// use simtrace::{
///     HintBag, ProbeTarget, SignalHints, SignalTracer, SimClock,
///     TraceConfigBuilder, Tracer, TraceValue,
/// };
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = TraceConfigBuilder::new()
///     .enable_signal(dir.path().join("dump.vcd"))
///     .build();
/// let clock = SimClock::new();
/// let mut tracer = SignalTracer::new(&config, clock.clone()).unwrap();
///
/// let hints = HintBag::new().with_signal(SignalHints::new());
/// let mut callback = tracer
///     .activate_probe("sim.queue.depth", &ProbeTarget::bounded_buffer(3, Some(16)), &hints)
///     .unwrap()
///     .expect("probe accepted");
/// clock.set(10.0);
/// callback(TraceValue::Int(5)).unwrap();
/// tracer.close().unwrap();
/// ```
pub struct SignalTracer {
    enablement: Enablement,
    clock: SimClock,
    state: Option<SignalState>,
}

impl SignalTracer {
    /// Construct from configuration, opening the dump file iff enabled.
    ///
    /// A dump file that cannot be created is a fatal [`InitError`]. When the
    /// viewer is configured live, it is spawned against the dump file;
    /// failure to spawn is not fatal to tracing.
    pub fn new(config: &TraceConfig, clock: SimClock) -> Result<Self, TraceError> {
        let cfg = &config.signal;
        let enablement =
            Enablement::from_patterns(cfg.enable, &cfg.include_pat, &cfg.exclude_pat)?;
        let state = if enablement.enabled() {
            let file = File::create(&cfg.dump_file).map_err(|source| {
                InitError::open_failed(cfg.dump_file.display().to_string(), source)
            })?;
            let writer = VcdWriter::new(
                BufWriter::new(file),
                config.timescale,
                cfg.check_values,
            );
            tracing::debug!(dump_file = %cfg.dump_file.display(), "signal tracer opened");
            if cfg.viewer.live {
                spawn_viewer(&cfg.dump_file, &cfg.viewer);
            }
            Some(SignalState {
                writer: Rc::new(RefCell::new(writer)),
            })
        } else {
            None
        };
        Ok(SignalTracer {
            enablement,
            clock,
            state,
        })
    }

    /// Resolve the signal kind: explicit hint first, then the target's
    /// variant rule, then failure naming the scope.
    fn resolve_kind(
        scope: &str,
        target: &ProbeTarget,
        var_type: Option<&str>,
    ) -> Result<VarKind, TraceError> {
        match var_type {
            Some(name) => VarKind::parse(name)
                .ok_or_else(|| ConfigError::unknown_var_type(name, scope).into()),
            None => target
                .inferred_kind()
                .ok_or_else(|| ProbeError::kind_inference(scope, target.type_label()).into()),
        }
    }
}

impl Tracer for SignalTracer {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_scope_enabled(&self, scope: &str) -> bool {
        self.enablement.is_scope_enabled(scope)
    }

    fn activate_probe(
        &mut self,
        scope: &str,
        target: &ProbeTarget,
        hints: &HintBag,
    ) -> Result<Option<ProbeCallback>, TraceError> {
        let Some(signal_hints) = &hints.signal else {
            return Ok(None);
        };
        let Some(state) = &self.state else {
            return Ok(None);
        };

        let kind = Self::resolve_kind(scope, target, signal_hints.var_type.as_deref())?;
        let width = signal_hints
            .size
            .or_else(|| kind.default_width())
            .ok_or_else(|| ConfigError::missing_width(kind.keyword(), scope))?;
        if width == 0 {
            return Err(ConfigError::zero_width(scope).into());
        }
        let init = signal_hints.init.unwrap_or_else(|| target.initial_value());

        let (parent, name) = split_scope(scope);
        let var = state.writer.borrow_mut().register(
            parent,
            name,
            kind,
            width,
            init,
            signal_hints.ident.clone(),
        )?;

        let writer = Rc::clone(&state.writer);
        let clock = self.clock.clone();
        Ok(Some(Box::new(move |value| {
            writer.borrow_mut().change(var, clock.ticks(), value)?;
            Ok(())
        })))
    }

    fn close(&mut self) -> Result<(), TraceError> {
        if let Some(state) = self.state.take() {
            state.writer.borrow_mut().finish()?;
            tracing::debug!("signal tracer closed");
        }
        Ok(())
    }
}

/// Spawn the companion waveform viewer, detached, best-effort.
fn spawn_viewer(dump_file: &Path, viewer: &ViewerConfig) {
    let mut command = Command::new("gtkwave");
    command
        .arg(dump_file)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(save_file) = &viewer.file {
        command.arg(save_file);
    }
    match command.spawn() {
        Ok(child) => {
            tracing::debug!(pid = child.id(), "waveform viewer spawned");
        }
        Err(error) => {
            tracing::warn!(%error, "could not spawn waveform viewer");
        }
    }
}
