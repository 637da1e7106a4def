// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Tracing and waveform-capture layer for discrete-event simulations.
//!
//! Simulation components expose named probes on their observable state
//! (queue depths, resource usage, container levels); each emitted value is
//! routed to the enabled tracer backends — a formatted text log and a
//! VCD-style waveform dump — under hierarchical scope filtering and
//! per-backend hints.
//!
//! The entry point is [`TraceManager::auto_probe`]: it consults every
//! backend for a scope, collects the callbacks the willing ones return, and
//! registers the bundle with the external probe-attachment collaborator.
//!
//! ```rust,ignore
//! let config = TraceConfigBuilder::new()
//!     .enable_log()
//!     .log_level(Level::Debug)
//!     .enable_signal("dump.vcd")
//!     .build();
//! let mut manager = TraceManager::new(&config, clock, Box::new(attach))?;
//!
//! let hints = HintBag::new()
//!     .with_log(LogHints::new())
//!     .with_signal(SignalHints::new());
//! manager.auto_probe("sim.queue.depth", &ProbeTarget::bounded_buffer(0, Some(16)), &hints)?;
//! ```

mod clock;
mod config;
mod errors;
mod hints;
mod level;
mod manager;
mod scope;
mod target;
mod template;
mod timescale;
mod tracer;
mod value;
mod vcd;

pub use clock::SimClock;
pub use config::{LogConfig, SignalConfig, TraceConfig, TraceConfigBuilder, ViewerConfig};
pub use errors::{ConfigError, InitError, ProbeError, TraceError, WriterError};
pub use hints::{HintBag, LogHints, SignalHints};
pub use level::Level;
pub use manager::{ProbeAttach, TraceManager};
pub use scope::{split_scope, ScopeFilter};
pub use target::ProbeTarget;
pub use template::{BoundTemplate, LineTemplate, ValueTemplate};
pub use timescale::{TimeUnit, Timescale};
pub use tracer::log::{LogFn, DEFAULT_FORMAT};
pub use tracer::{LogTracer, ProbeCallback, SignalTracer, Tracer};
pub use value::TraceValue;
pub use vcd::{VarId, VarKind, VcdWriter};
