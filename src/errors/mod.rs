// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the simtrace library.
//!
//! This module provides strongly-typed errors for all public APIs in simtrace.
//! It follows a hybrid approach:
//!
//! - **Area-specific errors** for fine-grained error handling ([`ConfigError`],
//!   [`InitError`], [`ProbeError`], [`WriterError`])
//! - **Unified error type** ([`TraceError`]) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! Each failure class of the tracing layer has its own error type:
//! - [`ConfigError`] - Setup-time misconfiguration (malformed scope pattern,
//!   unrecognized signal kind, invalid line template). Fatal before the
//!   simulation starts.
//! - [`InitError`] - An output sink could not be opened. Fatal before any
//!   simulated time advances.
//! - [`ProbeError`] - A probe activation that cannot proceed (signal kind
//!   inference failed for an unrecognized target shape). Fatal at the moment
//!   of the mismatched activation only.
//! - [`WriterError`] - Waveform writer violations (duplicate signal,
//!   out-of-order timestamp, value wider than its declared signal) and
//!   steady-state I/O failures.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use simtrace::{ConfigError, ScopeFilter};
//!
//! let result = ScopeFilter::new(&["sim.(queue".into()], &[]);
//! match result {
//!     Err(ConfigError::MalformedPattern { pattern, .. }) => {
//!         eprintln!("bad include pattern: {pattern}");
//!     }
//!     _ => unreachable!("unclosed group must be rejected"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use simtrace::{TraceError, TraceManager};
//!
//! fn setup() -> Result<TraceManager, TraceError> {
//!     // Errors from every area automatically convert via From implementations
//!     let manager = TraceManager::new(&config, clock, attach)?;
//!     Ok(manager)
//! }
//! ```

mod config;
mod init;
mod probe;
mod writer;

pub use config::ConfigError;
pub use init::InitError;
pub use probe::ProbeError;
pub use writer::WriterError;

/// Unified error type for all simtrace operations.
///
/// This enum wraps all area-specific error types, providing a convenient way
/// to handle errors when you don't need to distinguish between different
/// error sources.
///
/// All area-specific error types automatically convert to `TraceError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Setup-time misconfiguration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An output sink could not be opened.
    #[error("Initialization error: {0}")]
    Init(#[from] InitError),

    /// A probe activation that cannot proceed.
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Waveform writer violation or write failure.
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    /// Steady-state I/O failure on the text log sink.
    ///
    /// There is no retry logic anywhere in this crate; write failures
    /// propagate as fatal errors.
    #[error("Log I/O error: {0}")]
    Io(#[from] std::io::Error),
}
