// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for tracer resource acquisition.

/// Errors that occur while opening a tracer's output resources.
///
/// These are fatal: the simulation must not proceed with a
/// partially-initialized tracer, so `open` failures abort startup before any
/// simulated time advances.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// An output file could not be created.
    #[error("Cannot open output file '{path}': {source}")]
    OpenFailed {
        /// Path to the file that could not be opened
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl InitError {
    /// Create an `OpenFailed` error from a path and I/O error.
    pub fn open_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        InitError::OpenFailed {
            path: path.into(),
            source,
        }
    }
}
