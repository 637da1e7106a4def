// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for probe activation.

/// Errors raised while activating a probe on a target.
///
/// A backend that simply does not want a target declines without error; this
/// type covers genuine mismatches that would otherwise silently drop data.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// No signal kind could be inferred for the target's shape.
    ///
    /// Raised at the first `activate_probe` for the offending scope, not for
    /// every activation of the same backend. Instrumentation must not guess
    /// for unrecognized target shapes.
    #[error("Could not infer signal kind for scope '{scope}' (target shape: {target})")]
    KindInference {
        /// The scope whose probe failed
        scope: String,
        /// A label describing the target's shape
        target: String,
    },
}

impl ProbeError {
    /// Create a `KindInference` error naming the offending scope.
    pub fn kind_inference(scope: impl Into<String>, target: impl Into<String>) -> Self {
        ProbeError::KindInference {
            scope: scope.into(),
            target: target.into(),
        }
    }
}
