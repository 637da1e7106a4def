// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for setup-time misconfiguration.
//!
//! Everything in here is fatal at construction or first activation and must
//! prevent the simulation from starting; none of these variants is ever
//! retried or absorbed.

/// Errors caused by invalid tracing configuration.
///
/// Raised while compiling scope patterns, parsing log line templates, or
/// resolving an explicitly hinted signal kind.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An include or exclude scope pattern failed to compile.
    #[error("Malformed scope pattern '{pattern}': {source}")]
    MalformedPattern {
        /// The pattern string as given in configuration
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A log line template referenced an unknown placeholder.
    ///
    /// Templates may only use `{level}`, `{ts}` (with optional precision),
    /// `{ts_unit}`, `{scope}`, and `{message}`.
    #[error("Invalid line template '{template}': unknown placeholder '{placeholder}'")]
    InvalidTemplate {
        /// The full template string
        template: String,
        /// The placeholder that was not recognized
        placeholder: String,
    },

    /// A severity level name was not recognized.
    #[error("Unknown log level '{level}'")]
    UnknownLevel {
        /// The level name as given
        level: String,
    },

    /// An explicitly hinted signal kind is not in the writer's vocabulary.
    #[error("Unknown signal kind '{var_type}' for scope '{scope}'")]
    UnknownVarType {
        /// The hinted kind name
        var_type: String,
        /// The scope whose probe carried the hint
        scope: String,
    },

    /// A signal kind that has no default width was hinted without a `size`.
    #[error("Signal kind '{var_type}' for scope '{scope}' requires an explicit size hint")]
    MissingWidth {
        /// The kind that needs a width
        var_type: String,
        /// The scope whose probe carried the hint
        scope: String,
    },

    /// A signal size hint of zero bits was given.
    #[error("Invalid size 0 for scope '{scope}': a signal must be at least one bit wide")]
    ZeroWidth {
        /// The scope whose probe carried the hint
        scope: String,
    },

    /// The timescale factor is not one of 1, 10, or 100.
    #[error("Invalid timescale factor {factor}: must be 1, 10, or 100")]
    InvalidTimescale {
        /// The rejected factor
        factor: u32,
    },
}

impl ConfigError {
    /// Create a `MalformedPattern` error from a pattern and its regex error.
    pub fn malformed_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ConfigError::MalformedPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an `InvalidTemplate` error naming the offending placeholder.
    pub fn invalid_template(template: impl Into<String>, placeholder: impl Into<String>) -> Self {
        ConfigError::InvalidTemplate {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Create an `UnknownLevel` error.
    pub fn unknown_level(level: impl Into<String>) -> Self {
        ConfigError::UnknownLevel {
            level: level.into(),
        }
    }

    /// Create an `UnknownVarType` error for a scope.
    pub fn unknown_var_type(var_type: impl Into<String>, scope: impl Into<String>) -> Self {
        ConfigError::UnknownVarType {
            var_type: var_type.into(),
            scope: scope.into(),
        }
    }

    /// Create a `ZeroWidth` error for a scope.
    pub fn zero_width(scope: impl Into<String>) -> Self {
        ConfigError::ZeroWidth {
            scope: scope.into(),
        }
    }

    /// Create a `MissingWidth` error for a scope.
    pub fn missing_width(var_type: impl Into<String>, scope: impl Into<String>) -> Self {
        ConfigError::MissingWidth {
            var_type: var_type.into(),
            scope: scope.into(),
        }
    }
}
