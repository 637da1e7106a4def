// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the waveform writer.

/// Errors raised by the waveform (VCD) writer.
///
/// Registration violations surface at `activate_probe` time; value and
/// ordering violations surface from probe callbacks when value checking is
/// enabled; I/O failures propagate as fatal on any write.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Writing to the dump file failed.
    #[error("Waveform I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A signal was registered twice under the same (parent scope, name) key.
    #[error("Signal already registered for scope '{scope}'")]
    DuplicateSignal {
        /// The dotted scope of the duplicate registration
        scope: String,
    },

    /// A signal was registered after the first value change was recorded.
    ///
    /// All declarations must precede the waveform definitions header, which
    /// is flushed when the first change is written.
    #[error("Cannot register '{scope}': waveform definitions already written")]
    RegistrationClosed {
        /// The dotted scope of the late registration
        scope: String,
    },

    /// A change was recorded at a timestamp earlier than the previous one.
    ///
    /// Only raised when the writer was opened with value checking enabled.
    #[error("Out-of-order change on '{name}': time {time} is before {last}")]
    OutOfOrder {
        /// The signal's leaf name
        name: String,
        /// The rejected timestamp
        time: u64,
        /// The most recent accepted timestamp
        last: u64,
    },

    /// An integer change does not fit the signal's declared width.
    ///
    /// Only raised when the writer was opened with value checking enabled.
    #[error("Value {value} does not fit signal '{name}' of width {width}")]
    ValueOutOfRange {
        /// The signal's leaf name
        name: String,
        /// The rejected value
        value: i64,
        /// The signal's declared bit width
        width: u32,
    },
}

impl WriterError {
    /// Create a `DuplicateSignal` error.
    pub fn duplicate_signal(scope: impl Into<String>) -> Self {
        WriterError::DuplicateSignal {
            scope: scope.into(),
        }
    }

    /// Create a `RegistrationClosed` error.
    pub fn registration_closed(scope: impl Into<String>) -> Self {
        WriterError::RegistrationClosed {
            scope: scope.into(),
        }
    }
}
