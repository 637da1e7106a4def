// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Closed set of probeable target shapes.
//!
//! Signal-kind inference is a match over this explicit variant set rather
//! than open-ended runtime type inspection. Each variant exposes a fixed
//! query capability: its inferred signal kind and its current numeric value.
//! The priority order for the signal backend is: explicit hint, then the
//! variant-specific rule, then failure.

use crate::value::TraceValue;
use crate::vcd::VarKind;

/// Snapshot of a simulation object's observable shape, taken at the
/// instrumentation call site.
///
/// # Examples
///
/// ```rust
/// use simtrace::{ProbeTarget, TraceValue};
/// use simtrace::VarKind;
///
/// let queue = ProbeTarget::bounded_buffer(3, Some(16));
/// assert_eq!(queue.inferred_kind(), Some(VarKind::Integer));
/// assert_eq!(queue.initial_value(), TraceValue::Int(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeTarget {
    /// A level-valued container (e.g. a fluid tank, a credit pool).
    LevelGauge {
        /// Current level; integral or floating
        level: TraceValue,
    },
    /// A resource granting usage slots to a number of concurrent users.
    CountedResource {
        /// Current number of users holding the resource
        users: usize,
        /// Fixed capacity, when the resource has one
        capacity: Option<usize>,
    },
    /// A buffer holding discrete items.
    BoundedBuffer {
        /// Current number of buffered items
        items: usize,
        /// Fixed capacity, when the buffer is bounded
        capacity: Option<usize>,
    },
    /// A shape the tracing layer does not recognize.
    ///
    /// Kind inference fails for this variant; the signal backend refuses to
    /// guess and raises a probe error naming the scope.
    Opaque {
        /// Label used in the inference error
        type_name: String,
    },
}

impl ProbeTarget {
    /// A level gauge at the given level.
    pub fn level_gauge(level: impl Into<TraceValue>) -> Self {
        ProbeTarget::LevelGauge {
            level: level.into(),
        }
    }

    /// A counted resource with `users` current holders.
    pub fn counted_resource(users: usize, capacity: Option<usize>) -> Self {
        ProbeTarget::CountedResource { users, capacity }
    }

    /// A buffer with `items` currently queued.
    pub fn bounded_buffer(items: usize, capacity: Option<usize>) -> Self {
        ProbeTarget::BoundedBuffer { items, capacity }
    }

    /// An unrecognized shape carrying a descriptive label.
    pub fn opaque(type_name: impl Into<String>) -> Self {
        ProbeTarget::Opaque {
            type_name: type_name.into(),
        }
    }

    /// Signal kind inferred from the target's shape, or `None` when the
    /// shape is unrecognized.
    ///
    /// A level gauge infers `real` for a floating level and `integer`
    /// otherwise; counted resources and bounded buffers always infer
    /// `integer`.
    pub fn inferred_kind(&self) -> Option<VarKind> {
        match self {
            ProbeTarget::LevelGauge { level } => Some(if level.is_real() {
                VarKind::Real
            } else {
                VarKind::Integer
            }),
            ProbeTarget::CountedResource { .. } | ProbeTarget::BoundedBuffer { .. } => {
                Some(VarKind::Integer)
            }
            ProbeTarget::Opaque { .. } => None,
        }
    }

    /// Current numeric value, used as a signal's initial value when no
    /// explicit `init` hint is given.
    ///
    /// A counted resource with no fixed capacity reports
    /// [`TraceValue::Unknown`].
    pub fn initial_value(&self) -> TraceValue {
        match self {
            ProbeTarget::LevelGauge { level } => *level,
            ProbeTarget::CountedResource { users, capacity } => {
                if capacity.is_some() {
                    TraceValue::from(*users)
                } else {
                    TraceValue::Unknown
                }
            }
            ProbeTarget::BoundedBuffer { items, .. } => TraceValue::from(*items),
            ProbeTarget::Opaque { .. } => TraceValue::Unknown,
        }
    }

    /// Label describing this shape for error messages.
    pub fn type_label(&self) -> &str {
        match self {
            ProbeTarget::LevelGauge { .. } => "level gauge",
            ProbeTarget::CountedResource { .. } => "counted resource",
            ProbeTarget::BoundedBuffer { .. } => "bounded buffer",
            ProbeTarget::Opaque { type_name } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_with_integer_level_infers_integer() {
        let target = ProbeTarget::level_gauge(3i64);
        assert_eq!(target.inferred_kind(), Some(VarKind::Integer));
        assert_eq!(target.initial_value(), TraceValue::Int(3));
    }

    #[test]
    fn test_gauge_with_floating_level_infers_real() {
        let target = ProbeTarget::level_gauge(0.5);
        assert_eq!(target.inferred_kind(), Some(VarKind::Real));
        assert_eq!(target.initial_value(), TraceValue::Real(0.5));
    }

    #[test]
    fn test_counted_resource_infers_integer() {
        let target = ProbeTarget::counted_resource(2, Some(4));
        assert_eq!(target.inferred_kind(), Some(VarKind::Integer));
        assert_eq!(target.initial_value(), TraceValue::Int(2));
    }

    #[test]
    fn test_uncapped_resource_initial_value_unknown() {
        let target = ProbeTarget::counted_resource(2, None);
        assert_eq!(target.initial_value(), TraceValue::Unknown);
    }

    #[test]
    fn test_buffer_initial_value_is_item_count() {
        let target = ProbeTarget::bounded_buffer(7, None);
        assert_eq!(target.inferred_kind(), Some(VarKind::Integer));
        assert_eq!(target.initial_value(), TraceValue::Int(7));
    }

    #[test]
    fn test_opaque_shape_has_no_kind() {
        let target = ProbeTarget::opaque("mystery");
        assert_eq!(target.inferred_kind(), None);
        assert_eq!(target.type_label(), "mystery");
    }
}
