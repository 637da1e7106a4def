// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Two-phase log line templates.
//!
//! A [`LineTemplate`] is compiled once from the configured format string.
//! Activation binds the static placeholders (`{level}`, `{ts_unit}`,
//! `{scope}`) a single time, yielding a [`BoundTemplate`] that holds only the
//! per-record free parameters; rendering a record then substitutes `{ts}` and
//! `{message}` without re-deriving the static portion on every probe firing.
//!
//! The default template is
//! `"{level} {ts:.3f} {ts_unit}: {scope}: {message}"`. Consumers may
//! override it but the five placeholders keep their semantics. Literal braces
//! are written `{{` and `}}`.

use std::fmt::Write as _;

use crate::errors::ConfigError;
use crate::level::Level;
use crate::value::TraceValue;

/// One piece of a parsed line template.
#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Level,
    /// Simulated time, with optional fixed decimal precision (`{ts:.3f}`)
    Ts {
        precision: Option<usize>,
    },
    TsUnit,
    Scope,
    Message,
}

/// A compiled log line template with five named placeholders.
///
/// # Examples
///
/// ```rust
/// use simtrace::{Level, LineTemplate};
///
/// let template = LineTemplate::parse("{level} {ts:.1f}{ts_unit} {scope}: {message}").unwrap();
/// let bound = template.bind(Level::Info, "us", "sim.net");
/// assert_eq!(bound.render(2.0, "link up"), "INFO 2.0us sim.net: link up");
/// ```
#[derive(Debug, Clone)]
pub struct LineTemplate {
    segments: Vec<Segment>,
}

impl LineTemplate {
    /// Compile a template string.
    ///
    /// Unknown placeholders are a [`ConfigError::InvalidTemplate`].
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let segments = parse_segments(template, |name, spec| match name {
            "level" => Some(Segment::Level),
            "ts" => Some(Segment::Ts {
                precision: parse_precision(spec),
            }),
            "ts_unit" => Some(Segment::TsUnit),
            "scope" => Some(Segment::Scope),
            "message" => Some(Segment::Message),
            _ => None,
        })?;
        Ok(LineTemplate { segments })
    }

    /// Substitute the static placeholders once, leaving `{ts}` and
    /// `{message}` free.
    pub fn bind(&self, level: Level, ts_unit: &str, scope: &str) -> BoundTemplate {
        let mut bound: Vec<BoundSegment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let next = match segment {
                Segment::Literal(text) => BoundSegment::Literal(text.clone()),
                Segment::Level => BoundSegment::Literal(level.name().to_string()),
                Segment::TsUnit => BoundSegment::Literal(ts_unit.to_string()),
                Segment::Scope => BoundSegment::Literal(scope.to_string()),
                Segment::Ts { precision } => BoundSegment::Ts {
                    precision: *precision,
                },
                Segment::Message => BoundSegment::Message,
            };
            // Merge adjacent literals so render touches as few pieces as possible
            match (bound.last_mut(), next) {
                (Some(BoundSegment::Literal(prev)), BoundSegment::Literal(text)) => {
                    prev.push_str(&text);
                }
                (_, next) => bound.push(next),
            }
        }
        BoundTemplate { segments: bound }
    }
}

#[derive(Debug, Clone)]
enum BoundSegment {
    Literal(String),
    Ts { precision: Option<usize> },
    Message,
}

/// A line template with level, time unit, and scope already substituted.
#[derive(Debug, Clone)]
pub struct BoundTemplate {
    segments: Vec<BoundSegment>,
}

impl BoundTemplate {
    /// Render one record at the given simulated time.
    pub fn render(&self, ts: f64, message: &str) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                BoundSegment::Literal(text) => line.push_str(text),
                BoundSegment::Ts { precision } => match *precision {
                    Some(p) => {
                        let _ = write!(line, "{ts:.p$}");
                    }
                    None => {
                        let _ = write!(line, "{ts}");
                    }
                },
                BoundSegment::Message => line.push_str(message),
            }
        }
        line
    }
}

/// A per-probe value format with a single `{value}` placeholder.
#[derive(Debug, Clone)]
pub struct ValueTemplate {
    segments: Vec<ValueSegment>,
}

#[derive(Debug, Clone, PartialEq)]
enum ValueSegment {
    Literal(String),
    Value,
}

impl ValueTemplate {
    /// Compile a value format string; only `{value}` is recognized.
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let segments = parse_segments(template, |name, _spec| match name {
            "value" => Some(ValueSegment::Value),
            _ => None,
        })?;
        Ok(ValueTemplate { segments })
    }

    /// Render the probed value into the format.
    pub fn render(&self, value: &TraceValue) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                ValueSegment::Literal(text) => out.push_str(text),
                ValueSegment::Value => {
                    let _ = write!(out, "{value}");
                }
            }
        }
        out
    }
}

/// Shared scanner for `{name[:spec]}` placeholder syntax with `{{`/`}}`
/// escapes. The resolver maps a placeholder name to a segment, or `None` for
/// unknown names.
fn parse_segments<S>(
    template: &str,
    resolve: impl Fn(&str, &str) -> Option<S>,
) -> Result<Vec<S>, ConfigError>
where
    S: From<String>,
{
    let mut segments: Vec<S> = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut inner = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    inner.push(c);
                }
                if !closed {
                    return Err(ConfigError::invalid_template(template, inner));
                }
                let (name, spec) = match inner.split_once(':') {
                    Some((name, spec)) => (name, spec),
                    None => (inner.as_str(), ""),
                };
                let segment = resolve(name, spec)
                    .ok_or_else(|| ConfigError::invalid_template(template, name))?;
                if !literal.is_empty() {
                    segments.push(S::from(std::mem::take(&mut literal)));
                }
                segments.push(segment);
            }
            other => literal.push(other),
        }
    }
    if !literal.is_empty() {
        segments.push(S::from(literal));
    }
    Ok(segments)
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Segment::Literal(text)
    }
}

impl From<String> for ValueSegment {
    fn from(text: String) -> Self {
        ValueSegment::Literal(text)
    }
}

/// Parse a `.3f`-style format spec into a decimal precision.
fn parse_precision(spec: &str) -> Option<usize> {
    let spec = spec.strip_prefix('.')?;
    let digits = spec.strip_suffix('f').unwrap_or(spec);
    digits.parse().ok()
}
