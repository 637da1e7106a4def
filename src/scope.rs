// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Dotted hierarchical scope names and the include/exclude scope filter.
//!
//! A scope like `sim.queue.depth` names a probe's logical location. The
//! trailing segment after the last dot is the *leaf name*; the remainder is
//! the *parent scope* used when generating nested signal names.
//!
//! Filtering uses anchored-start, unanchored-end pattern matching (standard
//! regex "match" rather than "fullmatch" semantics), so the pattern
//! `sim.queue` enables the scope `sim.queue.depth`.

use regex::Regex;

use crate::errors::ConfigError;

/// Split a dotted scope into `(parent scope, leaf name)`.
///
/// An undotted scope has an empty parent.
///
/// # Examples
///
/// ```rust
/// use simtrace::split_scope;
///
/// assert_eq!(split_scope("sim.queue.depth"), ("sim.queue", "depth"));
/// assert_eq!(split_scope("top"), ("", "top"));
/// ```
pub fn split_scope(scope: &str) -> (&str, &str) {
    match scope.rfind('.') {
        Some(idx) => (&scope[..idx], &scope[idx + 1..]),
        None => ("", scope),
    }
}

/// Ordered include/exclude pattern sets deciding scope enablement.
///
/// A scope is enabled iff it matches at least one include pattern and no
/// exclude pattern. The default include set matches everything; the default
/// exclude set is empty.
///
/// # Examples
///
/// ```rust
/// use simtrace::ScopeFilter;
///
/// let filter = ScopeFilter::new(
///     &["sim\\.queue".into()],
///     &["sim\\.queue\\.internal".into()],
/// ).unwrap();
///
/// assert!(filter.is_enabled("sim.queue.depth"));
/// assert!(!filter.is_enabled("sim.queue.internal.count"));
/// assert!(!filter.is_enabled("sim.cpu.load"));
/// ```
#[derive(Debug)]
pub struct ScopeFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl ScopeFilter {
    /// Compile include and exclude pattern lists.
    ///
    /// Patterns are compiled once, here; any malformed pattern fails
    /// construction with [`ConfigError::MalformedPattern`].
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(ScopeFilter {
            include: compile_all(include)?,
            exclude: compile_all(exclude)?,
        })
    }

    /// Filter with the default pattern sets: include everything, exclude
    /// nothing.
    pub fn match_all() -> Self {
        ScopeFilter::new(&[".*".to_string()], &[]).expect("default pattern compiles")
    }

    /// Whether the scope matches >= 1 include pattern and 0 exclude patterns.
    pub fn is_enabled(&self, scope: &str) -> bool {
        self.include.iter().any(|re| re.is_match(scope))
            && !self.exclude.iter().any(|re| re.is_match(scope))
    }
}

/// Compile one pattern anchored at the start of the scope.
///
/// The end stays unanchored so a parent-scope pattern enables all scopes
/// beneath it.
fn compile_anchored(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!("^(?:{pattern})"))
        .map_err(|source| ConfigError::malformed_pattern(pattern, source))
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns.iter().map(|p| compile_anchored(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scope_nested() {
        assert_eq!(split_scope("a.b.c.d"), ("a.b.c", "d"));
    }

    #[test]
    fn test_split_scope_flat() {
        assert_eq!(split_scope("root"), ("", "root"));
    }

    #[test]
    fn test_match_all_enables_everything() {
        let filter = ScopeFilter::match_all();
        assert!(filter.is_enabled("sim.queue.depth"));
        assert!(filter.is_enabled("anything"));
    }

    #[test]
    fn test_anchored_start_prefix_semantics() {
        // A parent-scope pattern enables scopes beneath it but the match
        // must begin at position zero.
        let filter = ScopeFilter::new(&["sim\\.queue".into()], &[]).unwrap();
        assert!(filter.is_enabled("sim.queue"));
        assert!(filter.is_enabled("sim.queue.depth"));
        assert!(!filter.is_enabled("outer.sim.queue"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = ScopeFilter::new(&[".*".into()], &["sim\\.noisy".into()]).unwrap();
        assert!(filter.is_enabled("sim.quiet"));
        assert!(!filter.is_enabled("sim.noisy.counter"));
    }

    #[test]
    fn test_multiple_includes_any_match() {
        let filter =
            ScopeFilter::new(&["sim\\.net".into(), "sim\\.cpu".into()], &[]).unwrap();
        assert!(filter.is_enabled("sim.net.rx"));
        assert!(filter.is_enabled("sim.cpu.load"));
        assert!(!filter.is_enabled("sim.disk.io"));
    }

    #[test]
    fn test_no_includes_disables_everything() {
        let filter = ScopeFilter::new(&[], &[]).unwrap();
        assert!(!filter.is_enabled("sim.queue.depth"));
    }

    #[test]
    fn test_malformed_pattern_fails_construction() {
        let err = ScopeFilter::new(&["sim.(queue".into()], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPattern { .. }));
    }
}
