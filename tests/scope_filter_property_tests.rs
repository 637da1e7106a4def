// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property tests for scope filter semantics.
//!
//! With literal (escaped) patterns, the regex machinery must reduce to plain
//! prefix logic: a scope is enabled iff some include pattern is a prefix and
//! no exclude pattern is.

use proptest::prelude::*;
use simtrace::ScopeFilter;

/// Dotted scope paths over a tiny segment alphabet, so include/exclude
/// prefixes collide often enough to exercise both branches.
fn scope_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]{1,3}", 1..4).prop_map(|segs| segs.join("."))
}

proptest! {
    #[test]
    fn literal_patterns_reduce_to_prefix_logic(
        includes in prop::collection::vec(scope_strategy(), 1..4),
        excludes in prop::collection::vec(scope_strategy(), 0..4),
        scope in scope_strategy(),
    ) {
        let include_pats: Vec<String> = includes.iter().map(|s| regex::escape(s)).collect();
        let exclude_pats: Vec<String> = excludes.iter().map(|s| regex::escape(s)).collect();
        let filter = ScopeFilter::new(&include_pats, &exclude_pats).unwrap();

        let expected = includes.iter().any(|p| scope.starts_with(p.as_str()))
            && !excludes.iter().any(|p| scope.starts_with(p.as_str()));
        prop_assert_eq!(filter.is_enabled(&scope), expected);
    }

    #[test]
    fn match_all_include_admits_every_scope(scope in scope_strategy()) {
        let filter = ScopeFilter::match_all();
        prop_assert!(filter.is_enabled(&scope));
    }

    #[test]
    fn exclude_always_wins_over_include(scope in scope_strategy()) {
        let pattern = regex::escape(&scope);
        let filter = ScopeFilter::new(
            std::slice::from_ref(&pattern),
            std::slice::from_ref(&pattern),
        )
        .unwrap();
        prop_assert!(!filter.is_enabled(&scope));
    }
}
