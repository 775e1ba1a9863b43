// Rust guideline compliant 2026-08-30

//! Property-based tests for identifier parsing.
//!
//! The resolver must be total: any input string either parses to a
//! reference or yields None, and parsing a rendered reference always
//! round-trips.

use proptest::prelude::*;
use slate_core::{parse_id, DepRef};

proptest! {
    /// Arbitrary input never panics; the result is None or a reference
    /// whose rendering re-parses to itself.
    #[test]
    fn prop_parse_is_total(input in ".*") {
        if let Some(dep) = parse_id(&input) {
            let rendered = dep.to_string();
            prop_assert_eq!(parse_id(&rendered), Some(dep));
        }
    }

    /// Canonical simple ids always parse.
    #[test]
    fn prop_simple_ids_parse(id in any::<u32>()) {
        prop_assert_eq!(parse_id(&id.to_string()), Some(DepRef::Task(id)));
    }

    /// Canonical composite ids always parse.
    #[test]
    fn prop_composite_ids_parse(parent in any::<u32>(), sub in any::<u32>()) {
        let rendered = format!("{}.{}", parent, sub);
        prop_assert_eq!(parse_id(&rendered), Some(DepRef::Subtask { parent, sub }));
    }

    /// More than one separator never parses.
    #[test]
    fn prop_extra_separator_rejected(a in any::<u32>(), b in any::<u32>(), c in any::<u32>()) {
        let rendered = format!("{}.{}.{}", a, b, c);
        prop_assert_eq!(parse_id(&rendered), None);
    }

    /// Non-numeric segments never parse.
    #[test]
    fn prop_alpha_segments_rejected(s in "[a-zA-Z]+") {
        prop_assert_eq!(parse_id(&s), None);
        prop_assert_eq!(parse_id(&format!("1.{}", s)), None);
        prop_assert_eq!(parse_id(&format!("{}.1", s)), None);
    }
}
