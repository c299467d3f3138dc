//! # Suffix Heuristic
//!
//! Users often type `foo/e` at a search prompt expecting traditional
//! `/pattern/offset` behaviour. The editor's last-search register keeps the
//! pattern only, so the offset is lost by the time it reaches us. When asked
//! to, this module looks for a trailing end-of-match marker and turns it back
//! into an offset.

use crate::offset::StoredPattern;

/// "Forward search, stop at end of match."
pub const FORWARD_END_MARKER: &str = "/e";

/// "Backward search, stop at end of match."
pub const BACKWARD_END_MARKER: &str = "?e";

/// The offset both markers stand for.
pub const END_OF_MATCH: &str = "e";

/// Strips a trailing end-of-match marker from `pattern` when `enabled`.
///
/// Returns the (possibly shortened) pattern and the implicit offset, if one
/// was found. Disabled, the pattern comes back untouched.
pub fn maybe_extract_offset(pattern: &str, enabled: bool) -> (String, Option<String>) {
    if !enabled {
        return (pattern.to_string(), None);
    }

    let stripped = pattern
        .strip_suffix(FORWARD_END_MARKER)
        .or_else(|| pattern.strip_suffix(BACKWARD_END_MARKER));

    match stripped {
        Some(rest) => (rest.to_string(), Some(END_OF_MATCH.to_string())),
        None => (pattern.to_string(), None),
    }
}

/// [`maybe_extract_offset`], packaged as a [`StoredPattern`].
pub fn extract_stored(pattern: &str, enabled: bool) -> StoredPattern {
    let (pattern, offset) = maybe_extract_offset(pattern, enabled);
    StoredPattern { pattern, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_forward_marker() {
        let (pattern, offset) = maybe_extract_offset("x -> \\zs.*\\ze /e", true);
        assert_eq!(pattern, "x -> \\zs.*\\ze ");
        assert_eq!(offset.as_deref(), Some(END_OF_MATCH));
    }

    #[test]
    fn strips_backward_marker() {
        let (pattern, offset) = maybe_extract_offset("needle?e", true);
        assert_eq!(pattern, "needle");
        assert_eq!(offset.as_deref(), Some("e"));
    }

    #[test]
    fn disabled_returns_pattern_untouched() {
        let (pattern, offset) = maybe_extract_offset("x -> \\zs.*\\ze /e", false);
        assert_eq!(pattern, "x -> \\zs.*\\ze /e");
        assert_eq!(offset, None);
    }

    #[test]
    fn leaves_patterns_without_marker_alone() {
        for input in ["foo", "foo/", "foo/e+1", "e", "/x"] {
            assert_eq!(maybe_extract_offset(input, true), (input.to_string(), None));
        }
    }

    #[test]
    fn only_the_last_marker_is_removed() {
        let (pattern, offset) = maybe_extract_offset("a/e/e", true);
        assert_eq!(pattern, "a/e");
        assert_eq!(offset.as_deref(), Some("e"));
    }

    #[test]
    fn marker_alone_leaves_empty_pattern() {
        assert_eq!(
            extract_stored("/e", true),
            StoredPattern::with_offset("", "e")
        );
    }
}
