//! Anchored matcher built on the `regex` crate

use crate::report::PatternError;
use regex::Regex;

/// A compiled pattern that only matches when it consumes the entire input.
///
/// The underlying engine searches for substring matches, so the pattern is
/// compiled wrapped as `\A(?:pattern)\z`. The raw pattern is compiled first
/// on its own: diagnostics then refer to the caller's text, and a malformed
/// pattern can never combine with the wrapper into a valid regex that means
/// something else (`a)x(b` would).
///
/// # Examples
///
/// ```
/// use rxcheck::FullMatcher;
///
/// let matcher = FullMatcher::new(r"\d+").unwrap();
/// assert!(matcher.full_match("123").is_some());
/// assert!(matcher.full_match("x123").is_none());
/// ```
pub struct FullMatcher {
    anchored: Regex,
    group_count: usize,
}

impl FullMatcher {
    /// Compile `pattern` for whole-string matching.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::CompileFailed`] when `pattern` is not valid
    /// under the engine's dialect.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        // Validate the raw pattern before wrapping it.
        Regex::new(pattern)?;
        let anchored = Regex::new(&format!(r"\A(?:{pattern})\z"))?;

        Ok(Self {
            group_count: anchored.captures_len() - 1,
            anchored,
        })
    }

    /// Match against the whole of `input`.
    ///
    /// Returns the captured group values in pattern order on success, with
    /// `None` for groups that did not participate in the match. A matching
    /// pattern without capture groups yields an empty vector.
    pub fn full_match(&self, input: &str) -> Option<Vec<Option<String>>> {
        let caps = self.anchored.captures(input)?;

        Some(
            (1..=self.group_count)
                .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
                .collect(),
        )
    }

    /// Number of capture groups the pattern defines.
    pub fn group_count(&self) -> usize {
        self.group_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_whole_string_only() {
        let matcher = FullMatcher::new("abc").unwrap();

        assert!(matcher.full_match("abc").is_some());
        assert!(matcher.full_match("xabcx").is_none());
        assert!(matcher.full_match("abcx").is_none());
        assert!(matcher.full_match("xabc").is_none());
    }

    #[test]
    fn test_prefix_match_rejected() {
        let matcher = FullMatcher::new(r"\d+").unwrap();

        assert!(matcher.full_match("123").is_some());
        assert!(matcher.full_match("123x").is_none());
    }

    #[test]
    fn test_captures_in_pattern_order() {
        let matcher = FullMatcher::new(r"(\d+)-(\d+)").unwrap();

        let groups = matcher.full_match("12-34").unwrap();
        assert_eq!(
            groups,
            vec![Some("12".to_string()), Some("34".to_string())]
        );
    }

    #[test]
    fn test_no_groups_yields_empty_sequence() {
        let matcher = FullMatcher::new(r"\w+").unwrap();

        let groups = matcher.full_match("hello").unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_unset_group_is_none() {
        let matcher = FullMatcher::new("(a)|(b)").unwrap();

        assert_eq!(
            matcher.full_match("a").unwrap(),
            vec![Some("a".to_string()), None]
        );
        assert_eq!(
            matcher.full_match("b").unwrap(),
            vec![None, Some("b".to_string())]
        );
    }

    #[test]
    fn test_alternation_consumes_whole_string() {
        // The shorter branch alone would stop before the end of the input.
        let matcher = FullMatcher::new("a|ab").unwrap();

        assert!(matcher.full_match("ab").is_some());
        assert!(matcher.full_match("a").is_some());
        assert!(matcher.full_match("abc").is_none());
    }

    #[test]
    fn test_invalid_pattern_is_compile_error() {
        let result = FullMatcher::new("(abc");

        assert!(matches!(result, Err(PatternError::CompileFailed(_))));
    }

    #[test]
    fn test_unbalanced_pattern_not_repaired_by_wrapper() {
        // `\A(?:a)x(b)\z` would be a valid regex; the raw pattern is not.
        assert!(FullMatcher::new("a)x(b").is_err());
    }

    #[test]
    fn test_empty_pattern_matches_empty_string_only() {
        let matcher = FullMatcher::new("").unwrap();

        assert!(matcher.full_match("").is_some());
        assert!(matcher.full_match("a").is_none());
    }

    #[test]
    fn test_inline_flags_stay_scoped() {
        let matcher = FullMatcher::new("(?i)hello").unwrap();

        assert!(matcher.full_match("HELLO").is_some());
        assert!(matcher.full_match("say HELLO").is_none());
    }

    #[test]
    fn test_utf8_input() {
        let matcher = FullMatcher::new(r"\w+").unwrap();

        assert!(matcher.full_match("héllo").is_some());
        assert!(matcher.full_match("世界").is_some());
    }

    #[test]
    fn test_group_count() {
        assert_eq!(FullMatcher::new("abc").unwrap().group_count(), 0);
        assert_eq!(FullMatcher::new("(a)(b)(c)").unwrap().group_count(), 3);
        assert_eq!(FullMatcher::new("(?:a)(b)").unwrap().group_count(), 1);
    }
}
