//! Find the structure shared by two strings

use crate::utils::{char_len, slice_chars};


/// The common prefix and common suffix of an expected and an actual string.
///
/// All lengths count `char`s. The suffix is measured after the prefix has been claimed, so the
/// two never cover the same position in either string:
///
/// ```
/// use comparison_compactor::StringDifference;
///
/// let diff = StringDifference::new(Some("abc"), Some("abbc"));
/// assert_eq!(diff.common_prefix(), "ab");
/// assert_eq!(diff.common_suffix(), "c");
/// assert_eq!(diff.delta_expected(), Some(""));
/// assert_eq!(diff.delta_actual(), Some("b"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringDifference<'a> {
    expected: Option<&'a str>,
    actual: Option<&'a str>,
    prefix_len: usize,
    suffix_len: usize,
}

impl<'a> StringDifference<'a> {
    /// Compute the common prefix and suffix of `expected` and `actual`.
    ///
    /// When either value is absent both lengths are 0.
    pub fn new(expected: Option<&'a str>, actual: Option<&'a str>) -> Self {
        let (prefix_len, suffix_len) = match (expected, actual) {
            (Some(expected), Some(actual)) => {
                let prefix_len = common_prefix_len(expected, actual);
                (prefix_len, common_suffix_len(expected, actual, prefix_len))
            }
            _ => (0, 0),
        };

        Self {
            expected,
            actual,
            prefix_len,
            suffix_len,
        }
    }

    pub fn expected(&self) -> Option<&'a str> {
        self.expected
    }

    pub fn actual(&self) -> Option<&'a str> {
        self.actual
    }

    /// Length of the longest prefix shared by both strings
    pub fn common_prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// Length of the longest suffix shared by both strings that doesn't overlap the prefix
    pub fn common_suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// Returns `true` if both values are present and not equal.
    ///
    /// Equality is exact: strings are compared char by char with no normalization.
    pub fn is_comparable(&self) -> bool {
        self.comparable_pair().is_some()
    }

    /// The common prefix, or `""` if the values aren't comparable
    pub fn common_prefix(&self) -> &'a str {
        match self.comparable_pair() {
            Some((expected, _)) => slice_chars(expected, 0, self.prefix_len),
            None => "",
        }
    }

    /// The common suffix, or `""` if the values aren't comparable
    pub fn common_suffix(&self) -> &'a str {
        match self.comparable_pair() {
            Some((expected, _)) => {
                let len = char_len(expected);
                slice_chars(expected, len - self.suffix_len, len)
            }
            None => "",
        }
    }

    /// The part of `expected` between the common prefix and the common suffix
    pub fn delta_expected(&self) -> Option<&'a str> {
        self.comparable_pair()
            .map(|(expected, _)| self.delta(expected))
    }

    /// The part of `actual` between the common prefix and the common suffix
    pub fn delta_actual(&self) -> Option<&'a str> {
        self.comparable_pair().map(|(_, actual)| self.delta(actual))
    }

    // `side` must be one of the two compared strings.
    pub(crate) fn delta(&self, side: &'a str) -> &'a str {
        let len = char_len(side);
        slice_chars(side, self.prefix_len, len - self.suffix_len)
    }

    pub(crate) fn comparable_pair(&self) -> Option<(&'a str, &'a str)> {
        match (self.expected, self.actual) {
            (Some(expected), Some(actual)) if expected != actual => Some((expected, actual)),
            _ => None,
        }
    }
}

fn common_prefix_len(expected: &str, actual: &str) -> usize {
    expected
        .chars()
        .zip(actual.chars())
        .take_while(|(e, a)| e == a)
        .count()
}

fn common_suffix_len(expected: &str, actual: &str, prefix_len: usize) -> usize {
    let expected_len = char_len(expected);
    let actual_len = char_len(actual);
    let mut pairs = expected.chars().rev().zip(actual.chars().rev());

    // The overlap check has to come before the comparison, otherwise the suffix could claim a
    // char that already belongs to the prefix.
    let mut suffix_len = 0;
    while !suffix_overlaps_prefix(prefix_len, suffix_len, expected_len, actual_len) {
        match pairs.next() {
            Some((e, a)) if e == a => suffix_len += 1,
            _ => break,
        }
    }

    suffix_len
}

/// Returns `true` if a suffix of `suffix_len` would reach into the prefix of either string.
pub(crate) fn suffix_overlaps_prefix(
    prefix_len: usize,
    suffix_len: usize,
    expected_len: usize,
    actual_len: usize,
) -> bool {
    actual_len.saturating_sub(suffix_len) <= prefix_len
        || expected_len.saturating_sub(suffix_len) <= prefix_len
}
