use crate::difference::StringDifference;
use std::fmt;

mod format;


use format::ComparisonDisplay;
#[cfg(feature = "color")]
use format::Palette;

/// Context length used by [`Compactor::default`]
pub const DEFAULT_CONTEXT_LEN: usize = 20;

/// An error returned by [`Compactor::try_new`] when the requested context length is negative
///
/// [`Compactor::try_new`]: struct.Compactor.html#method.try_new
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidContextLength(i64);

impl InvalidContextLength {
    /// The rejected context length
    pub fn context_len(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for InvalidContextLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid context length: {}", self.0)
    }
}

impl std::error::Error for InvalidContextLength {}

/// Renders an expected and an actual string as a compact, bracketed comparison.
///
/// The differing region of each side is wrapped in `[` and `]`. At most `context_len` chars of
/// the common prefix and suffix are kept next to it, and anything trimmed is replaced by `...`.
///
/// ```
/// use comparison_compactor::Compactor;
///
/// let compactor = Compactor::new(1);
/// assert_eq!(
///     compactor.format(None, Some("abcde"), Some("abfde")),
///     "expected:<...b[c]d...> but was:<...b[f]d...>",
/// );
/// assert_eq!(
///     compactor.format(Some("oops"), Some("a"), None),
///     "oops expected:<a> but was:<null>",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Compactor {
    context_len: usize,

    #[cfg(feature = "color")]
    palette: Option<Palette>,
}

impl Compactor {
    /// Construct a new compactor keeping `context_len` chars of context on each side of the delta
    pub fn new(context_len: usize) -> Self {
        Self {
            context_len,

            #[cfg(feature = "color")]
            palette: None,
        }
    }

    /// Construct a new compactor from a signed context length.
    ///
    /// Negative lengths (and lengths that don't fit a `usize`) are rejected rather than clamped.
    pub fn try_new(context_len: i64) -> Result<Self, InvalidContextLength> {
        usize::try_from(context_len)
            .map(Self::new)
            .map_err(|_| InvalidContextLength(context_len))
    }

    /// Set the number of context chars kept next to the delta
    ///
    /// [`Compactor::new`] sets this to the value it was given.
    pub fn set_context_len(&mut self, context_len: usize) -> &mut Self {
        self.context_len = context_len;
        self
    }

    pub fn context_len(&self) -> usize {
        self.context_len
    }

    /// Enable ANSI styling of the deltas and ellipses
    #[cfg(feature = "color")]
    pub fn with_color(mut self) -> Self {
        self.palette = Some(Palette::new());
        self
    }

    /// Compare `expected` with `actual` and render the result, prefixed by `message` if present
    pub fn format(
        &self,
        message: Option<&str>,
        expected: Option<&str>,
        actual: Option<&str>,
    ) -> String {
        let diff = StringDifference::new(expected, actual);
        self.fmt_comparison(message, &diff).to_string()
    }

    /// Returns a `Display` impl which renders an already computed [`StringDifference`]
    pub fn fmt_comparison<'a>(
        &'a self,
        message: Option<&'a str>,
        diff: &'a StringDifference<'a>,
    ) -> impl fmt::Display + 'a {
        ComparisonDisplay::new(self, message, diff)
    }
}

impl Default for Compactor {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LEN)
    }
}

/// Render the compacted comparison of `expected` and `actual`
///
/// ```
/// use comparison_compactor::format_compacted_comparison;
///
/// let failure = format_compacted_comparison(None, Some("S&P500"), Some("0"), 10);
/// assert_eq!(failure, "expected:<[S&P50]0> but was:<[]0>");
/// ```
pub fn format_compacted_comparison(
    message: Option<&str>,
    expected: Option<&str>,
    actual: Option<&str>,
    context_len: usize,
) -> String {
    Compactor::new(context_len).format(message, expected, actual)
}
