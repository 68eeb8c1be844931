//! Compact rendering of the difference between an expected and an actual string
//!
//! Meant for test-failure messages: instead of printing two long strings that differ in a single
//! place, the common prefix and suffix are trimmed to a few chars of context and the differing
//! region is wrapped in brackets.
//!
//! ```
//! use comparison_compactor::Compactor;
//!
//! let expected = "The quick brown fox jumps over the lazy dog";
//! let actual = "The quick brown cat jumps over the lazy dog";
//!
//! assert_eq!(
//!     Compactor::new(4).format(Some("animal"), Some(expected), Some(actual)),
//!     "animal expected:<...own [fox] jum...> but was:<...own [cat] jum...>",
//! );
//! ```
//!
//! Values that can't be compared, because one is absent or both are equal, are printed whole:
//!
//! ```
//! use comparison_compactor::format_compacted_comparison;
//!
//! assert_eq!(
//!     format_compacted_comparison(None, Some("a"), None, 0),
//!     "expected:<a> but was:<null>",
//! );
//! ```

mod compact;
mod difference;
mod utils;

pub use compact::{Compactor, DEFAULT_CONTEXT_LEN, InvalidContextLength, format_compacted_comparison};
pub use difference::StringDifference;
