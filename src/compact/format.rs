use super::Compactor;
use crate::{
    difference::StringDifference,
    utils::{char_len, slice_chars},
};
use std::{
    cmp,
    fmt::{Display, Formatter, Result, Write},
};

#[cfg(feature = "color")]
use anstyle::{AnsiColor, Style};

const ELLIPSIS: &str = "...";
const DELTA_START: char = '[';
const DELTA_END: char = ']';
const NULL: &str = "null";

/// Styles used when a `Compactor` has color enabled
#[cfg(feature = "color")]
#[derive(Clone, Copy, Debug)]
pub(super) struct Palette {
    ellipsis: Style,
    expected_delta: Style,
    actual_delta: Style,
}

#[cfg(feature = "color")]
impl Palette {
    pub(super) fn new() -> Self {
        Self {
            ellipsis: Style::new().dimmed(),
            expected_delta: Style::new().fg_color(Some(AnsiColor::Red.into())).bold(),
            actual_delta: Style::new().fg_color(Some(AnsiColor::Green.into())).bold(),
        }
    }

    fn style(&self, part: Part) -> Style {
        match part {
            Part::Ellipsis => self.ellipsis,
            Part::Delta(Side::Expected) => self.expected_delta,
            Part::Delta(Side::Actual) => self.actual_delta,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Expected,
    Actual,
}

#[cfg_attr(not(feature = "color"), allow(dead_code))]
#[derive(Clone, Copy, Debug)]
enum Part {
    Ellipsis,
    Delta(Side),
}

pub(super) struct ComparisonDisplay<'a> {
    f: &'a Compactor,
    message: Option<&'a str>,
    diff: &'a StringDifference<'a>,
}

impl<'a> ComparisonDisplay<'a> {
    pub(super) fn new(
        f: &'a Compactor,
        message: Option<&'a str>,
        diff: &'a StringDifference<'a>,
    ) -> Self {
        Self { f, message, diff }
    }
}

impl Display for ComparisonDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(message) = self.message {
            write!(f, "{} ", message)?;
        }

        match self.diff.comparable_pair() {
            Some((expected, actual)) => {
                let expected_side = SideDisplay {
                    f: self.f,
                    diff: self.diff,
                    expected,
                    text: expected,
                    side: Side::Expected,
                };
                let actual_side = SideDisplay {
                    text: actual,
                    side: Side::Actual,
                    ..expected_side
                };
                write!(f, "expected:<{}> but was:<{}>", expected_side, actual_side)
            }
            None => write!(
                f,
                "expected:<{}> but was:<{}>",
                self.diff.expected().unwrap_or(NULL),
                self.diff.actual().unwrap_or(NULL),
            ),
        }
    }
}

/// One compacted side of a comparable pair.
///
/// Context always comes from `expected`; only the delta is taken from the side itself.
#[derive(Clone, Copy)]
struct SideDisplay<'a> {
    f: &'a Compactor,
    diff: &'a StringDifference<'a>,
    expected: &'a str,
    text: &'a str,
    side: Side,
}

impl SideDisplay<'_> {
    #[cfg_attr(not(feature = "color"), allow(unused_variables))]
    fn write_part(&self, f: &mut Formatter<'_>, part: Part, text: &str) -> Result {
        #[cfg(feature = "color")]
        if let Some(palette) = &self.f.palette {
            if !text.is_empty() {
                let style = palette.style(part);
                return write!(f, "{}{}{}", style.render(), text, style.render_reset());
            }
        }

        f.write_str(text)
    }
}

impl Display for SideDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let context_len = self.f.context_len();
        let prefix_len = self.diff.common_prefix_len();
        let suffix_len = self.diff.common_suffix_len();

        if prefix_len > context_len {
            self.write_part(f, Part::Ellipsis, ELLIPSIS)?;
        }
        f.write_str(slice_chars(
            self.expected,
            prefix_len.saturating_sub(context_len),
            prefix_len,
        ))?;

        f.write_char(DELTA_START)?;
        self.write_part(f, Part::Delta(self.side), self.diff.delta(self.text))?;
        f.write_char(DELTA_END)?;

        let expected_len = char_len(self.expected);
        let context_start = expected_len - suffix_len;
        let context_end = cmp::min(context_start.saturating_add(context_len), expected_len);
        f.write_str(slice_chars(self.expected, context_start, context_end))?;
        if suffix_len > context_len {
            self.write_part(f, Part::Ellipsis, ELLIPSIS)?;
        }

        Ok(())
    }
}
