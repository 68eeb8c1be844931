#![no_main]

use comparison_compactor::{Compactor, StringDifference};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, Option<&str>, Option<&str>)| {
    let (context_len, expected, actual) = input;
    let diff = StringDifference::new(expected, actual);

    if let (Some(expected), Some(actual)) = (expected, actual) {
        let min_len = expected.chars().count().min(actual.chars().count());
        assert!(diff.common_prefix_len() + diff.common_suffix_len() <= min_len);
    }

    let compactor = Compactor::new(context_len.into());
    let rendered = compactor.fmt_comparison(None, &diff).to_string();
    assert_eq!(rendered, compactor.format(None, expected, actual));

    let _ = compactor.with_color().fmt_comparison(Some("fuzz"), &diff).to_string();
});
