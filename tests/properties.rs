//! Exhaustive checks over every pair of short words from a small alphabet

use comparison_compactor::{Compactor, StringDifference};
use rayon::prelude::*;

const ALPHABET: [char; 3] = ['a', 'b', 'é'];
const MAX_WORD_LEN: usize = 4;
const MAX_CONTEXT_LEN: usize = 6;

fn words() -> Vec<String> {
    let mut words = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..MAX_WORD_LEN {
        frontier = frontier
            .iter()
            .flat_map(|word| ALPHABET.map(|c| format!("{word}{c}")))
            .collect();
        words.extend(frontier.iter().cloned());
    }
    words
}

fn pairs() -> Vec<(String, String)> {
    let words = words();
    words
        .iter()
        .flat_map(|expected| {
            words
                .iter()
                .map(move |actual| (expected.clone(), actual.clone()))
        })
        .collect()
}

fn sides(rendered: &str) -> (&str, &str) {
    let rest = rendered.strip_prefix("expected:<").unwrap();
    let (expected, actual) = rest.split_once("> but was:<").unwrap();
    (expected, actual.strip_suffix('>').unwrap())
}

fn contexts(side: &str) -> (&str, &str) {
    let (start, rest) = side.split_once('[').unwrap();
    let (_, end) = rest.split_once(']').unwrap();
    (start.trim_start_matches("..."), end.trim_end_matches("..."))
}

#[test]
fn prefix_and_suffix_never_overlap() {
    pairs().par_iter().for_each(|(expected, actual)| {
        let diff = StringDifference::new(Some(expected.as_str()), Some(actual.as_str()));
        let min_len = expected.chars().count().min(actual.chars().count());
        assert!(
            diff.common_prefix_len() + diff.common_suffix_len() <= min_len,
            "{expected:?} vs {actual:?}"
        );
        if diff.is_comparable() {
            assert!(expected.starts_with(diff.common_prefix()));
            assert!(actual.starts_with(diff.common_prefix()));
            assert!(expected.ends_with(diff.common_suffix()));
            assert!(actual.ends_with(diff.common_suffix()));
        }
    });
}

#[test]
fn plain_format_for_equal_or_absent() {
    let compactors: Vec<_> = (0..=MAX_CONTEXT_LEN).map(Compactor::new).collect();
    words().par_iter().for_each(|word| {
        for compactor in &compactors {
            assert_eq!(
                compactor.format(None, Some(word.as_str()), Some(word.as_str())),
                format!("expected:<{word}> but was:<{word}>")
            );
            assert_eq!(
                compactor.format(None, Some(word.as_str()), None),
                format!("expected:<{word}> but was:<null>")
            );
            assert_eq!(
                compactor.format(None, None, Some(word.as_str())),
                format!("expected:<null> but was:<{word}>")
            );
        }
    });
}

#[test]
fn formatting_is_deterministic() {
    let compactor = Compactor::new(2);
    let first: Vec<String> = pairs()
        .par_iter()
        .map(|(e, a)| compactor.format(None, Some(e.as_str()), Some(a.as_str())))
        .collect();
    let second: Vec<String> = pairs()
        .iter()
        .map(|(e, a)| compactor.format(None, Some(e.as_str()), Some(a.as_str())))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn wide_context_loses_nothing() {
    let compactor = Compactor::new(usize::MAX);
    pairs()
        .par_iter()
        .filter(|(expected, actual)| expected != actual)
        .for_each(|(expected, actual)| {
            let rendered = compactor.format(None, Some(expected.as_str()), Some(actual.as_str()));
            assert!(!rendered.contains("..."), "{rendered}");

            let (expected_side, actual_side) = sides(&rendered);
            assert_eq!(&expected_side.replace(['[', ']'], ""), expected);
            assert_eq!(&actual_side.replace(['[', ']'], ""), actual);
        });
}

#[test]
fn context_grows_with_context_len() {
    pairs()
        .par_iter()
        .filter(|(expected, actual)| expected != actual)
        .for_each(|(expected, actual)| {
            let diff = StringDifference::new(Some(expected.as_str()), Some(actual.as_str()));
            let widest = diff.common_prefix_len().max(diff.common_suffix_len());

            let rendered: Vec<String> = (0..=MAX_CONTEXT_LEN)
                .map(|n| Compactor::new(n).fmt_comparison(None, &diff).to_string())
                .collect();

            for (n, pair) in rendered.windows(2).enumerate() {
                let (narrow, _) = sides(&pair[0]);
                let (wide, _) = sides(&pair[1]);
                let (narrow_start, narrow_end) = contexts(narrow);
                let (wide_start, wide_end) = contexts(wide);
                assert!(wide_start.ends_with(narrow_start), "{pair:?}");
                assert!(wide_end.starts_with(narrow_end), "{pair:?}");

                if n >= widest {
                    assert!(!pair[0].contains("..."), "{}", pair[0]);
                }
            }
        });
}
