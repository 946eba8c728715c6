use alloc::{string::ToString, vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{ParserOptions, Value, parse, parse_chars, parse_with};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: rendering any value and parsing it back yields an equal value.
/// Scalars are wrapped in an array because documents must be containers.
#[test]
fn render_then_parse_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let doc = Value::Array(vec![value]);
        parse(&doc.to_string()) == Ok(doc)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Extreme but finite magnitudes render to text that parses back exactly.
#[test]
fn extreme_numbers_roundtrip() {
    for n in [f64::MAX, f64::MIN, f64::MIN_POSITIVE, 5e-324, -0.0] {
        let doc = parse(&Value::Array(vec![Value::Number(n)]).to_string()).unwrap();
        let reparsed = parse(&doc.to_string()).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(doc, Value::Array(vec![Value::Number(n)]));
    }
}

/// Property: with scalar roots allowed, every rendered value parses back
/// without wrapping.
#[test]
fn scalar_root_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let options = ParserOptions {
            allow_scalar_root: true,
            ..Default::default()
        };
        parse_with(&value.to_string(), options) == Ok(value)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: feeding the same text through an arbitrarily chunked character
/// source gives the same result as parsing the buffered string.
#[quickcheck]
fn chunked_source_matches_buffered(value: Value, splits: Vec<usize>) -> bool {
    let text = Value::Array(vec![value]).to_string();
    let chars: Vec<char> = text.chars().collect();

    let mut chunks: Vec<Vec<char>> = Vec::new();
    let mut rest = chars.as_slice();
    for s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head.to_vec());
        rest = tail;
    }
    chunks.push(rest.to_vec());

    parse_chars(chunks.into_iter().flatten(), ParserOptions::default()) == parse(&text)
}

/// Property: parsing is deterministic, for accepted and rejected input alike.
#[quickcheck]
fn parsing_is_deterministic(text: alloc::string::String) -> bool {
    parse(&text) == parse(&text)
}
