#![no_main]

use arbitrary::Arbitrary;
use jsonstack::{DuplicateKeys, ParserOptions, parse_chars, parse_events, parse_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    allow_scalar_root: bool,
    first_wins: bool,
    max_depth: u8,
    split_seed: u64,
    text: String,
}

fn options(input: &Input) -> ParserOptions {
    ParserOptions {
        allow_scalar_root: input.allow_scalar_root,
        // Zero still exercises the limit; anything above keeps deep input reachable.
        max_depth: usize::from(input.max_depth) * 4,
        duplicate_keys: if input.first_wins {
            DuplicateKeys::FirstWins
        } else {
            DuplicateKeys::LastWins
        },
    }
}

/// Splits `text` into pieces on char boundaries, sizes derived from `seed`.
fn split_into_safe_chunks(text: &str, seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let remaining = text.len() - start;
        let mut size = (seed as usize % remaining) + 1;
        while start + size < text.len() && !text.is_char_boundary(start + size) {
            size += 1;
        }
        chunks.push(&text[start..start + size]);
        start += size;
    }
    chunks
}

fuzz_target!(|input: Input| {
    let options = options(&input);
    let whole = parse_with(&input.text, options);

    // Same answer on a second run and when the characters arrive piecewise.
    assert_eq!(whole, parse_with(&input.text, options));
    let chunks = split_into_safe_chunks(&input.text, input.split_seed);
    let pieces = parse_chars(chunks.iter().flat_map(|c| c.chars()), options);
    assert_eq!(whole, pieces);

    // Accepted input always yields a balanced event stream.
    if whole.is_ok() {
        assert!(parse_events(&input.text, options).is_ok());
    }

    // serde_json stops at 128 levels, which every limit here covers.
    if !input.allow_scalar_root && input.max_depth >= 32 {
        if let Ok(reference) = serde_json::from_str::<serde_json::Value>(&input.text) {
            if reference.is_object() || reference.is_array() {
                assert!(whole.is_ok(), "rejected {:?}: {:?}", input.text, whole);
            }
        }
    }
});
