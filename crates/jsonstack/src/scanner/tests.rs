use alloc::{string::String, vec::Vec};

use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    Scanner::for_str(src).map(|t| t.kind).collect()
}

fn lexemes(src: &str) -> Vec<String> {
    Scanner::for_str(src).map(|t| t.lexeme).collect()
}

#[test]
fn punctuation_is_returned_as_literals() {
    assert_eq!(
        kinds("{}[],:"),
        [
            TokenKind::Literal('{'),
            TokenKind::Literal('}'),
            TokenKind::Literal('['),
            TokenKind::Literal(']'),
            TokenKind::Literal(','),
            TokenKind::Literal(':'),
        ]
    );
}

#[test]
fn keywords_are_named_tokens() {
    assert_eq!(
        kinds("true false null"),
        [TokenKind::True, TokenKind::False, TokenKind::Null]
    );
}

#[test]
fn keyword_prefix_wins_over_trailing_letters() {
    // The keyword pattern is a prefix match; the leftovers become literals.
    assert_eq!(
        kinds("trueish"),
        [
            TokenKind::True,
            TokenKind::Literal('i'),
            TokenKind::Literal('s'),
            TokenKind::Literal('h'),
        ]
    );
}

#[test]
fn partial_keyword_falls_back_to_single_characters() {
    assert_eq!(
        kinds("nul"),
        [
            TokenKind::Literal('n'),
            TokenKind::Literal('u'),
            TokenKind::Literal('l'),
        ]
    );
}

#[test]
fn numbers_take_the_longest_valid_form() {
    assert_eq!(lexemes("-0.5e+10"), ["-0.5e+10"]);
    assert_eq!(lexemes("123"), ["123"]);
    assert_eq!(lexemes("1E3"), ["1E3"]);
    assert_eq!(lexemes("0.25"), ["0.25"]);
}

#[test]
fn incomplete_fraction_and_exponent_are_left_behind() {
    assert_eq!(lexemes("1."), ["1", "."]);
    assert_eq!(lexemes("1e"), ["1", "e"]);
    assert_eq!(lexemes("1e+"), ["1", "e", "+"]);
    assert_eq!(lexemes("2.e5"), ["2", ".", "e", "5"]);
}

#[test]
fn leading_zero_ends_the_number() {
    assert_eq!(kinds("01"), [TokenKind::Number, TokenKind::Number]);
    assert_eq!(lexemes("01"), ["0", "1"]);
}

#[test]
fn lone_minus_is_a_literal() {
    assert_eq!(kinds("-a"), [TokenKind::Literal('-'), TokenKind::Literal('a')]);
}

#[test]
fn string_lexeme_keeps_quotes_and_escapes() {
    let tokens: Vec<_> = Scanner::for_str(r#""a\"bé\n""#).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""a\"bé\n""#);
}

#[test]
fn string_pattern_runs_before_punctuation() {
    assert_eq!(kinds(r#""{[,:]}""#), [TokenKind::String]);
}

#[test]
fn unterminated_string_falls_through_to_a_literal_quote() {
    assert_eq!(
        kinds(r#""ab"#),
        [
            TokenKind::Literal('"'),
            TokenKind::Literal('a'),
            TokenKind::Literal('b'),
        ]
    );
}

#[test]
fn invalid_escape_falls_through() {
    assert_eq!(kinds(r#""\x""#)[0], TokenKind::Literal('"'));
    assert_eq!(kinds(r#""\u12g4""#)[0], TokenKind::Literal('"'));
}

#[test]
fn raw_control_character_is_not_a_string() {
    assert_eq!(kinds("\"a\nb\"")[0], TokenKind::Literal('"'));
}

#[test]
fn whitespace_is_skipped_and_positions_track_lines() {
    let tokens: Vec<_> = Scanner::for_str("[\n  1,\r\n\ttrue]").collect();
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.position.offset, t.position.line, t.position.column))
        .collect();
    assert_eq!(
        positions,
        [(0, 1, 1), (4, 2, 3), (5, 2, 4), (9, 3, 2), (13, 3, 6)]
    );
}

#[test]
fn end_of_input_is_a_sentinel_not_an_error() {
    let mut s = Scanner::for_str("  \n ");
    assert_eq!(s.next_token(), None);
    assert_eq!(s.next_token(), None);
    assert_eq!(s.position().offset, 4);
}

#[test]
fn every_call_makes_progress() {
    let src = "{\"k\": [1, tru, \"x\\q\"]}! ~";
    let mut s = Scanner::for_str(src);
    let mut last = s.position().offset;
    while let Some(token) = s.next_token() {
        let now = s.position().offset;
        assert!(now > last, "no progress after {token:?}");
        last = now;
    }
    assert_eq!(last, src.chars().count());
}

#[test]
fn reads_from_an_incremental_source() {
    // Chained iterators stand in for input arriving in pieces.
    let chunks = ["[\"sp", "lit\",", "12", "34]"];
    let chars = chunks.iter().flat_map(|c| c.chars());
    let lexemes: Vec<_> = Scanner::new(chars).map(|t| t.lexeme).collect();
    assert_eq!(lexemes, ["[", "\"split\"", ",", "1234", "]"]);
}

#[test]
fn non_ascii_characters_count_as_one_column() {
    let tokens: Vec<_> = Scanner::for_str("[\"é\",1]").collect();
    assert_eq!(tokens[2].position.column, 5);
    assert_eq!(tokens[3].position.offset, 5);
}
