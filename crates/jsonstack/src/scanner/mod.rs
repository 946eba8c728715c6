//! Scanner: turns a character source into tokens on demand.
//!
//! What it does
//! - Pulls characters from any `Iterator<Item = char>` into a lookahead queue
//!   only as far as the current pattern needs, so the input never has to be
//!   fully buffered.
//! - Skips insignificant whitespace, then tries the named patterns in a fixed
//!   order: string, number, `true`, `false`, `null`. The first pattern that
//!   matches wins and its characters are consumed.
//! - Falls back to a one-character [`TokenKind::Literal`] when nothing
//!   matches. Punctuation reaches the recognizer this way.
//!
//! Scope
//! - The scanner never fails. A malformed literal (unterminated string, bad
//!   escape, raw control character) does not match the string pattern, so the
//!   opening quote comes out as `Literal('"')` and the recognizer reports the
//!   syntax error.
//!
//! Invariants
//! - Every call to [`Scanner::next_token`] either consumes at least one
//!   character or returns `None` at end of input.

use alloc::{collections::VecDeque, string::String};
use core::str::Chars;

use crate::token::{Position, Token, TokenKind};

/// A character source with on-demand lookahead.
#[derive(Debug)]
struct Lookahead<I> {
    chars: I,
    pending: VecDeque<char>,
}

impl<I: Iterator<Item = char>> Lookahead<I> {
    /// Returns the character `n` places past the cursor, reading from the
    /// source if it is not yet buffered.
    fn peek(&mut self, n: usize) -> Option<char> {
        while self.pending.len() <= n {
            self.pending.push_back(self.chars.next()?);
        }
        self.pending.get(n).copied()
    }

    fn peek_is(&mut self, n: usize, pred: impl FnOnce(char) -> bool) -> bool {
        self.peek(n).is_some_and(pred)
    }

    /// Counts the ASCII digits starting `from` places past the cursor.
    fn digits_from(&mut self, from: usize) -> usize {
        let mut n = 0;
        while self.peek_is(from + n, |c| c.is_ascii_digit()) {
            n += 1;
        }
        n
    }
}

/// A pattern returns the number of characters it matches at the cursor.
type Matcher<I> = fn(&mut Lookahead<I>) -> Option<usize>;

/// Matches `"` ... `"` with JSON escapes and no raw control characters.
fn match_string<I: Iterator<Item = char>>(input: &mut Lookahead<I>) -> Option<usize> {
    if input.peek(0)? != '"' {
        return None;
    }
    let mut len = 1;
    loop {
        match input.peek(len)? {
            '"' => return Some(len + 1),
            '\\' => match input.peek(len + 1)? {
                '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => len += 2,
                'u' => {
                    for k in 2..6 {
                        if !input.peek(len + k)?.is_ascii_hexdigit() {
                            return None;
                        }
                    }
                    len += 6;
                }
                _ => return None,
            },
            c if c < '\u{20}' => return None,
            _ => len += 1,
        }
    }
}

/// Matches `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// The fraction and exponent are optional groups: when one is incomplete
/// (`1.` or `1e+`) the match ends before it.
fn match_number<I: Iterator<Item = char>>(input: &mut Lookahead<I>) -> Option<usize> {
    let mut len = usize::from(input.peek(0)? == '-');
    match input.peek(len)? {
        '0' => len += 1,
        '1'..='9' => len += 1 + input.digits_from(len + 1),
        _ => return None,
    }

    if input.peek(len) == Some('.') {
        let fraction = input.digits_from(len + 1);
        if fraction > 0 {
            len += 1 + fraction;
        }
    }

    if input.peek_is(len, |c| matches!(c, 'e' | 'E')) {
        let sign = usize::from(input.peek_is(len + 1, |c| matches!(c, '+' | '-')));
        let exponent = input.digits_from(len + 1 + sign);
        if exponent > 0 {
            len += 1 + sign + exponent;
        }
    }

    Some(len)
}

fn match_word<I: Iterator<Item = char>>(input: &mut Lookahead<I>, word: &str) -> Option<usize> {
    for (i, expected) in word.chars().enumerate() {
        if input.peek(i)? != expected {
            return None;
        }
    }
    Some(word.len())
}

fn match_true<I: Iterator<Item = char>>(input: &mut Lookahead<I>) -> Option<usize> {
    match_word(input, "true")
}

fn match_false<I: Iterator<Item = char>>(input: &mut Lookahead<I>) -> Option<usize> {
    match_word(input, "false")
}

fn match_null<I: Iterator<Item = char>>(input: &mut Lookahead<I>) -> Option<usize> {
    match_word(input, "null")
}

/// Pulls tokens from a character source.
///
/// ```rust
/// use jsonstack::{Scanner, TokenKind};
///
/// let kinds: Vec<_> = Scanner::for_str(r#"{"a": -1.5e3}"#).map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Literal('{'),
///         TokenKind::String,
///         TokenKind::Literal(':'),
///         TokenKind::Number,
///         TokenKind::Literal('}'),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Scanner<I> {
    input: Lookahead<I>,
    position: Position,
}

impl<'a> Scanner<Chars<'a>> {
    /// Creates a scanner over an in-memory string.
    #[must_use]
    pub fn for_str(src: &'a str) -> Self {
        Self::new(src.chars())
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Named patterns in priority order.
    const PATTERNS: [(TokenKind, Matcher<I>); 5] = [
        (TokenKind::String, match_string::<I>),
        (TokenKind::Number, match_number::<I>),
        (TokenKind::True, match_true::<I>),
        (TokenKind::False, match_false::<I>),
        (TokenKind::Null, match_null::<I>),
    ];

    /// Creates a scanner that reads from `chars` as tokens are requested.
    pub fn new(chars: I) -> Self {
        Self {
            input: Lookahead {
                chars,
                pending: VecDeque::new(),
            },
            position: Position::default(),
        }
    }

    /// Position of the next unread character.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let first = self.input.peek(0)?;
        let position = self.position;

        for (kind, matcher) in Self::PATTERNS {
            if let Some(len) = matcher(&mut self.input) {
                return Some(self.take(kind, len, position));
            }
        }

        Some(self.take(TokenKind::Literal(first), 1, position))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.input.peek(0) {
            if !matches!(c, ' ' | '\t' | '\n' | '\r') {
                break;
            }
            self.input.pending.pop_front();
            self.position.advance(c);
        }
    }

    fn take(&mut self, kind: TokenKind, len: usize, position: Position) -> Token {
        let mut lexeme = String::with_capacity(len);
        for c in self.input.pending.drain(..len) {
            self.position.advance(c);
            lexeme.push(c);
        }
        trace!("scan {kind} {lexeme:?} at {}:{}", position.line, position.column);
        Token {
            kind,
            lexeme,
            position,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests;
