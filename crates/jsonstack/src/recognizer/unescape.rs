//! Decoding of string lexemes.
//!
//! The scanner only hands out string tokens whose escapes are well formed, so
//! decoding cannot fail. `\uXXXX` escapes are UTF-16 code units: a high
//! surrogate followed by an escaped low surrogate is joined into one
//! character, and any unpaired surrogate decodes to U+FFFD.

use alloc::string::String;
use core::{char::REPLACEMENT_CHARACTER, str::Chars};

/// Accumulates the four hexadecimal digits of a `\u` escape into a UTF-16
/// code unit.
#[derive(Debug, Default)]
struct CodeUnitBuffer {
    acc: u32,
    len: u8,
}

impl CodeUnitBuffer {
    /// Feeds one hex digit. Returns the code unit once the fourth digit has
    /// arrived, and `Err` for anything that is not a hex digit.
    fn feed(&mut self, c: char) -> Result<Option<u32>, char> {
        let d = c.to_digit(16).ok_or(c)?;
        self.acc = (self.acc << 4) | d;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }
        let unit = self.acc;
        *self = Self::default();
        Ok(Some(unit))
    }

    /// Reads a full code unit from `chars`.
    fn read(chars: &mut Chars<'_>) -> Option<u32> {
        let mut buf = Self::default();
        loop {
            if let Some(unit) = buf.feed(chars.next()?).ok()? {
                return Some(unit);
            }
        }
    }
}

fn decode_unicode_escape(chars: &mut Chars<'_>) -> char {
    let Some(unit) = CodeUnitBuffer::read(chars) else {
        return REPLACEMENT_CHARACTER;
    };
    match unit {
        0xD800..=0xDBFF => {
            let mut ahead = chars.clone();
            if ahead.next() == Some('\\') && ahead.next() == Some('u') {
                if let Some(low @ 0xDC00..=0xDFFF) = CodeUnitBuffer::read(&mut ahead) {
                    *chars = ahead;
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(code).unwrap_or(REPLACEMENT_CHARACTER);
                }
            }
            REPLACEMENT_CHARACTER
        }
        _ => char::from_u32(unit).unwrap_or(REPLACEMENT_CHARACTER),
    }
}

/// Strips the quotes from a string lexeme and resolves its escapes.
pub(crate) fn unescape(lexeme: &str) -> String {
    let body = lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme);
    if !body.contains('\\') {
        return body.into();
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => out.push(decode_unicode_escape(&mut chars)),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
