use alloc::string::String;
use core::fmt;

/// Location of a character in the input.
///
/// `offset` counts characters from the start of the input (0-based); `line`
/// and `column` are 1-based, with columns counted in characters.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Character offset from the start of the input.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Position {
    pub(crate) fn advance(&mut self, c: char) {
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A complete, well-formed string literal.
    String,
    /// A number literal.
    Number,
    /// The keyword `true`.
    True,
    /// The keyword `false`.
    False,
    /// The keyword `null`.
    Null,
    /// A single character that matched none of the named patterns. The
    /// grammar's punctuation (`{ } [ ] , :`) arrives this way.
    Literal(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::String => f.write_str("string"),
            TokenKind::Number => f.write_str("number"),
            TokenKind::True => f.write_str("'true'"),
            TokenKind::False => f.write_str("'false'"),
            TokenKind::Null => f.write_str("'null'"),
            TokenKind::Literal(c) => write!(f, "'{}'", c.escape_debug()),
        }
    }
}

/// A classified lexical unit and the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the scanner classified the text as.
    pub kind: TokenKind,
    /// Source text of the token, quotes and escapes included for strings.
    pub lexeme: String,
    /// Where the token's first character sits in the input.
    pub position: Position,
}
