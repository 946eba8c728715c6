//! Recognizer: checks the token stream against the grammar and reports
//! structure to an [`EventSink`].
//!
//! Grammar
//! ```text
//! document := object | array
//! object   := '{' '}' | '{' pairs '}'
//! pairs    := pairs ',' pair | pair
//! pair     := string ':' value
//! array    := '[' ']' | '[' values ']'
//! values   := values ',' value | value
//! value    := string | NUMBER | object | array | TRUE | FALSE | NULL
//! string   := STRING
//! ```
//!
//! The grammar is LL(1). Instead of recursing per nesting level, the
//! recognizer keeps an explicit stack of frames, one per open container,
//! each holding what that container expects next. A frame is pushed exactly
//! when `start_*` is emitted and popped exactly when `end_*` is emitted, so the
//! stack depth always equals the number of open containers on the sink side.
//!
//! Terminal values are converted once, here: strings are unescaped, numbers
//! parsed, keywords mapped. Sinks only ever see [`Scalar`]s.

mod unescape;

use alloc::vec::Vec;

use crate::{
    error::{SyntaxError, SyntaxErrorKind},
    event::{EventSink, Scalar},
    options::ParserOptions,
    scanner::Scanner,
    token::{Position, Token, TokenKind},
};

use unescape::unescape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    /// After `{`.
    FirstKeyOrEnd,
    /// After `,`.
    Key,
    /// After a key.
    Colon,
    /// After `:`.
    Value,
    /// After a value.
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    /// After `[`.
    FirstValueOrEnd,
    /// After `,`.
    Value,
    /// After a value.
    CommaOrEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Object(ObjectState),
    Array(ArrayState),
}

impl Frame {
    fn expected(self) -> &'static str {
        match self {
            Frame::Object(ObjectState::FirstKeyOrEnd) => "a string key or '}'",
            Frame::Object(ObjectState::Key) => "a string key",
            Frame::Object(ObjectState::Colon) => "':'",
            Frame::Object(ObjectState::Value) | Frame::Array(ArrayState::Value) => "a value",
            Frame::Object(ObjectState::CommaOrEnd) => "',' or '}'",
            Frame::Array(ArrayState::FirstValueOrEnd) => "a value or ']'",
            Frame::Array(ArrayState::CommaOrEnd) => "',' or ']'",
        }
    }
}

fn starts_value(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Literal('{' | '[')
    )
}

fn unexpected(expected: &'static str, token: Token) -> SyntaxError {
    SyntaxError {
        kind: SyntaxErrorKind::UnexpectedToken {
            expected,
            found: token.kind,
            lexeme: token.lexeme,
        },
        position: token.position,
    }
}

/// Converts a terminal token to its typed value.
fn convert(token: Token) -> Result<Scalar, SyntaxError> {
    Ok(match token.kind {
        TokenKind::String => Scalar::String(unescape(&token.lexeme)),
        // Overflow to infinity is rejected: it has no textual form.
        TokenKind::Number => match token.lexeme.parse::<f64>() {
            Ok(n) if n.is_finite() => Scalar::Number(n),
            _ => {
                return Err(SyntaxError {
                    kind: SyntaxErrorKind::InvalidNumber(token.lexeme),
                    position: token.position,
                });
            }
        },
        TokenKind::True => Scalar::Boolean(true),
        TokenKind::False => Scalar::Boolean(false),
        TokenKind::Null => Scalar::Null,
        TokenKind::Literal(_) => return Err(unexpected("a value", token)),
    })
}

/// Pulls tokens from a [`Scanner`] and emits events for one document.
///
/// ```
/// use jsonstack::{EventLog, ParserOptions, Recognizer, Scanner};
///
/// let mut log = EventLog::default();
/// let mut recognizer = Recognizer::new(Scanner::for_str("[1, 2"), ParserOptions::default());
/// let err = recognizer.parse(&mut log).unwrap_err();
/// assert_eq!(err.to_string(), "expected ',' or ']', found end of input at 1:6");
/// assert_eq!(recognizer.depth(), 1);
/// ```
#[derive(Debug)]
pub struct Recognizer<I> {
    scanner: Scanner<I>,
    stack: Vec<Frame>,
    options: ParserOptions,
}

impl<I: Iterator<Item = char>> Recognizer<I> {
    /// Creates a recognizer that reads from `scanner`.
    pub fn new(scanner: Scanner<I>, options: ParserOptions) -> Self {
        Self {
            scanner,
            stack: Vec::new(),
            options,
        }
    }

    /// Number of containers currently open.
    ///
    /// After a failed [`parse`](Self::parse) this is the depth at which the
    /// error was found.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Recognizes one complete document, reporting it to `sink`.
    ///
    /// # Errors
    ///
    /// Fails on the first token that does not fit the grammar, when the input
    /// ends early, when anything follows the document, or when nesting exceeds
    /// [`ParserOptions::max_depth`]. Events already delivered to `sink` are not
    /// retracted.
    pub fn parse<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), SyntaxError> {
        let root_expected = if self.options.allow_scalar_root {
            "a value"
        } else {
            "'{' or '['"
        };
        let token = self.next_required(root_expected)?;
        match token.kind {
            TokenKind::Literal('{' | '[') => self.value(token, sink)?,
            kind if self.options.allow_scalar_root && starts_value(kind) => {
                self.value(token, sink)?;
            }
            _ => return Err(unexpected(root_expected, token)),
        }

        while let Some(&frame) = self.stack.last() {
            let token = self.next_required(frame.expected())?;
            self.step(frame, token, sink)?;
        }

        match self.scanner.next_token() {
            None => Ok(()),
            Some(token) => Err(SyntaxError {
                kind: SyntaxErrorKind::TrailingInput {
                    found: token.kind,
                    lexeme: token.lexeme,
                },
                position: token.position,
            }),
        }
    }

    fn next_required(&mut self, expected: &'static str) -> Result<Token, SyntaxError> {
        self.scanner.next_token().ok_or_else(|| SyntaxError {
            kind: SyntaxErrorKind::UnexpectedEndOfInput { expected },
            position: self.scanner.position(),
        })
    }

    /// Advances the innermost open container by one token.
    fn step<S: EventSink + ?Sized>(
        &mut self,
        frame: Frame,
        token: Token,
        sink: &mut S,
    ) -> Result<(), SyntaxError> {
        trace!("step {frame:?} <- {} {:?}", token.kind, token.lexeme);
        match (frame, token.kind) {
            (
                Frame::Object(ObjectState::FirstKeyOrEnd | ObjectState::CommaOrEnd),
                TokenKind::Literal('}'),
            )
            | (
                Frame::Array(ArrayState::FirstValueOrEnd | ArrayState::CommaOrEnd),
                TokenKind::Literal(']'),
            ) => self.close(sink),
            (Frame::Object(ObjectState::FirstKeyOrEnd | ObjectState::Key), TokenKind::String) => {
                self.set_top(Frame::Object(ObjectState::Colon));
                sink.scalar(Scalar::String(unescape(&token.lexeme)));
            }
            (Frame::Object(ObjectState::Colon), TokenKind::Literal(':')) => {
                self.set_top(Frame::Object(ObjectState::Value));
            }
            (Frame::Object(ObjectState::CommaOrEnd), TokenKind::Literal(',')) => {
                self.set_top(Frame::Object(ObjectState::Key));
            }
            (Frame::Object(ObjectState::Value), kind) if starts_value(kind) => {
                self.set_top(Frame::Object(ObjectState::CommaOrEnd));
                self.value(token, sink)?;
            }
            (Frame::Array(ArrayState::FirstValueOrEnd | ArrayState::Value), kind)
                if starts_value(kind) =>
            {
                self.set_top(Frame::Array(ArrayState::CommaOrEnd));
                self.value(token, sink)?;
            }
            (Frame::Array(ArrayState::CommaOrEnd), TokenKind::Literal(',')) => {
                self.set_top(Frame::Array(ArrayState::Value));
            }
            _ => return Err(unexpected(frame.expected(), token)),
        }
        Ok(())
    }

    /// Handles a token in value position: opens a container or emits a
    /// scalar. The caller has already checked [`starts_value`].
    fn value<S: EventSink + ?Sized>(&mut self, token: Token, sink: &mut S) -> Result<(), SyntaxError> {
        match token.kind {
            TokenKind::Literal('{') => {
                self.open(Frame::Object(ObjectState::FirstKeyOrEnd), token.position)?;
                sink.start_object();
            }
            TokenKind::Literal('[') => {
                self.open(Frame::Array(ArrayState::FirstValueOrEnd), token.position)?;
                sink.start_array();
            }
            _ => sink.scalar(convert(token)?),
        }
        Ok(())
    }

    fn open(&mut self, frame: Frame, position: Position) -> Result<(), SyntaxError> {
        if self.stack.len() >= self.options.max_depth {
            return Err(SyntaxError {
                kind: SyntaxErrorKind::DepthLimitExceeded {
                    limit: self.options.max_depth,
                },
                position,
            });
        }
        self.stack.push(frame);
        Ok(())
    }

    fn close<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        match self.stack.pop() {
            Some(Frame::Object(_)) => sink.end_object(),
            Some(Frame::Array(_)) => sink.end_array(),
            None => {}
        }
    }

    fn set_top(&mut self, frame: Frame) {
        if let Some(top) = self.stack.last_mut() {
            *top = frame;
        }
    }
}
