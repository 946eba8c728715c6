use alloc::string::String;

use thiserror::Error;

use crate::token::{Position, TokenKind};

/// The input is not a document of the accepted grammar.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {}:{}", .position.line, .position.column)]
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Where the offending token starts, or the end of input.
    pub position: Position,
}

/// The reason a [`SyntaxError`] was raised.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxErrorKind {
    /// A token that cannot appear in the current grammar state.
    #[error("expected {expected}, found {found} {lexeme:?}")]
    UnexpectedToken {
        /// The tokens the grammar would have accepted here.
        expected: &'static str,
        /// What the scanner produced instead.
        found: TokenKind,
        /// The offending token's source text.
        lexeme: String,
    },
    /// The input ended before the document was complete.
    #[error("expected {expected}, found end of input")]
    UnexpectedEndOfInput {
        /// The tokens the grammar would have accepted here.
        expected: &'static str,
    },
    /// A complete document was followed by more tokens.
    #[error("unexpected {found} {lexeme:?} after the end of the document")]
    TrailingInput {
        /// The first token after the document.
        found: TokenKind,
        /// Its source text.
        lexeme: String,
    },
    /// Containers were nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// A number lexeme that does not convert to a double.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

/// The event stream fed to a [`Materializer`](crate::Materializer) does not
/// describe exactly one complete value.
///
/// Events produced by the [`Recognizer`](crate::Recognizer) for accepted
/// input never cause these; they indicate a hand-driven or faulty sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    /// Containers are still open.
    #[error("{depth} container(s) still open")]
    Unbalanced {
        /// Number of open containers.
        depth: usize,
    },
    /// An end event arrived with no open container.
    #[error("end event without a matching start")]
    UnmatchedEnd,
    /// An end event closed a container of the other kind.
    #[error("end event closes a container of a different kind")]
    MismatchedEnd,
    /// No value was produced.
    #[error("no value was produced")]
    MissingRoot,
    /// More than one top-level value was produced.
    #[error("{count} top-level values were produced")]
    MultipleRoots {
        /// Number of top-level values.
        count: usize,
    },
    /// An object ended with a key that has no value.
    #[error("object key without a value")]
    DanglingKey,
    /// An object key was not a string.
    #[error("object key is not a string")]
    NonStringKey,
}

/// Any failure of a full parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input was rejected.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// The parsed events could not be converted to a value.
    #[error("materialization error: {0}")]
    Materialize(#[from] MaterializeError),
}
