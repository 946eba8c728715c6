//! A three-stage JSON pipeline: a [`Scanner`] that turns characters into
//! tokens, a [`Recognizer`] that checks them against the grammar and emits
//! structural events, and a [`Materializer`] that rebuilds the nested value
//! from those events.
//!
//! Documents must be rooted in an object or an array unless
//! [`ParserOptions::allow_scalar_root`] is set.
//!
//! ```rust
//! use jsonstack::{Value, parse};
//!
//! let value = parse(r#"{"a": [true, null, 1.5]}"#).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Object(
//!         [(
//!             "a".to_string(),
//!             Value::Array(vec![Value::Boolean(true), Value::Null, Value::Number(1.5)]),
//!         )]
//!         .into()
//!     )
//! );
//!
//! assert!(parse(r#""hi""#).is_err());
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, trace_parser))]
extern crate std;

#[macro_use]
mod trace;

mod error;
mod event;
mod materializer;
mod options;
mod recognizer;
mod scanner;
mod token;
mod value;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use error::{Error, MaterializeError, SyntaxError, SyntaxErrorKind};
pub use event::{Event, EventLog, EventSink, Scalar};
pub use materializer::Materializer;
pub use options::{DuplicateKeys, ParserOptions};
pub use recognizer::Recognizer;
pub use scanner::Scanner;
pub use token::{Position, Token, TokenKind};
pub use value::{Array, Map, Value};

/// Parses a complete document with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the input is not a well-formed document.
pub fn parse(src: &str) -> Result<Value, Error> {
    parse_with(src, ParserOptions::default())
}

/// Parses a complete document held in memory.
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the input is not a well-formed document.
pub fn parse_with(src: &str, options: ParserOptions) -> Result<Value, Error> {
    parse_chars(src.chars(), options)
}

/// Parses a document from any character source. Characters are pulled only
/// as the scanner needs them.
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the input is not a well-formed document.
pub fn parse_chars<I>(chars: I, options: ParserOptions) -> Result<Value, Error>
where
    I: IntoIterator<Item = char>,
{
    let mut materializer = Materializer::new(options.duplicate_keys);
    Recognizer::new(Scanner::new(chars.into_iter()), options).parse(&mut materializer)?;
    Ok(materializer.result()?)
}

/// Runs the scanner and recognizer only, returning the emitted events.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when the input is not a well-formed document.
pub fn parse_events(src: &str, options: ParserOptions) -> Result<Vec<Event>, SyntaxError> {
    let mut log = EventLog::default();
    Recognizer::new(Scanner::for_str(src), options).parse(&mut log)?;
    Ok(log.into_events())
}
