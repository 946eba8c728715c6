//! Events emitted by the [`Recognizer`](crate::Recognizer).
//!
//! The recognizer reports structure through an [`EventSink`], a visitor
//! with one method per event kind. [`Event`] is the same vocabulary as a
//! tagged value, for sinks that prefer to record or forward events.
//!
//! ```
//! use jsonstack::{Event, ParserOptions, Scalar, parse_events};
//!
//! let events = parse_events("[1, [true]]", ParserOptions::default()).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::StartArray,
//!         Event::Scalar(Scalar::Number(1.0)),
//!         Event::StartArray,
//!         Event::Scalar(Scalar::Boolean(true)),
//!         Event::EndArray,
//!         Event::EndArray,
//!     ]
//! );
//! ```
use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::value::{Value, write_escaped_string};

/// A converted terminal value.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An unescaped string.
    String(String),
    /// A number literal.
    Number(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(s) => Value::String(s),
            Scalar::Number(n) => Value::Number(n),
            Scalar::Boolean(b) => Value::Boolean(b),
            Scalar::Null => Value::Null,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// One structural or scalar event.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// An object's opening brace.
    StartObject,
    /// The matching closing brace.
    EndObject,
    /// An array's opening bracket.
    StartArray,
    /// The matching closing bracket.
    EndArray,
    /// A key or value literal.
    Scalar(Scalar),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::StartObject => f.write_str("start_object"),
            Event::EndObject => f.write_str("end_object"),
            Event::StartArray => f.write_str("start_array"),
            Event::EndArray => f.write_str("end_array"),
            Event::Scalar(s) => write!(f, "scalar {s}"),
        }
    }
}

/// Receives events from the [`Recognizer`](crate::Recognizer).
///
/// Starts and ends are always balanced for an accepted document. Object keys
/// arrive as [`Scalar::String`] events alternating with their values.
pub trait EventSink {
    /// An object was opened.
    fn start_object(&mut self);
    /// The innermost open object was closed.
    fn end_object(&mut self);
    /// An array was opened.
    fn start_array(&mut self);
    /// The innermost open array was closed.
    fn end_array(&mut self);
    /// A key or value literal was recognized.
    fn scalar(&mut self, value: Scalar);

    /// Dispatches a tagged event to the matching method.
    fn event(&mut self, event: Event) {
        match event {
            Event::StartObject => self.start_object(),
            Event::EndObject => self.end_object(),
            Event::StartArray => self.start_array(),
            Event::EndArray => self.end_array(),
            Event::Scalar(value) => self.scalar(value),
        }
    }
}

/// An [`EventSink`] that records every event in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the log, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl EventSink for EventLog {
    fn start_object(&mut self) {
        self.events.push(Event::StartObject);
    }

    fn end_object(&mut self) {
        self.events.push(Event::EndObject);
    }

    fn start_array(&mut self) {
        self.events.push(Event::StartArray);
    }

    fn end_array(&mut self) {
        self.events.push(Event::EndArray);
    }

    fn scalar(&mut self, value: Scalar) {
        self.events.push(Event::Scalar(value));
    }
}
