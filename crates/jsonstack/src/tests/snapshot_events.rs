//! Snapshot of the exact event sequence for a moderately complex document.
//! Catches unintended changes to emission order or scalar conversion.

use alloc::string::String;
use core::fmt::Write;

use insta::assert_snapshot;

use crate::{ParserOptions, parse_events};

fn render(src: &str) -> String {
    let events = parse_events(src, ParserOptions::default())
        .expect("parser should not error on valid input");
    let mut out = String::new();
    for event in events {
        writeln!(out, "{event}").unwrap();
    }
    out
}

#[test]
fn snapshot_complex_document() {
    let json = r#"{
        "users": [
            {"id": 1, "name": "Ada", "admin": true},
            {"id": 2.5e1, "name": "Gråce", "admin": false}
        ],
        "meta": {"count": 2, "next": null, "tags": []}
    }"#;

    assert_snapshot!(render(json), @r#"
    start_object
    scalar "users"
    start_array
    start_object
    scalar "id"
    scalar 1
    scalar "name"
    scalar "Ada"
    scalar "admin"
    scalar true
    end_object
    start_object
    scalar "id"
    scalar 25
    scalar "name"
    scalar "Gråce"
    scalar "admin"
    scalar false
    end_object
    end_array
    scalar "meta"
    start_object
    scalar "count"
    scalar 2
    scalar "next"
    scalar null
    scalar "tags"
    start_array
    end_array
    end_object
    end_object
    "#);
}

#[test]
fn snapshot_escaped_strings_render_escaped() {
    assert_snapshot!(render(r#"["line\nbreak", "tab\t", "quote\""]"#), @r#"
    start_array
    scalar "line\nbreak"
    scalar "tab\t"
    scalar "quote\""
    end_array
    "#);
}

#[test]
fn events_serialize_with_serde() {
    let events = parse_events(r#"{"k":[null]}"#, ParserOptions::default()).unwrap();
    insta::assert_yaml_snapshot!(events, @r#"
    - StartObject
    - Scalar:
        String: k
    - StartArray
    - Scalar: "Null"
    - EndArray
    - EndObject
    "#);
}
