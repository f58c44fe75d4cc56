/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * End-to-end tests over the public `pawson::parse` entry point.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Github:   https://github.com/samwilcox/pawson
 *
 * License:
 * This file is part of the PAWSON data notation project.
 *
 * PAWSON is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use pawson::{parse, Value};
use pretty_assertions::assert_eq;

/// Serializes a value back into PAWSON notation.
///
/// Test-only: the library has no public serializer; this writer exists to
/// exercise the round-trip property. Strings produced by parsing keep
/// their escape sequences verbatim, so they re-emit between plain quotes.
fn write_notation(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Int(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::String(text) => format!("\"{}\"", text),
        Value::Array(values) => {
            let elements: Vec<String> = values.iter().map(write_notation).collect();
            format!("({})", elements.join(", "))
        }
        Value::Object(entries) => {
            let pairs: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("\"{}\": {}", key, write_notation(value)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
    }
}

#[test]
fn scalars() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
    assert_eq!(parse("\"claw\"").unwrap(), Value::String("claw".to_string()));
    assert_eq!(parse("42").unwrap(), Value::Int(42));
    assert_eq!(parse("-3.25").unwrap(), Value::Float(-3.25));
}

#[test]
fn empty_containers() {
    let object = parse("{}").unwrap();
    assert!(object.as_object().unwrap().is_empty());

    let array = parse("()").unwrap();
    assert!(array.as_array().unwrap().is_empty());
}

#[test]
fn nesting() {
    let value = parse(r#"{"a": (1, 2, {"b": "c"})}"#).unwrap();

    let entries = value.as_object().unwrap();
    let elements = entries["a"].as_array().unwrap();
    assert_eq!(elements[0], Value::Int(1));
    assert_eq!(elements[1], Value::Int(2));

    let inner = elements[2].as_object().unwrap();
    assert_eq!(inner["b"], Value::String("c".to_string()));
}

#[test]
fn key_overwrite_keeps_one_entry() {
    let value = parse(r#"{"a": 1, "a": 2}"#).unwrap();
    let entries = value.as_object().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries["a"], Value::Int(2));
}

#[test]
fn numeric_narrowing() {
    assert_eq!(parse("1.0").unwrap(), Value::Int(1));
    assert_eq!(parse("-0").unwrap(), Value::Int(0));
    assert_eq!(parse("1.5").unwrap(), Value::Float(1.5));
    assert_eq!(parse("1e3").unwrap(), Value::Int(1000));
    assert_eq!(parse("1e19").unwrap(), Value::Float(1e19));
}

#[test]
fn whitespace_is_idempotent() {
    let compact = parse(r#"{"a":(1,2),"b":{"c":null}}"#).unwrap();

    let spaced = [
        "  {\"a\": (1, 2), \"b\": {\"c\": null}}  ",
        "{\n\t\"a\"\n:\n(\n1\n,\n2\n)\n,\n\"b\"\n:\n{\"c\"\r\n:\tnull\n}\n}",
        "{ \"a\" : ( 1 , 2 ) , \"b\" : { \"c\" : null } }",
    ];

    for variant in spaced {
        assert_eq!(parse(variant).unwrap(), compact, "variant: {variant:?}");
    }
}

#[test]
fn round_trip_is_stable() {
    let sources = [
        "null",
        "(1, 2.5, \"three\", true, (), {})",
        r#"{"name": "Whiskers", "lives": 9, "toys": ("box", "sunbeam"), "collar": null}"#,
        r#"{"nested": ({"deep": (1, (2, (3,)))},)}"#,
    ];

    for source in sources {
        let first = parse(source).unwrap();
        let rewritten = write_notation(&first);
        let second = parse(&rewritten).unwrap();
        assert_eq!(second, first, "rewritten: {rewritten}");
    }
}

#[test]
fn trailing_commas_parse() {
    assert_eq!(
        parse("(1, 2,)").unwrap(),
        Value::Array(vec![Value::Int(1), Value::Int(2)])
    );
    let value = parse(r#"{"a": 1,}"#).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn error_taxonomy() {
    // Missing close: the value ends, no comma follows, so the closing
    // bracket is required but the input is exhausted.
    assert_eq!(parse(r#"{"a": 1"#).unwrap_err().code, "E_UNEXPECTED_EOF");

    // Missing colon between key and value.
    assert_eq!(parse(r#"{"a" 1}"#).unwrap_err().code, "E_UNEXPECTED_TOKEN");

    // A complete document followed by more content.
    assert_eq!(parse("true false").unwrap_err().code, "E_TRAILING_CONTENT");

    // A string that never closes.
    assert_eq!(parse("\"abc").unwrap_err().code, "E_UNTERMINATED_STRING");

    // An alphabetic run that is not exactly a keyword fails lexically.
    assert_eq!(
        parse("nullish").unwrap_err().code,
        "E_UNEXPECTED_CHARACTER"
    );
}

#[test]
fn errors_carry_positions() {
    let error = parse("(1, ?)").unwrap_err();
    assert_eq!(error.span.offset, 4);
    assert_eq!(error.span.line, 1);
    assert_eq!(error.span.column, 4);

    let error = parse("{\n  \"a\" 1\n}").unwrap_err();
    assert_eq!(error.span.line, 2);
}

#[test]
fn arrays_keep_source_order() {
    let value = parse("(3, 1, 2)").unwrap();
    assert_eq!(
        value.as_array().unwrap(),
        &[Value::Int(3), Value::Int(1), Value::Int(2)]
    );
}

#[test]
fn strings_are_raw_between_quotes() {
    // Escapes are boundary markers for the lexer only; the text between
    // the quotes is preserved verbatim.
    let value = parse(r#""line\none""#).unwrap();
    assert_eq!(value, Value::String(r"line\none".to_string()));

    let value = parse(r#""quote: \" done""#).unwrap();
    assert_eq!(value, Value::String(r#"quote: \" done"#.to_string()));
}
