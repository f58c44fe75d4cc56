/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Public API surface of the PAWSON data notation parser.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/pawson
 *
 * License:
 * This file is part of the PAWSON data notation project.
 *
 * PAWSON is dual-licensed under the terms of:
 *   - The MIT License
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

//! PAWSON is a JSON-derived data notation with one defining deviation:
//! objects are delimited by braces, arrays by **parentheses**.
//!
//! ```text
//! {
//!     "name": "Whiskers",
//!     "lives": 9,
//!     "toys": ("string", "box", "sunbeam"),
//!     "asleep": true,
//!     "collar": null
//! }
//! ```
//!
//! Parsing is a two-stage pipeline: the lexer scans the text into a flat
//! token sequence (whitespace kept), and the recursive-descent parser walks
//! it once, left to right, with one token of lookahead, building a
//! [`Value`] tree or reporting the first [`SyntaxError`] it finds.
//!
//! # Quick start
//! ```
//! let value = pawson::parse(r#"{"lives": 9, "toys": ("box",)}"#).unwrap();
//!
//! assert_eq!(value.as_object().unwrap()["lives"], pawson::Value::Int(9));
//! ```
//!
//! `parse` is a pure function of its input: no shared state, no I/O, safe
//! to call concurrently from independent call sites.

/// Source positions (offset, line, column).
pub mod span;

/// The `SyntaxError` type with its stable error codes.
pub mod error;

/// Compiler-style rendering of syntax errors.
pub mod diagnostics;

/// The value tree produced by parsing.
pub mod value;

/// Lexical analysis: source text → tokens.
pub mod lexer;

/// Syntactic analysis: tokens → value tree.
pub mod parser;

pub use diagnostics::DiagnosticPrinter;
pub use error::SyntaxError;
pub use lexer::{tokenize, Token, TokenKind};
pub use span::Span;
pub use value::Value;

/// Parses a PAWSON document into a [`Value`] tree.
///
/// This is the main entry point of the crate. The full text is consumed up
/// front; the first lexical or grammatical violation aborts the parse with
/// a [`SyntaxError`] and no partial result.
///
/// # Examples
/// ```
/// use pawson::Value;
///
/// assert_eq!(pawson::parse("(1, 2)").unwrap(),
///            Value::Array(vec![Value::Int(1), Value::Int(2)]));
///
/// assert!(pawson::parse("(1, 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Value, SyntaxError> {
    let tokens = lexer::tokenize(source)?;
    parser::parse(tokens)
}
