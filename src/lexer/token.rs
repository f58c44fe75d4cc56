/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the PAWSON
 *            pipeline during the lexing and parsing stages.
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

use crate::span::Span;
use std::fmt;

/// Represents the **category of a lexical token** in the PAWSON notation.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// text should be interpreted by the parser.
///
/// # Pipeline Role
/// ```text
/// Source Text → Lexer → TokenKind → Parser → Value
/// ```
///
/// The set is closed: every character of a well-formed document belongs to
/// exactly one token of one of these kinds. End of input is represented by
/// exhaustion of the token sequence, not by a kind of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of space, tab, newline, or carriage-return characters.
    ///
    /// Whitespace is kept at this stage; discarding it is the parser's job,
    /// done by optional consumption wherever the grammar permits it.
    Whitespace,

    /// A quoted string literal, quotes included in the lexeme.
    ///
    /// Examples:
    /// - `"hello"`
    /// - `"a\"b"`
    String,

    /// A numeric literal.
    ///
    /// Includes:
    /// - Integer values: `42`, `-7`
    /// - Floating-point values: `3.14`, `6.02e23`
    Number,

    /// The opening object delimiter `{`.
    OpenBracket,

    /// The closing object delimiter `}`.
    CloseBracket,

    /// The opening array delimiter `(`.
    ///
    /// Arrays are parenthesized in PAWSON; this is the notation's defining
    /// deviation from standard JSON.
    OpenParenthesis,

    /// The closing array delimiter `)`.
    CloseParenthesis,

    /// The key/value separator `:`.
    Colon,

    /// The element separator `,`.
    Comma,

    /// One of the bare keywords `true`, `false`, or `null`.
    ///
    /// Keyword recognition is handled by `keywords.rs`.
    Literal,
}

impl fmt::Display for TokenKind {
    /// Prints the kind's wire name as used in error messages
    /// (`STRING`, `OPEN_BRACKET`, …).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenParenthesis => "OPEN_PARENTHESIS",
            TokenKind::CloseParenthesis => "CLOSE_PARENTHESIS",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Literal => "LITERAL",
        };
        write!(f, "{}", name)
    }
}

/// Represents a **single lexical token** produced by the PAWSON lexer.
///
/// A `Token` is a fully classified unit of source text consisting of:
/// - A token category (`TokenKind`)
/// - The exact source text that was matched (`lexeme`), including
///   delimiters and quotes where applicable
/// - The span of its first character, for error reporting
///
/// Tokens are produced once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// This value is preserved verbatim; numeric interpretation and quote
    /// stripping happen only at parse time.
    pub lexeme: String,

    /// The source position of the token's first character.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: the exact source text,
    /// not the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
