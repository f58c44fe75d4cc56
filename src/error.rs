/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawson
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
use std::error::Error;
use std::fmt;

/// A syntax error raised by the lexer or the parser.
///
/// The first violation found anywhere in the pipeline aborts the whole
/// parse; there is no recovery and no partial result. Each error carries a
/// stable code, a human-readable message, the source span it was raised at,
/// and an optional help note.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    /// Stable error code (E_UNEXPECTED_TOKEN, E_UNTERMINATED_STRING, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl SyntaxError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// A string literal ran past the end of the input without a closing
    /// quote. Reported at the opening quote.
    pub fn unterminated_string(span: Span) -> Self {
        Self::new("E_UNTERMINATED_STRING", "unterminated string literal", span)
    }

    /// The lexer met a character that cannot start any token.
    pub fn unexpected_character(found: char, span: Span) -> Self {
        Self::new(
            "E_UNEXPECTED_CHARACTER",
            format!("unexpected character '{}' at offset {}", found, span.offset),
            span,
        )
    }

    /// The parser met a token outside the allowed set for the current
    /// grammar rule.
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl fmt::Display,
        span: Span,
    ) -> Self {
        Self::new(
            "E_UNEXPECTED_TOKEN",
            format!(
                "was expecting {}, instead found {}",
                expected.into(),
                found
            ),
            span,
        )
    }

    /// The parser needed a token but the sequence was exhausted.
    pub fn unexpected_end_of_input(expected: impl Into<String>, span: Span) -> Self {
        Self::new(
            "E_UNEXPECTED_EOF",
            format!(
                "was expecting {}, instead found end of input",
                expected.into()
            ),
            span,
        )
    }

    /// A complete document was parsed but non-whitespace input remains.
    pub fn trailing_content(found: impl fmt::Display, span: Span) -> Self {
        Self::new(
            "E_TRAILING_CONTENT",
            format!("was expecting end of input, instead found {}", found),
            span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.message,
            self.span.line,
            self.span.column + 1
        )
    }
}

impl Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_constructor() {
        let span = Span::origin();
        assert_eq!(
            SyntaxError::unterminated_string(span).code,
            "E_UNTERMINATED_STRING"
        );
        assert_eq!(
            SyntaxError::unexpected_character('?', span).code,
            "E_UNEXPECTED_CHARACTER"
        );
        assert_eq!(
            SyntaxError::unexpected_token("STRING", "COMMA", span).code,
            "E_UNEXPECTED_TOKEN"
        );
        assert_eq!(
            SyntaxError::unexpected_end_of_input("STRING", span).code,
            "E_UNEXPECTED_EOF"
        );
        assert_eq!(
            SyntaxError::trailing_content("LITERAL", span).code,
            "E_TRAILING_CONTENT"
        );
    }

    #[test]
    fn display_renders_one_based_column() {
        let error = SyntaxError::unexpected_token(
            "COLON",
            "COMMA",
            Span {
                offset: 4,
                line: 2,
                column: 0,
            },
        );
        assert_eq!(
            error.to_string(),
            "was expecting COLON, instead found COMMA at line 2, column 1"
        );
    }

    #[test]
    fn with_help_attaches_note() {
        let error = SyntaxError::unexpected_character('n', Span::origin())
            .with_help("'nope' is not a pawson keyword");
        assert_eq!(error.help.as_deref(), Some("'nope' is not a pawson keyword"));
    }
}
