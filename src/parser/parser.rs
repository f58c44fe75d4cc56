/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform a token stream into a PAWSON value
 * tree.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `values.rs`      → The value rule and scalar conversions
 * - `containers.rs`  → Object and array rules
 * - `helpers.rs`     → Token consumption, lookahead, and navigation
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::error::SyntaxError;
use crate::lexer::Token;
use crate::value::Value;

/// The core PAWSON recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
///
/// The cursor advances monotonically; lookahead is a non-advancing peek,
/// never a rewind. The grammar logic is implemented through extension
/// modules (`values`, `containers`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,
}

/// Public entry point for the PAWSON parsing phase.
///
/// # Parameters
/// - `tokens`: The full token stream produced by the lexer
///
/// # Returns
/// The root value of the document, or the first syntax error found.
///
/// # PAWSON Pipeline
/// ```text
/// Source Text → Lexer → Tokens → Parser → Value
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Value, SyntaxError> {
    let mut parser = Parser { tokens, current: 0 };
    parser.document()
}

impl Parser {
    /// document → WHITESPACE? value WHITESPACE? <end of input>
    ///
    /// Exactly one value per document. A non-whitespace token remaining
    /// after the value is an `E_TRAILING_CONTENT` error; trailing
    /// whitespace is permitted.
    pub fn document(&mut self) -> Result<Value, SyntaxError> {
        self.skip_whitespace();
        let value = self.value()?;
        self.skip_whitespace();

        if !self.is_at_end() {
            let token = &self.tokens[self.current];
            return Err(SyntaxError::trailing_content(token.kind, token.span));
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_text(input: &str) -> Result<Value, SyntaxError> {
        parse(tokenize(input)?)
    }

    #[test]
    fn document_is_a_single_value() {
        assert_eq!(parse_text("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_text("  42  ").unwrap(), Value::Int(42));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let error = parse_text("true false").unwrap_err();
        assert_eq!(error.code, "E_TRAILING_CONTENT");
        assert!(error.message.contains("LITERAL"));
    }

    #[test]
    fn trailing_whitespace_is_permitted() {
        assert_eq!(parse_text("null \n\t ").unwrap(), Value::Null);
    }

    #[test]
    fn empty_input_is_an_eof_error() {
        let error = parse_text("").unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_EOF");

        let error = parse_text("   ").unwrap_err();
        assert_eq!(error.code, "E_UNEXPECTED_EOF");
    }
}
