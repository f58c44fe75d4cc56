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

use crate::error::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

impl Parser {
    /// Consumes a required token whose kind is in `allowed`.
    ///
    /// This is the sole point of grammar dispatch and the sole point of
    /// error generation in the parser: every grammar rule is a sequence of
    /// `consume` / `consume_optional` calls.
    ///
    /// # Returns
    /// The consumed token on a match.
    ///
    /// # Errors
    /// - `E_UNEXPECTED_EOF` if the cursor is past the end of the stream
    /// - `E_UNEXPECTED_TOKEN` naming the allowed set and the actual token
    pub(crate) fn consume(&mut self, allowed: &[TokenKind]) -> Result<Token, SyntaxError> {
        if self.is_at_end() {
            return Err(SyntaxError::unexpected_end_of_input(
                expected_list(allowed),
                self.end_span(),
            ));
        }

        if allowed.contains(&self.tokens[self.current].kind) {
            return Ok(self.advance());
        }

        let token = &self.tokens[self.current];
        Err(SyntaxError::unexpected_token(
            expected_list(allowed),
            token.kind,
            token.span,
        ))
    }

    /// Consumes a token whose kind is in `allowed` if one is present.
    ///
    /// A non-match (or end of input) returns `None` and leaves the cursor
    /// untouched.
    pub(crate) fn consume_optional(&mut self, allowed: &[TokenKind]) -> Option<Token> {
        if !self.is_at_end() && allowed.contains(&self.tokens[self.current].kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Checks the current token's kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.tokens[self.current].kind == kind
    }

    /// Returns the current token without consuming it.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Discards one whitespace token if present.
    ///
    /// The lexer emits maximal whitespace runs, so a single optional
    /// consume covers every legal gap.
    pub(crate) fn skip_whitespace(&mut self) {
        self.consume_optional(&[TokenKind::Whitespace]);
    }

    /// Advances one token forward.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }

    /// Returns true if the parser has consumed every token.
    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// The span one position past the last token, used to report
    /// end-of-input errors.
    pub(crate) fn end_span(&self) -> Span {
        let Some(token) = self.tokens.last() else {
            return Span::origin();
        };

        let mut line = token.span.line;
        let mut column = token.span.column;
        for ch in token.lexeme.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Span {
            offset: token.span.offset + token.lexeme.chars().count(),
            line,
            column,
        }
    }
}

/// Renders an allowed-kind set for an error message: one kind prints as
/// itself, two as `X or Y`, more as `one of: A, B, C`.
pub(crate) fn expected_list(allowed: &[TokenKind]) -> String {
    match allowed {
        [single] => single.to_string(),
        [first, second] => format!("{} or {}", first, second),
        _ => {
            let names: Vec<String> = allowed.iter().map(|kind| kind.to_string()).collect();
            format!("one of: {}", names.join(", "))
        }
    }
}
