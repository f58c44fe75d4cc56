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
use crate::lexer::keywords::is_literal_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Performs complete lexical analysis over a source string.
///
/// This is the **entry point for lexical analysis** in the PAWSON pipeline.
/// The whole input is scanned once, left to right, consuming the longest
/// valid token at each position.
///
/// # Returns
/// The full ordered token sequence, whitespace tokens included. End of
/// input is represented by exhaustion of the sequence; no EOF marker is
/// appended.
///
/// # Errors
/// The first lexical violation aborts the scan:
/// - `E_UNTERMINATED_STRING` for a string with no closing quote
/// - `E_UNEXPECTED_CHARACTER` for anything that cannot start or finish
///   a token
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).scan_tokens()
}

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new PAWSON lexer instance from raw source text.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`
    /// - Empty token output buffer
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Scans the entire input and returns the token sequence.
    ///
    /// Consumes the lexer; each instance scans exactly once.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, SyntaxError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(self.tokens)
    }

    /// Scans and emits a single token from the source stream.
    ///
    /// Classification is by the current character, in priority order:
    /// whitespace, string, number, structural single characters, literal
    /// keyword. Any other character is a lexical error.
    fn scan_token(&mut self) -> Result<(), SyntaxError> {
        let span = self.span();

        match self.peek() {
            ' ' | '\t' | '\n' | '\r' => self.whitespace(span),
            '"' => self.string(span)?,
            '-' | '0'..='9' => self.number(span)?,
            '{' | '}' | '(' | ')' | ':' | ',' => self.structural(span),
            'a'..='z' => self.keyword(span)?,
            other => return Err(SyntaxError::unexpected_character(other, span)),
        }

        Ok(())
    }

    /// Consumes a maximal run of whitespace characters into one token.
    ///
    /// Whitespace is **kept**, not discarded; the parser drops it by
    /// optional consumption at every grammar point where it may appear.
    fn whitespace(&mut self, span: Span) {
        let start = self.current;

        while matches!(self.peek(), ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }

        self.push(TokenKind::Whitespace, start, span);
    }

    /// Consumes a string literal through the next unescaped closing quote.
    ///
    /// A backslash consumes the character that follows it, so `\"` does not
    /// terminate the literal. The lexeme keeps both quotes and every escape
    /// sequence verbatim; the parser strips exactly one character from each
    /// end and performs no further processing.
    ///
    /// # Errors
    /// `E_UNTERMINATED_STRING`, reported at the opening quote, if the input
    /// ends before the closing quote (including when a trailing backslash
    /// swallows the final character).
    fn string(&mut self, span: Span) -> Result<(), SyntaxError> {
        let start = self.current;
        self.advance(); // opening quote

        loop {
            if self.is_at_end() {
                return Err(SyntaxError::unterminated_string(span));
            }

            match self.advance() {
                '"' => break,
                '\\' => {
                    if self.is_at_end() {
                        return Err(SyntaxError::unterminated_string(span));
                    }
                    self.advance();
                }
                _ => {}
            }
        }

        self.push(TokenKind::String, start, span);
        Ok(())
    }

    /// Consumes a numeric literal.
    ///
    /// Grammar: optional leading `-`, one or more digits, optional `.` plus
    /// digits, optional exponent (`e`/`E`, optional sign, digits). The `.`
    /// and the exponent marker are consumed only when lookahead confirms
    /// they extend a valid number, so `1.` lexes as `1` followed by a stray
    /// `.` and `1e` as `1` followed by a stray `e`.
    ///
    /// # Errors
    /// `E_UNEXPECTED_CHARACTER` naming `-` when the sign is not followed by
    /// a digit.
    fn number(&mut self, span: Span) -> Result<(), SyntaxError> {
        let start = self.current;

        if self.peek() == '-' {
            if !self.peek_next().is_ascii_digit() {
                return Err(SyntaxError::unexpected_character('-', span));
            }
            self.advance();
        }

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        if matches!(self.peek(), 'e' | 'E') && self.exponent_follows() {
            self.advance(); // consume 'e' / 'E'
            if matches!(self.peek(), '+' | '-') {
                self.advance();
            }
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.push(TokenKind::Number, start, span);
        Ok(())
    }

    /// Whether the characters after the current `e`/`E` form a valid
    /// exponent tail: a digit, or a sign followed by a digit.
    fn exponent_follows(&self) -> bool {
        match self.peek_next() {
            '+' | '-' => self.peek_at(2).is_ascii_digit(),
            next => next.is_ascii_digit(),
        }
    }

    /// Consumes one structural character into its token.
    fn structural(&mut self, span: Span) {
        let start = self.current;

        let kind = match self.advance() {
            '{' => TokenKind::OpenBracket,
            '}' => TokenKind::CloseBracket,
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            _ => unreachable!(), // scan_token dispatch guarantees this
        };

        self.push(kind, start, span);
    }

    /// Consumes a maximal run of lowercase letters and accepts it only if
    /// it is exactly one of the literal keywords `true`, `false`, `null`.
    ///
    /// The run is greedy and the check is strict: `nullish` is rejected as
    /// a whole rather than lexed as `null` plus trailing letters.
    ///
    /// # Errors
    /// `E_UNEXPECTED_CHARACTER` naming the run's first character, with a
    /// help note naming the full word.
    fn keyword(&mut self, span: Span) -> Result<(), SyntaxError> {
        let start = self.current;

        while self.peek().is_ascii_lowercase() {
            self.advance();
        }

        let word: String = self.chars[start..self.current].iter().collect();

        if !is_literal_keyword(&word) {
            return Err(
                SyntaxError::unexpected_character(self.chars[start], span).with_help(format!(
                    "'{}' is not a pawson keyword; expected true, false, or null",
                    word
                )),
            );
        }

        self.tokens.push(Token {
            kind: TokenKind::Literal,
            lexeme: word,
            span,
        });
        Ok(())
    }

    /// Emits a token whose lexeme is the source text scanned since `start`.
    fn push(&mut self, kind: TokenKind, start: usize, span: Span) {
        let lexeme: String = self.chars[start..self.current].iter().collect();
        self.tokens.push(Token { kind, lexeme, span });
    }

    /// The span of the current (not yet consumed) character.
    fn span(&self) -> Span {
        Span {
            offset: self.current,
            line: self.line,
            column: self.column,
        }
    }

    /// Advances the lexer cursor by one character.
    ///
    /// # Returns
    /// The character that was consumed.
    ///
    /// # Safety
    /// Caller must ensure EOF has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        ch
    }

    /// Returns the current character without consuming it.
    ///
    /// # Returns
    /// - The current character
    /// - `'\0'` if the end of input has been reached
    fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// Returns the next character after the current one without consuming it.
    fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    /// Returns the character `ahead` positions past the cursor, or `'\0'`
    /// past the end of input.
    fn peek_at(&self, ahead: usize) -> char {
        self.chars.get(self.current + ahead).copied().unwrap_or('\0')
    }

    /// Determines whether the lexer has reached the end of input.
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
