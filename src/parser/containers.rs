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

use indexmap::IndexMap;

use crate::error::SyntaxError;
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;
use crate::parser::values::strip_quotes;
use crate::value::Value;

impl Parser {
    /// object → OPEN_BRACKET ( WS? STRING WS? COLON value ( COMMA | ε ) )* WS? CLOSE_BRACKET
    ///
    /// Each iteration first checks for the closing bracket without
    /// consuming it, so an empty object and a trailing comma both
    /// terminate cleanly. A missing comma breaks the loop immediately,
    /// making the closing bracket mandatory right after. Repeated keys
    /// overwrite the earlier entry while keeping its position.
    pub(crate) fn object(&mut self) -> Result<Value, SyntaxError> {
        self.consume(&[TokenKind::OpenBracket])?;
        let mut entries = IndexMap::new();

        loop {
            self.skip_whitespace();
            if self.check(TokenKind::CloseBracket) {
                break;
            }

            let key = strip_quotes(&self.consume(&[TokenKind::String])?.lexeme);
            self.skip_whitespace();
            self.consume(&[TokenKind::Colon])?;

            let value = self.value()?;
            entries.insert(key, value);

            if self.consume_optional(&[TokenKind::Comma]).is_none() {
                break;
            }
        }

        self.consume(&[TokenKind::CloseBracket])?;
        Ok(Value::Object(entries))
    }

    /// array → OPEN_PARENTHESIS ( WS? value ( COMMA | ε ) )* WS? CLOSE_PARENTHESIS
    ///
    /// Same loop shape as `object`: close-check first, break on a missing
    /// comma, mandatory closing parenthesis. Elements keep source order.
    pub(crate) fn array(&mut self) -> Result<Value, SyntaxError> {
        self.consume(&[TokenKind::OpenParenthesis])?;
        let mut values = Vec::new();

        loop {
            self.skip_whitespace();
            if self.check(TokenKind::CloseParenthesis) {
                break;
            }

            values.push(self.value()?);

            if self.consume_optional(&[TokenKind::Comma]).is_none() {
                break;
            }
        }

        self.consume(&[TokenKind::CloseParenthesis])?;
        Ok(Value::Array(values))
    }
}
