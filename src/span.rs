/*
 * ==========================================================================
 * PAWSON - Data with Claws!
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions attached to every token and syntax error
 *            produced by the PAWSON lexer and parser.
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

/// A position in the source text.
///
/// Every token records the span of its first character, and every
/// `SyntaxError` carries the span of the place it was raised. Spans are
/// measured over characters, not bytes, so multi-byte input stays addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 0-based character offset from the start of the input.
    pub offset: usize,

    /// 1-based line number.
    pub line: usize,

    /// 0-based column within the line.
    ///
    /// Diagnostics render this 1-based; see `DiagnosticPrinter`.
    pub column: usize,
}

impl Span {
    /// The span of the very first character of the input.
    pub fn origin() -> Self {
        Span {
            offset: 0,
            line: 1,
            column: 0,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::origin()
    }
}
