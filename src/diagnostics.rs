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
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for PAWSON syntax errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output stays readable without color:
/// ```text
/// error[E_UNEXPECTED_TOKEN]: was expecting COLON, instead found NUMBER
///   --> pets.pson:3:8
///    |
///   3 | "name" 42
///    |        ^
/// help: object keys are followed by ':'
/// ```
pub struct DiagnosticPrinter {
    /// Full source text of the document being parsed.
    ///
    /// Stored as a single string so specific lines can be extracted for
    /// error reporting.
    source: String,

    /// Name of the source file (e.g. `pets.pson`), display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source document.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a formatted diagnostic as a string.
    ///
    /// 1. Extracts line/column information from the error span
    /// 2. Locates the corresponding line of source text
    /// 3. Builds a compiler-style error header
    /// 4. Renders the source line with a caret pointing at the error
    /// 5. Appends the optional help suggestion
    pub fn render(&self, error: &SyntaxError) -> String {
        let Span { line, column, .. } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` guards a
        // zero line from an empty input.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        let mut output = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );

        output.push_str("   |\n");
        output.push_str(&format!("{:>3} | {}\n", line, src_line));

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        output.push_str(&format!("   | {}\n", underline));

        if let Some(help) = &error.help {
            output.push_str(&format!("\nhelp: {}\n", help));
        }

        output
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &SyntaxError) {
        eprint!("{}", self.render(error));
    }
}
