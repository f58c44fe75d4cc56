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

/// Determines whether a word is one of the **bare literal keywords** of the
/// PAWSON notation.
///
/// The lexer consumes a maximal run of lowercase letters and accepts the
/// run only if it is exactly one of the three keywords below; any other run
/// is a lexical error. Case-sensitive.
///
/// # Examples
/// ```text
/// true     -> keyword
/// null     -> keyword
/// nullish  -> rejected
/// True     -> never reaches here (uppercase cannot start a keyword run)
/// ```
pub fn is_literal_keyword(word: &str) -> bool {
    matches!(word, "true" | "false" | "null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_exactly_the_three_keywords() {
        assert!(is_literal_keyword("true"));
        assert!(is_literal_keyword("false"));
        assert!(is_literal_keyword("null"));

        assert!(!is_literal_keyword("nullish"));
        assert!(!is_literal_keyword("tru"));
        assert!(!is_literal_keyword(""));
    }
}
