/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lexer/keywords.rs
 * Purpose:  Reserved words of the pseudocode notation.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the PSEUDO project.
 *
 * PSEUDO is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/// Every reserved word, in canonical (upper-case) spelling.
pub const KEYWORDS: &[&str] = &[
    "BEGIN", "END", "FOR", "TO", "WHILE", "THEN", "MODULE", "PROGRAM", "IF", "ELSE", "DO", "NEXT",
    "REPEAT", "OUTPUT", "INPUT", "PRINT",
];

/// Returns the canonical spelling of `word` if it is a reserved word.
///
/// Keywords are recognised case-insensitively:
/// ```text
/// while  -> Some("WHILE")
/// End    -> Some("END")
/// total  -> None
/// ```
pub fn keyword(word: &str) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .copied()
        .find(|kw| kw.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(keyword("repeat"), Some("REPEAT"));
        assert_eq!(keyword("Print"), Some("PRINT"));
        assert_eq!(keyword("PROGRAM"), Some("PROGRAM"));
        assert_eq!(keyword("program_name"), None);
        assert_eq!(keyword("BREAK"), None);
    }
}
