/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lexer/token.rs
 * Purpose:  Defines the classified lexical tokens consumed by the parser.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token**.
///
/// The set is closed: every grammar decision in the parser is a pattern
/// match on one of these categories plus a comparison of the token text.
///
/// # Pipeline Role
/// ```text
/// Source → Tokenizer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A user-defined name (`total`, `new_num`).
    Identifier,

    /// A numeric literal, kept as written (`42`, `3.5`, `.25`).
    Number,

    /// A string literal with the quotes removed and escapes resolved.
    String,

    /// A reserved word such as `PROGRAM`, `IF`, `REPEAT`.
    ///
    /// The reference tokenizer stores keywords upper-cased, so the parser
    /// compares against upper-case text only.
    Keyword,

    /// A symbolic or word operator (`+`, `<-`, `<>`, `and`, `NOT`).
    Operator,

    /// Punctuation that is not an operator: `(`, `)`, `,` and friends.
    Symbol,

    /// End of a statement: a line break or a `;`.
    Eol,

    /// End-of-stream marker.
    ///
    /// The cursor hands this out for every read past the last token, so a
    /// token sequence does not need to carry one explicitly.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Symbol => "symbol",
            TokenKind::Eol => "end of line",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// Represents a **single classified token**.
///
/// A `Token` consists of:
/// - A category (`TokenKind`)
/// - The token text (`lexeme`)
/// - The position it was read from (`span`)
///
/// # Equality
/// Two tokens are equal when their category **and** text match. The span is
/// deliberately ignored so grammar rules can compare against freshly built
/// tokens such as `Token::keyword("END")`.
///
/// # Example Tokens
/// ```text
/// PROGRAM  →  { kind: Keyword,    lexeme: "PROGRAM" }
/// total    →  { kind: Identifier, lexeme: "total"   }
/// <-       →  { kind: Operator,   lexeme: "<-"      }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Builds a token with no meaningful source position.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span: Span::default(),
        }
    }

    /// Builds a token read from `span`.
    pub fn at(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, name)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::String, text)
    }

    pub fn keyword(word: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, word)
    }

    pub fn operator(op: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, op)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, text)
    }

    pub fn eol() -> Self {
        Self::new(TokenKind::Eol, "")
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// True when this is the keyword `word` (compared exactly).
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    /// True when this is the symbol `text`.
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == text
    }

    /// Describes the token for diagnostics: `keyword 'END'`, `end of line`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eol | TokenKind::Eof => self.kind.to_string(),
            kind => format!("{} '{}'", kind, self.lexeme),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    /// Prints only the token text, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_position() {
        let read = Token::at(TokenKind::Keyword, "END", Span::new(9, 4));
        assert_eq!(read, Token::keyword("END"));
        assert_ne!(read, Token::identifier("END"));
        assert_ne!(read, Token::keyword("End"));
    }

    #[test]
    fn describes_tokens_for_diagnostics() {
        assert_eq!(Token::keyword("ELSE").describe(), "keyword 'ELSE'");
        assert_eq!(Token::number("5").describe(), "number '5'");
        assert_eq!(Token::eol().describe(), "end of line");
        assert_eq!(Token::eof().describe(), "end of input");
    }
}
