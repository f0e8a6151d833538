/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Error types raised while tokenizing and parsing.
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

use thiserror::Error;

use crate::lexer::token::Token;
use crate::span::Span;

pub type ParseResult<T> = Result<T, ParseError>;

/// A fatal grammar violation.
///
/// The parser stops at the first one; there is no recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A required construct was missing.
    ///
    /// `span` is the entry position of the innermost checkpoint that was
    /// active when the rule gave up, i.e. where the construct should start.
    #[error("expected {construct}{}", got(.found))]
    Expected {
        construct: &'static str,
        found: Option<Token>,
        span: Span,
    },

    /// Statement or expression nesting exceeded `ParseOptions::max_depth`.
    #[error("nesting too deep (limit is {limit})")]
    TooDeep { limit: usize, span: Span },
}

fn got(found: &Option<Token>) -> String {
    found
        .as_ref()
        .map(|token| format!(", got {}", token.describe()))
        .unwrap_or_default()
}

impl ParseError {
    pub fn expected(construct: &'static str, span: Span) -> Self {
        ParseError::Expected {
            construct,
            found: None,
            span,
        }
    }

    pub fn expected_found(construct: &'static str, found: Token, span: Span) -> Self {
        ParseError::Expected {
            construct,
            found: Some(found),
            span,
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Expected { .. } => "P0001",
            ParseError::TooDeep { .. } => "P0002",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Expected { span, .. } | ParseError::TooDeep { span, .. } => *span,
        }
    }

    /// Optional follow-up hint for the diagnostic printer.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::Expected { construct, .. } => match *construct {
                "end of statement" => Some("each statement ends with a line break or ';'"),
                "assignment operator" => Some("assign with '=', '<-' or ':='"),
                "variable reference" => Some("INPUT reads into a variable, e.g. INPUT total"),
                "statement" => Some("a block may be missing its END, ELSE, REPEAT or NEXT"),
                _ => None,
            },
            ParseError::TooDeep { .. } => Some("split deeply nested blocks or expressions"),
        }
    }
}

/// A failure while splitting source text into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char, span: Span },
}

impl LexError {
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "L0001",
            LexError::UnexpectedCharacter { .. } => "L0002",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span } | LexError::UnexpectedCharacter { span, .. } => {
                *span
            }
        }
    }
}

/// Any failure on the way from source text to a syntax tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(err) => err.code(),
            Error::Parse(err) => err.code(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Lex(err) => err.span(),
            Error::Parse(err) => err.span(),
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            Error::Lex(LexError::UnterminatedString { .. }) => {
                Some("strings must close on the line they open")
            }
            Error::Lex(_) => None,
            Error::Parse(err) => err.help(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_message_names_the_found_token() {
        let err = ParseError::expected_found("BEGIN", Token::identifier("x"), Span::new(2, 0));
        assert_eq!(err.to_string(), "expected BEGIN, got identifier 'x'");
        assert_eq!(err.code(), "P0001");
        assert_eq!(err.span(), Span::new(2, 0));
    }

    #[test]
    fn expected_message_without_found_token() {
        let err = ParseError::expected("variable reference", Span::new(4, 6));
        assert_eq!(err.to_string(), "expected variable reference");
        assert!(err.help().is_some());
    }

    #[test]
    fn wraps_lex_and_parse_errors() {
        let err: Error = LexError::UnterminatedString { span: Span::new(1, 3) }.into();
        assert_eq!(err.code(), "L0001");
        assert_eq!(err.to_string(), "unterminated string literal");

        let err: Error = ParseError::TooDeep { limit: 8, span: Span::default() }.into();
        assert_eq!(err.code(), "P0002");
        assert_eq!(err.to_string(), "nesting too deep (limit is 8)");
    }
}
