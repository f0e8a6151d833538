/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Shared token tests and error constructors for grammar rules.
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

use crate::error::{ParseError, ParseResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, kw: &str) -> bool {
        self.cursor.peek().is_keyword(kw)
    }

    /// Matches a keyword and consumes it if present.
    pub fn match_keyword(&mut self, kw: &str) -> bool {
        if self.check_keyword(kw) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a keyword if it is any of `kws`.
    pub fn match_any_keyword(&mut self, kws: &[&str]) -> bool {
        let token = self.cursor.peek();
        if token.kind == TokenKind::Keyword && kws.contains(&token.lexeme.as_str()) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must be keyword `kw`.
    ///
    /// Runs in its own checkpoint so the error points at the token read.
    pub fn consume_keyword(&mut self, kw: &'static str) -> ParseResult<()> {
        self.ready_context(|p| {
            let token = p.cursor.advance();
            if token.is_keyword(kw) {
                Ok(())
            } else {
                Err(p.expected_found(kw, token))
            }
        })
    }

    /// Builds a "construct expected" error at the innermost checkpoint.
    pub fn expected(&self, construct: &'static str) -> ParseError {
        ParseError::expected(construct, self.cursor.checkpoint_span())
    }

    /// Like `expected`, naming the token that was there instead.
    pub fn expected_found(&self, construct: &'static str, found: Token) -> ParseError {
        ParseError::expected_found(construct, found, self.cursor.checkpoint_span())
    }
}
