/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     parser/cursor.rs
 * Purpose:  Token cursor, checkpoints ("ready contexts") and nesting depth.
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

//! The cursor is the only mutable state a parse has. It moves forward one
//! token at a time and never rewinds.
//!
//! Checkpoints do not roll anything back. They record where a construct
//! started so that an error raised inside it points at that start instead
//! of wherever the cursor happened to stop.

use crate::error::{ParseError, ParseResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::{SourceSpan, Span};

/// One-token-lookahead cursor over a finite token sequence.
#[derive(Debug)]
pub struct Cursor {
    tokens: Vec<Token>,
    current: usize,
    /// Entry indices of the active checkpoints, innermost last.
    checkpoints: Vec<usize>,
    depth: usize,
    /// Handed out for every read past the last token.
    eof: Token,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span).unwrap_or_default();
        Self {
            tokens,
            current: 0,
            checkpoints: Vec::new(),
            depth: 0,
            eof: Token::at(TokenKind::Eof, "", end),
        }
    }

    /// Token at the cursor; the end-of-stream token once input runs out.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// Returns the token at the cursor and moves past it.
    ///
    /// Reading past the end keeps returning end-of-stream without moving.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    /// Advances past any run of end-of-line tokens.
    pub fn skip_line_ends(&mut self) {
        while self.peek().kind == TokenKind::Eol {
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Index of the next token to be read.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Current nesting depth (see `Parser::nest`).
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn span_at(&self, index: usize) -> Span {
        self.tokens.get(index).unwrap_or(&self.eof).span
    }

    /// Where an error raised right now should point: the entry of the
    /// innermost checkpoint, or the cursor when none is active.
    pub fn checkpoint_span(&self) -> Span {
        let index = self.checkpoints.last().copied().unwrap_or(self.current);
        self.span_at(index)
    }

    /// Span from the token at `start` to the last token consumed.
    pub fn span_since(&self, start: usize) -> SourceSpan {
        self.span_between(start, self.current)
    }

    /// Span of the tokens in `start..end`.
    pub fn span_between(&self, start: usize, end: usize) -> SourceSpan {
        let first = self.span_at(start);
        if end > start {
            SourceSpan::new(first, self.span_at(end - 1))
        } else {
            SourceSpan::point(first)
        }
    }
}

impl Parser {
    /// Runs `rule` inside a checkpoint opened at the current token.
    ///
    /// Errors built while the checkpoint is innermost carry its entry
    /// position. The checkpoint is removed on every exit path, including
    /// errors; the cursor itself is left wherever `rule` moved it.
    pub(crate) fn ready_context<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let mark = self.cursor.checkpoints.len();
        self.cursor.checkpoints.push(self.cursor.current);

        let result = rule(self);

        self.cursor.checkpoints.truncate(mark);
        result
    }

    /// Runs `rule` one structural level deeper.
    ///
    /// Statement lists and recursive expression rules go through here, so
    /// the depth bounds recursion on pathological input. Exceeding
    /// `ParseOptions::max_depth` fails with `ParseError::TooDeep` instead of
    /// overflowing the stack.
    pub(crate) fn nest<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.cursor.depth >= self.options.max_depth {
            return Err(ParseError::TooDeep {
                limit: self.options.max_depth,
                span: self.cursor.checkpoint_span(),
            });
        }

        self.cursor.depth += 1;
        let result = rule(self);
        self.cursor.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser::ParseOptions;

    fn tokens() -> Vec<Token> {
        vec![
            Token::at(TokenKind::Eol, "", Span::new(1, 0)),
            Token::at(TokenKind::Eol, "", Span::new(2, 0)),
            Token::at(TokenKind::Identifier, "x", Span::new(3, 0)),
            Token::at(TokenKind::Operator, "=", Span::new(3, 2)),
            Token::at(TokenKind::Number, "1", Span::new(3, 4)),
        ]
    }

    #[test]
    fn peek_does_not_advance() {
        let cursor = Cursor::new(tokens());
        assert_eq!(cursor.peek(), cursor.peek());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn reads_past_the_end_yield_eof() {
        let mut cursor = Cursor::new(vec![Token::identifier("a")]);
        assert_eq!(cursor.advance(), Token::identifier("a"));
        assert_eq!(cursor.advance(), Token::eof());
        assert_eq!(cursor.advance(), Token::eof());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn skips_runs_of_line_ends() {
        let mut cursor = Cursor::new(tokens());
        cursor.skip_line_ends();
        assert_eq!(cursor.peek(), &Token::identifier("x"));
        cursor.skip_line_ends();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn span_since_covers_consumed_tokens() {
        let mut cursor = Cursor::new(tokens());
        cursor.skip_line_ends();
        let start = cursor.position();
        assert_eq!(cursor.span_since(start), SourceSpan::point(Span::new(3, 0)));
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(
            cursor.span_since(start),
            SourceSpan::new(Span::new(3, 0), Span::new(3, 4))
        );
    }

    #[test]
    fn errors_point_at_the_innermost_checkpoint() {
        let mut parser = Parser::new(tokens());
        parser.cursor.skip_line_ends();

        let err = parser
            .ready_context(|p| {
                p.cursor.advance();
                p.ready_context(|p| {
                    p.cursor.advance();
                    p.cursor.advance();
                    Err::<(), _>(p.expected("thing"))
                })
            })
            .unwrap_err();

        assert_eq!(err.span(), Span::new(3, 2));
        assert!(parser.cursor.checkpoints.is_empty());
        // no rollback
        assert_eq!(parser.cursor.position(), 5);
    }

    #[test]
    fn without_checkpoint_errors_point_at_the_cursor() {
        let mut parser = Parser::new(tokens());
        parser.cursor.skip_line_ends();
        assert_eq!(parser.expected("thing").span(), Span::new(3, 0));
    }

    #[test]
    fn nest_restores_depth_on_error() {
        let mut parser = Parser::new(tokens());
        let result: ParseResult<()> = parser.nest(|p| {
            assert_eq!(p.cursor.depth(), 1);
            p.nest(|p| Err(p.expected("thing")))
        });
        assert!(result.is_err());
        assert_eq!(parser.cursor.depth(), 0);
    }

    #[test]
    fn nest_enforces_the_depth_limit() {
        let mut parser = Parser::with_options(tokens(), ParseOptions { max_depth: 2 });
        let result = parser.nest(|p| p.nest(|p| p.nest(|_| Ok(()))));
        assert_eq!(
            result,
            Err(ParseError::TooDeep {
                limit: 2,
                span: Span::new(1, 0),
            })
        );
        assert_eq!(parser.cursor.depth(), 0);
    }
}
