/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Reference tokenizer turning pseudocode text into the token
 *           stream the parser consumes.
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

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LexError;
use crate::lexer::keywords::keyword;
use crate::lexer::operators::is_word_operator;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[ \t\r\x0B\x0C]+"));
static IDENTIFIER_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z_][A-Za-z0-9_]*"));
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:[0-9]*\.[0-9]+|[0-9]+)"));
static STRING_RE: Lazy<Regex> =
    Lazy::new(|| compile(r#"^(?:"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#));
static OPERATOR_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?:==|<-|<=|>=|<>|!=|:=|&&|\|\||[!+\-*/<>=&|^])"));

fn compile(pattern: &str) -> Regex {
    // The patterns are literals above; a failure here is a typo, not input.
    Regex::new(pattern).expect("tokenizer pattern must compile")
}

/// Tokenizes a complete source text.
///
/// The result always ends with an end-of-line token followed by an
/// end-of-stream token, so the last statement of a file does not need a
/// trailing newline.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}

pub struct Lexer<'src> {
    source: &'src str,
    current: usize,
    line: usize,
    /// Characters (not bytes) since the last line break.
    column: usize,
    pub tokens: Vec<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, line 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            current: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Skips blanks (but not line breaks)
    /// - Emits `Eol` for every `\n` and every `;`
    /// - Appends a final `Eol` and `Eof`
    ///
    /// # Errors
    /// Stops at the first unterminated string or control character.
    pub fn scan_tokens(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let end = self.position();
        self.tokens.push(Token::at(TokenKind::Eol, "", end));
        self.tokens.push(Token::at(TokenKind::Eof, "", end));
        Ok(())
    }

    /// Scans and emits (at most) one token.
    fn scan_token(&mut self) -> Result<(), LexError> {
        let rest = &self.source[self.current..];
        let start = self.position();

        let Some(ch) = rest.chars().next() else {
            return Ok(());
        };

        if ch == '\n' || ch == ';' {
            self.bump(1);
            self.tokens.push(Token::at(TokenKind::Eol, "", start));
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            }
            return Ok(());
        }

        if let Some(m) = WHITESPACE_RE.find(rest) {
            self.bump(m.end());
            return Ok(());
        }

        if ch == '"' || ch == '\'' {
            let Some(m) = STRING_RE.find(rest) else {
                return Err(LexError::UnterminatedString { span: start });
            };
            let body = &m.as_str()[1..m.end() - 1];
            self.bump(m.end());
            self.tokens
                .push(Token::at(TokenKind::String, unescape(body), start));
            return Ok(());
        }

        if let Some(m) = NUMBER_RE.find(rest) {
            self.bump(m.end());
            self.tokens
                .push(Token::at(TokenKind::Number, m.as_str(), start));
            return Ok(());
        }

        if let Some(m) = OPERATOR_RE.find(rest) {
            self.bump(m.end());
            self.tokens
                .push(Token::at(TokenKind::Operator, m.as_str(), start));
            return Ok(());
        }

        if let Some(m) = IDENTIFIER_RE.find(rest) {
            self.bump(m.end());
            self.tokens.push(classify_word(m.as_str(), start));
            return Ok(());
        }

        if ch.is_control() {
            return Err(LexError::UnexpectedCharacter { ch, span: start });
        }

        // Everything else = single-char symbol
        self.bump(ch.len_utf8());
        self.tokens
            .push(Token::at(TokenKind::Symbol, ch.to_string(), start));
        Ok(())
    }

    /// Consumes `len` bytes, keeping the column in step.
    fn bump(&mut self, len: usize) {
        let end = self.current + len;
        self.column += self.source[self.current..end].chars().count();
        self.current = end;
    }

    fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Keyword (stored upper-case), word operator (kept as written), or name.
fn classify_word(word: &str, span: Span) -> Token {
    if let Some(kw) = keyword(word) {
        Token::at(TokenKind::Keyword, kw, span)
    } else if is_word_operator(word) {
        Token::at(TokenKind::Operator, word, span)
    } else {
        Token::at(TokenKind::Identifier, word, span)
    }
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
