/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions that turn a token stream into a `Program` syntax tree.
 *
 * The grammar itself is split across multiple modules:
 * - `cursor.rs`       → Token cursor, checkpoints and nesting depth
 * - `statements.rs`   → Program structure and statement grammar
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Keyword matching and error construction
 *
 * --------------------------------------------------------------------------
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

use serde::{Deserialize, Serialize};

use crate::ast::{Expr, Program};
use crate::error::ParseResult;
use crate::lexer::token::Token;
use crate::parser::cursor::Cursor;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Deepest allowed nesting of statement blocks and recursive
    /// expression rules combined.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// The recursive-descent parser.
///
/// Owns the cursor over the token stream. The grammar rules live in
/// additional `impl Parser` blocks (`statements`, `expressions`, `helpers`).
/// A parser is single-use: `parse` consumes it, and concurrent parses each
/// need their own instance.
#[derive(Debug)]
pub struct Parser {
    pub(crate) cursor: Cursor,
    pub(crate) options: ParseOptions,
}

/// Parses a complete program with default options.
///
/// # Pipeline
/// ```text
/// Source → Tokenizer → Tokens → Parser → Program
/// ```
///
/// # Example
/// ```
/// let tokens = pseudo::lexer::tokenize("PROGRAM p\nBEGIN\n  OUTPUT 1\nEND\n").unwrap();
/// let program = pseudo::parse(tokens).unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}

pub fn parse_with_options(tokens: Vec<Token>, options: ParseOptions) -> ParseResult<Program> {
    Parser::with_options(tokens, options).parse()
}

/// Parses a lone expression, e.g. for tests or a calculator front end.
pub fn parse_expression(tokens: Vec<Token>) -> ParseResult<Expr> {
    let mut parser = Parser::new(tokens);
    let expr = parser.expression()?;
    parser.expect_end_of_input()?;
    Ok(expr)
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            options,
        }
    }

    /// Parses the whole token stream as one program.
    ///
    /// # Behavior
    /// - Fails fast: the first grammar violation is returned and nothing of
    ///   the partial tree survives.
    /// - Only line ends may follow the closing `END`.
    pub fn parse(mut self) -> ParseResult<Program> {
        let program = self.pseudo_program()?;
        self.expect_end_of_input()?;
        Ok(program)
    }

    fn expect_end_of_input(&mut self) -> ParseResult<()> {
        self.cursor.skip_line_ends();
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.expected_found("end of input", self.cursor.peek().clone()))
        }
    }
}
