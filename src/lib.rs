/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root. Wires the tokenizer, parser and diagnostics together.
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

//! Parser for a structured-English pseudocode notation.
//!
//! ```text
//! PROGRAM average
//! BEGIN
//!     total = 0
//!     FOR i = 1 TO 10 DO
//!         INPUT n
//!         total <- total + n
//!     NEXT
//!     OUTPUT total / 10
//! END PROGRAM
//! ```
//!
//! The parser consumes a `Vec<Token>` and returns a `Program`, or the first
//! `ParseError` it hits. `parse_source` runs the bundled tokenizer first.

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{Assignment, Expr, Program, Stmt, VariableRef};
pub use diagnostics::DiagnosticPrinter;
pub use error::{Error, LexError, ParseError, ParseResult};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_expression, parse_with_options, ParseOptions, Parser};
pub use span::{SourceSpan, Span};

/// Tokenizes and parses `source` with default options.
///
/// # Example
/// ```
/// let program = pseudo::parse_source("PROGRAM p\nBEGIN\n  x = 1\nEND\n").unwrap();
/// assert_eq!(program.name, "p");
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    parse_source_with(source, ParseOptions::default())
}

pub fn parse_source_with(source: &str, options: ParseOptions) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_with_options(tokens, options)?)
}
