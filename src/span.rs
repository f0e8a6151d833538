/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     span.rs
 * Purpose:  Source coordinates carried by tokens, syntax nodes and errors.
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

use serde::Serialize;
use std::fmt;

/// A single point in the source text.
///
/// - `line` is 1-based, matching what editors show.
/// - `column` is a 0-based character offset into that line.
///
/// Tokens built by hand (tests, other tokenizers) may leave this at its
/// default of `0:0`; the parser never relies on it for decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

/// The extent of a syntax node: the position of the first token the
/// construct was parsed from, and the position of the last token it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourceSpan {
    pub start: Span,
    pub end: Span,
}

impl SourceSpan {
    pub fn new(start: Span, end: Span) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one token.
    pub fn point(at: Span) -> Self {
        Self { start: at, end: at }
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
