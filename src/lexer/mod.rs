/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for tokens, lexical category tables and the
 *           reference tokenizer.
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

/// Token and token category definitions.
pub mod token;

/// Reserved words.
pub mod keywords;

/// Operator spellings grouped by family and precedence level.
pub mod operators;

/// Regex-driven tokenizer producing `Vec<Token>`.
pub mod lexer;

pub use lexer::tokenize;
pub use token::{Token, TokenKind};
