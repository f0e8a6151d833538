/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the PSEUDO recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Token cursor and checkpoints
 *   - Statement parsing
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and `ParseOptions`
/// - Exposes the `parse(tokens)` entry points
pub mod parser;

/// Token cursor, checkpoints and the nesting-depth guard.
pub mod cursor;

/// Statement-level parsing:
/// - program frame and statement lists
/// - assignment / IF / WHILE / FOR / INPUT / OUTPUT / PRINT
pub mod statements;

/// Expression-level parsing:
/// - logical or → ... → multiplicative → unary → primary
pub mod expressions;

/// Shared parser helpers:
/// - keyword matching
/// - error construction at the active checkpoint
pub mod helpers;

pub use expressions::Precedence;
pub use parser::{parse, parse_expression, parse_with_options, ParseOptions, Parser};
