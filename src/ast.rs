/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     ast.rs
 * Purpose:  Abstract syntax tree produced by the parser.
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

//! Nodes are built bottom-up and never mutated afterwards. Every node
//! carries a `SourceSpan`.

pub mod expr;
pub mod render;
pub mod stmt;

pub use expr::{Expr, VariableRef};
pub use stmt::{Assignment, Program, Stmt};
