/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes and the program root.
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

use crate::ast::expr::{Expr, VariableRef};
use crate::lexer::token::Token;
use crate::span::SourceSpan;

/// Root of every parse: `PROGRAM name BEGIN ... END`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub name: String,
    pub body: Vec<Stmt>,
    pub span: SourceSpan,
}

/// `target = value` (also spelled `<-` or `:=`).
///
/// Kept as its own struct because a FOR loop's initializer is always one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub target: VariableRef,
    pub value: Expr,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Stmt {
    Assign(Assignment),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        /// Empty when there was no ELSE.
        else_branch: Vec<Stmt>,
        span: SourceSpan,
    },

    While {
        condition: Expr,
        body: Vec<Stmt>,
        span: SourceSpan,
    },

    /// `FOR init TO bound ... NEXT`; the step is always one and implicit.
    For {
        init: Assignment,
        bound: Expr,
        body: Vec<Stmt>,
        span: SourceSpan,
    },

    /* ----------------------------- */
    /* INPUT / OUTPUT                */
    /* ----------------------------- */

    /// `INPUT`, `OUTPUT` or `PRINT` with its operand. For INPUT the operand
    /// is always an `Expr::Variable`.
    Io {
        keyword: Token,
        operand: Expr,
        span: SourceSpan,
    },
}

impl Stmt {
    pub fn span(&self) -> SourceSpan {
        match self {
            Stmt::Assign(assignment) => assignment.span,
            Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::For { span, .. }
            | Stmt::Io { span, .. } => *span,
        }
    }
}
