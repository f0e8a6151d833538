/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  Expression nodes.
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

use crate::lexer::token::Token;
use crate::span::SourceSpan;

/// A named variable, used both as an operand and as an assignment target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableRef {
    pub name: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Expr {
    /// A number or string token exactly as the tokenizer produced it.
    Literal { token: Token, span: SourceSpan },

    Variable(VariableRef),

    Unary {
        operator: Token,
        operand: Box<Expr>,
        span: SourceSpan,
    },

    Binary {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
        span: SourceSpan,
    },
}

impl Expr {
    pub fn span(&self) -> SourceSpan {
        match self {
            Expr::Literal { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. } => *span,
            Expr::Variable(var) => var.span,
        }
    }

    /// The variable this expression names, if it is a bare reference.
    pub fn as_variable(&self) -> Option<&VariableRef> {
        match self {
            Expr::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Operator text of a unary or binary node.
    pub fn operator(&self) -> Option<&str> {
        match self {
            Expr::Unary { operator, .. } | Expr::Binary { operator, .. } => {
                Some(operator.lexeme.as_str())
            }
            _ => None,
        }
    }
}
