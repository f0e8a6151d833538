/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     ast/render.rs
 * Purpose:  Renders syntax trees back to pseudocode text.
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

//! `Display` implementations for the syntax tree.
//!
//! The output re-parses to the same tree. Nested binary operands are
//! parenthesised, except a right operand at the same precedence level as
//! its parent: chains lean right, so `a + b + c` already means
//! `a + (b + c)` and long chains render flat.

use std::fmt::{self, Write};

use crate::ast::expr::Expr;
use crate::ast::stmt::{Assignment, Program, Stmt};
use crate::lexer::token::TokenKind;
use crate::parser::Precedence;

const INDENT: &str = "    ";

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROGRAM {}", self.name)?;
        writeln!(f, "BEGIN")?;
        write_block(f, &self.body, 1)?;
        write!(f, "END PROGRAM")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.target.name, self.value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal { token, .. } if token.kind == TokenKind::String => {
                write_string(f, &token.lexeme)
            }
            Expr::Literal { token, .. } => write!(f, "{}", token.lexeme),
            Expr::Variable(var) => write!(f, "{}", var.name),
            Expr::Unary {
                operator, operand, ..
            } => {
                f.write_str(&operator.lexeme)?;
                // word operators need a gap: `NOT x`, not `NOTx`
                if operator.lexeme.chars().all(char::is_alphabetic) {
                    f.write_char(' ')?;
                }
                match operand.as_ref() {
                    Expr::Unary { .. } | Expr::Binary { .. } => write!(f, "({operand})"),
                    _ => write!(f, "{operand}"),
                }
            }
            Expr::Binary {
                operator,
                left,
                right,
                ..
            } => {
                write_operand(f, left)?;
                write!(f, " {} ", operator.lexeme)?;
                match right.as_ref() {
                    Expr::Binary { operator: inner, .. }
                        if Precedence::of(inner) == Precedence::of(operator) =>
                    {
                        write!(f, "{right}")
                    }
                    _ => write_operand(f, right),
                }
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Binary { .. } => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

fn write_block(f: &mut fmt::Formatter<'_>, stmts: &[Stmt], depth: usize) -> fmt::Result {
    for stmt in stmts {
        write_stmt(f, stmt, depth)?;
        f.write_char('\n')?;
    }
    Ok(())
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    write_indent(f, depth)?;

    match stmt {
        Stmt::Assign(assignment) => write!(f, "{assignment}"),

        Stmt::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            writeln!(f, "IF {condition} THEN")?;
            write_block(f, then_branch, depth + 1)?;
            if !else_branch.is_empty() {
                write_indent(f, depth)?;
                writeln!(f, "ELSE")?;
                write_block(f, else_branch, depth + 1)?;
            }
            write_indent(f, depth)?;
            f.write_str("END IF")
        }

        Stmt::While {
            condition, body, ..
        } => {
            writeln!(f, "WHILE {condition} DO")?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            f.write_str("REPEAT")
        }

        Stmt::For {
            init, bound, body, ..
        } => {
            writeln!(f, "FOR {init} TO {bound} DO")?;
            write_block(f, body, depth + 1)?;
            write_indent(f, depth)?;
            f.write_str("NEXT")
        }

        Stmt::Io {
            keyword, operand, ..
        } => write!(f, "{} {}", keyword.lexeme, operand),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::expr::{Expr, VariableRef};
    use crate::lexer::token::Token;
    use crate::span::SourceSpan;

    fn var(name: &str) -> Expr {
        Expr::Variable(VariableRef {
            name: name.to_string(),
            span: SourceSpan::default(),
        })
    }

    fn binary(op: &str, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            operator: Token::operator(op),
            left: Box::new(left),
            right: Box::new(right),
            span: SourceSpan::default(),
        }
    }

    fn unary(op: &str, operand: Expr) -> Expr {
        Expr::Unary {
            operator: Token::operator(op),
            operand: Box::new(operand),
            span: SourceSpan::default(),
        }
    }

    #[test]
    fn nested_binaries_are_parenthesised() {
        let expr = binary("*", binary("+", var("a"), var("b")), var("c"));
        assert_eq!(expr.to_string(), "(a + b) * c");
    }

    #[test]
    fn same_level_right_chains_render_flat() {
        let chain = binary("+", var("a"), binary("-", var("b"), var("c")));
        assert_eq!(chain.to_string(), "a + b - c");

        let left_leaning = binary("+", binary("-", var("a"), var("b")), var("c"));
        assert_eq!(left_leaning.to_string(), "(a - b) + c");

        let mixed = binary("OR", var("a"), binary("AND", var("b"), var("c")));
        assert_eq!(mixed.to_string(), "a OR (b AND c)");
    }

    #[test]
    fn unary_operands() {
        assert_eq!(unary("-", unary("-", var("x"))).to_string(), "-(-x)");
        assert_eq!(unary("NOT", var("done")).to_string(), "NOT done");
    }

    #[test]
    fn strings_are_escaped() {
        let expr = Expr::Literal {
            token: Token::string("say \"hi\"\n"),
            span: SourceSpan::default(),
        };
        assert_eq!(expr.to_string(), r#""say \"hi\"\n""#);
    }
}
