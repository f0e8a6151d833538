/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Implements the expression grammar using recursive descent
 *
 * Author:   Sam Wilcox
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
 * This file is part of the PSEUDO project.
 *
 * PSEUDO is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Parsing order, loosest to tightest binding:
 *
 *   logical or → logical and → bitwise or → bitwise xor → bitwise and
 *     → equality → relational → additive → multiplicative → unary → primary
 *
 * The nine binary levels share one operator-stack loop keyed by
 * `Precedence`. Chains of one level associate to the RIGHT:
 *
 *   a OR b OR c   →   a OR (b OR c)
 *
 * ==========================================================================
 */

use crate::ast::{Expr, VariableRef};
use crate::error::ParseResult;
use crate::lexer::operators::{self, OperatorSet};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::SourceSpan;

/// One tier of the binary-operator chain.
///
/// Variants are ordered loosest first, so `a > b` means `a` binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl Precedence {
    pub const LOWEST: Precedence = Precedence::LogicalOr;

    pub const ALL: [Precedence; 9] = [
        Precedence::LogicalOr,
        Precedence::LogicalAnd,
        Precedence::BitwiseOr,
        Precedence::BitwiseXor,
        Precedence::BitwiseAnd,
        Precedence::Equality,
        Precedence::Relational,
        Precedence::Additive,
        Precedence::Multiplicative,
    ];

    pub fn operators(self) -> OperatorSet {
        use Precedence::*;
        match self {
            LogicalOr => operators::LOGICAL_OR,
            LogicalAnd => operators::LOGICAL_AND,
            BitwiseOr => operators::BITWISE_OR,
            BitwiseXor => operators::BITWISE_XOR,
            BitwiseAnd => operators::BITWISE_AND,
            Equality => operators::EQUALITY,
            Relational => operators::RELATIONAL,
            Additive => operators::ADDITIVE,
            Multiplicative => operators::MULTIPLICATIVE,
        }
    }

    /// Whether `token` is an operator of this level.
    ///
    /// Identifier and keyword tokens qualify too, so word operators work
    /// whichever way a tokenizer classified them.
    pub fn admits(self, token: &Token) -> bool {
        matches!(
            token.kind,
            TokenKind::Identifier | TokenKind::Keyword | TokenKind::Operator
        ) && operators::contains(self.operators(), &token.lexeme)
    }

    /// The level `token` operates at, if it is a binary operator.
    pub fn of(token: &Token) -> Option<Precedence> {
        Self::ALL.into_iter().find(|level| level.admits(token))
    }
}

/// An operand waiting on the operator stack, with the token range it came from.
struct Operand {
    expr: Expr,
    start: usize,
    end: usize,
}

impl Parser {
    /// expression → conditional
    ///
    /// The entry point used by statements and parentheses. Counts as one
    /// level of nesting.
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.nest(|p| p.conditional_expression())
    }

    /// conditional → logical_or
    pub fn conditional_expression(&mut self) -> ParseResult<Expr> {
        self.binary_expression()
    }

    /// level → tighter ( OP level )?   for every level in `Precedence`
    ///
    /// All nine levels are handled by one operator stack instead of one
    /// call per level. An operator only reduces the pending operators that
    /// bind strictly tighter than itself, so equal levels stay pending and
    /// chains associate to the right. A flat chain of any length costs no
    /// nesting depth.
    fn binary_expression(&mut self) -> ParseResult<Expr> {
        let mut operands = vec![self.operand()?];
        let mut pending: Vec<(Token, Precedence)> = Vec::new();

        while let Some(level) = Precedence::of(self.cursor.peek()) {
            while pending.last().is_some_and(|(_, top)| *top > level) {
                self.reduce(&mut operands, &mut pending);
            }
            pending.push((self.cursor.advance(), level));
            operands.push(self.operand()?);
        }

        while !pending.is_empty() {
            self.reduce(&mut operands, &mut pending);
        }

        // operands.len() == pending.len() + 1 throughout
        match operands.pop() {
            Some(operand) => Ok(operand.expr),
            None => Err(self.expected("expression")),
        }
    }

    /// Folds the top operator and its two operands into one binary node.
    fn reduce(&self, operands: &mut Vec<Operand>, pending: &mut Vec<(Token, Precedence)>) {
        let (Some((operator, _)), Some(right), Some(left)) =
            (pending.pop(), operands.pop(), operands.pop())
        else {
            return;
        };

        operands.push(Operand {
            start: left.start,
            end: right.end,
            expr: Expr::Binary {
                operator,
                left: Box::new(left.expr),
                right: Box::new(right.expr),
                span: self.cursor.span_between(left.start, right.end),
            },
        });
    }

    fn operand(&mut self) -> ParseResult<Operand> {
        let start = self.cursor.position();
        let expr = self.unary_expression()?;
        Ok(Operand {
            expr,
            start,
            end: self.cursor.position(),
        })
    }

    /// unary → UNARY_OP unary | primary
    ///
    /// Stacked operators (`- -x`, `NOT !x`) nest.
    fn unary_expression(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.peek();
        if token.kind != TokenKind::Operator || !operators::is_unary(&token.lexeme) {
            return self.primary_expression();
        }

        let start = self.cursor.position();
        let operator = self.cursor.advance();
        let operand = self.ready_context(|p| p.nest(|p| p.unary_expression()))?;

        Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
            span: self.cursor.span_since(start),
        })
    }

    /// primary → NUMBER | STRING | IDENTIFIER | "(" expression ")"
    fn primary_expression(&mut self) -> ParseResult<Expr> {
        let token = self.ready_context(|p| {
            let token = p.cursor.advance();
            match token.kind {
                TokenKind::Number | TokenKind::String | TokenKind::Identifier => Ok(token),
                _ if token.is_symbol("(") => Ok(token),
                _ => Err(p.expected_found("expression", token)),
            }
        })?;

        let span = SourceSpan::point(token.span);
        match token.kind {
            TokenKind::Number | TokenKind::String => Ok(Expr::Literal { token, span }),

            TokenKind::Identifier => Ok(Expr::Variable(VariableRef {
                name: token.lexeme,
                span,
            })),

            // "(": grouping leaves no node of its own
            _ => {
                let inner = self.expression()?;
                self.ready_context(|p| {
                    let close = p.cursor.advance();
                    if close.is_symbol(")") {
                        Ok(())
                    } else {
                        Err(p.expected_found("')'", close))
                    }
                })?;
                Ok(inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::lexer::tokenize;
    use crate::parser::parser::{parse_expression, ParseOptions};
    use crate::span::Span;

    fn parse(source: &str) -> Expr {
        parse_expression(tokenize(source).unwrap()).unwrap()
    }

    fn parse_err(source: &str) -> ParseError {
        parse_expression(tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn levels_run_from_loosest_to_tightest() {
        assert_eq!(Precedence::ALL[0], Precedence::LOWEST);
        assert!(Precedence::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Precedence::of(&Token::operator("*")), Some(Precedence::Multiplicative));
        assert_eq!(Precedence::of(&Token::identifier("and")), Some(Precedence::LogicalAnd));
        assert_eq!(Precedence::of(&Token::operator("<-")), None);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("2 + 3 * 4");
        let Expr::Binary {
            operator, left, right, ..
        } = expr
        else {
            panic!("expected a binary expression");
        };
        assert_eq!(operator.lexeme, "+");
        assert!(matches!(*left, Expr::Literal { ref token, .. } if token.lexeme == "2"));
        assert_eq!(right.operator(), Some("*"));
    }

    #[test]
    fn same_level_chains_lean_right() {
        let expr = parse("a OR b OR c");
        let Expr::Binary { left, right, .. } = &expr else {
            panic!("expected a binary expression");
        };
        assert!(matches!(left.as_ref(), Expr::Variable(v) if v.name == "a"));
        assert_eq!(right.operator(), Some("OR"));

        let Expr::Binary { right, .. } = parse("a - b - c") else {
            panic!("expected a binary expression");
        };
        assert_eq!(right.to_string(), "b - c");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse("(a + b) * c").to_string(), "(a + b) * c");
    }

    #[test]
    fn full_ladder() {
        let expr = parse("a || b && c | d ^ e & f = g < h + i * j");
        assert_eq!(
            expr.to_string(),
            "a || (b && (c | (d ^ (e & (f = (g < (h + (i * j))))))))"
        );
    }

    #[test]
    fn word_and_symbol_spellings_share_a_level() {
        let Expr::Binary { operator, right, .. } = parse("a and b && c") else {
            panic!("expected a binary expression");
        };
        assert_eq!(operator.lexeme, "and");
        assert_eq!(right.operator(), Some("&&"));
        assert_eq!(parse("x neq y").operator(), Some("neq"));
        assert_eq!(parse("x <> y").operator(), Some("<>"));
    }

    #[test]
    fn identifier_tokens_can_act_as_operators() {
        let tokens = vec![
            Token::identifier("a"),
            Token::identifier("or"),
            Token::identifier("b"),
        ];
        assert_eq!(parse_expression(tokens).unwrap().operator(), Some("or"));
    }

    #[test]
    fn stacked_unary_operators() {
        let expr = parse("- -x");
        assert_eq!(expr.to_string(), "-(-x)");
        assert_eq!(parse("NOT a = b").operator(), Some("="));
        assert_eq!(parse("NOT (a = b)").operator(), Some("NOT"));
    }

    #[test]
    fn unary_minus_binds_tighter_than_binary() {
        let expr = parse("-a * b");
        assert_eq!(expr.operator(), Some("*"));
        assert_eq!(expr.to_string(), "-a * b");
    }

    #[test]
    fn literals_are_kept_as_supplied() {
        let expr = parse("\"hello\"");
        assert!(matches!(expr, Expr::Literal { token, .. } if token == Token::string("hello")));
    }

    #[test]
    fn missing_operand_is_an_expression_error() {
        let err = parse_err("1 +");
        assert!(matches!(
            err,
            ParseError::Expected { construct: "expression", found: Some(ref t), .. }
                if t.kind == TokenKind::Eol
        ));
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse_err("(a + b");
        assert!(matches!(err, ParseError::Expected { construct: "')'", .. }));
    }

    #[test]
    fn keyword_in_operand_position() {
        let err = parse_err("a + THEN");
        assert_eq!(err.to_string(), "expected expression, got keyword 'THEN'");
        assert_eq!(err.span(), Span::new(1, 4));
    }

    #[test]
    fn node_spans_cover_the_expression() {
        let expr = parse("a + b * c");
        assert_eq!(expr.span().start, Span::new(1, 0));
        assert_eq!(expr.span().end, Span::new(1, 8));
    }

    #[test]
    fn mixed_levels_reduce_tighter_operators_first() {
        assert_eq!(parse("a * b + c").to_string(), "(a * b) + c");
        assert_eq!(parse("a + b * c - d").to_string(), "a + (b * c) - d");
        assert_eq!(parse("a = b OR c").to_string(), "(a = b) OR c");
        assert_eq!(parse("a + b * c - d").operator(), Some("+"));
    }

    #[test]
    fn long_flat_chains_cost_no_depth() {
        let source = vec!["a"; 500].join(" + ");
        let mut parser =
            Parser::with_options(tokenize(&source).unwrap(), ParseOptions { max_depth: 4 });
        let mut expr = parser.expression().unwrap();

        let mut terms = 1;
        while let Expr::Binary { right, .. } = expr {
            terms += 1;
            expr = *right;
        }
        assert_eq!(terms, 500);
        assert_eq!(parser.cursor.depth(), 0);
    }

    #[test]
    fn inner_nodes_span_their_own_operands() {
        let Expr::Binary { right, .. } = parse("a + b * c") else {
            panic!("expected a binary expression");
        };
        assert_eq!(right.span().start, Span::new(1, 4));
        assert_eq!(right.span().end, Span::new(1, 8));
    }

    #[test]
    fn deep_parentheses_hit_the_depth_limit() {
        let source = format!("{}x{}", "(".repeat(40), ")".repeat(40));
        let mut parser =
            Parser::with_options(tokenize(&source).unwrap(), ParseOptions { max_depth: 16 });
        let err = parser.expression().unwrap_err();
        assert!(matches!(err, ParseError::TooDeep { limit: 16, .. }));
        assert_eq!(parser.cursor.depth(), 0);
    }
}
