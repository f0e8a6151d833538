/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Program structure, statement lists and every statement form.
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

use crate::ast::{Assignment, Program, Stmt, VariableRef};
use crate::error::ParseResult;
use crate::lexer::operators;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::span::SourceSpan;

/// Optional noise words between a condition and its block.
const BLOCK_OPENERS: &[&str] = &["THEN", "DO"];

const IO_KEYWORDS: &[&str] = &["INPUT", "OUTPUT", "PRINT"];

type StatementRule = fn(&mut Parser) -> ParseResult<Option<Stmt>>;

/// Tried in order; the first rule returning a node wins.
const STATEMENT_RULES: [StatementRule; 5] = [
    Parser::assignment,
    Parser::selection_statement,
    Parser::iteration_statement,
    Parser::jump_statement,
    Parser::io_statement,
];

impl Parser {
    /// Parses the whole `PROGRAM name BEGIN ... END` frame.
    ///
    /// # Grammar
    /// ```text
    /// program → PROGRAM IDENTIFIER EOL* BEGIN statement_list END [KEYWORD]
    /// ```
    pub fn pseudo_program(&mut self) -> ParseResult<Program> {
        self.cursor.skip_line_ends();
        let start = self.cursor.position();

        self.consume_keyword("PROGRAM")?;

        let name = self.ready_context(|p| {
            let token = p.cursor.advance();
            if token.kind == TokenKind::Identifier {
                Ok(token.lexeme)
            } else {
                Err(p.expected_found("program name", token))
            }
        })?;

        self.cursor.skip_line_ends();
        self.consume_keyword("BEGIN")?;

        let body = self.statement_list(&[], true)?;

        Ok(Program {
            name,
            body,
            span: self.cursor.span_since(start),
        })
    }

    /// Parses statements until `END` or one of `end_keywords`.
    ///
    /// With `consume_end` the terminator is eaten, and so is a keyword
    /// qualifier directly after `END` (`END IF`, `END WHILE`, ...).
    /// Otherwise the terminator is left for the caller to inspect.
    ///
    /// An empty list is valid. Running into anything that is neither a
    /// terminator nor a statement, end of input included, is an error.
    pub fn statement_list(
        &mut self,
        end_keywords: &[&str],
        consume_end: bool,
    ) -> ParseResult<Vec<Stmt>> {
        self.nest(|p| {
            let mut statements = Vec::new();

            while !p.at_list_end(end_keywords, consume_end) {
                let statement = p.ready_context(|p| match p.statement()? {
                    Some(statement) => Ok(statement),
                    None => Err(p.expected_found("statement", p.cursor.peek().clone())),
                })?;
                statements.push(statement);
            }

            Ok(statements)
        })
    }

    fn at_list_end(&mut self, end_keywords: &[&str], consume_end: bool) -> bool {
        self.cursor.skip_line_ends();
        let token = self.cursor.peek();

        if token.is_keyword("END") {
            if consume_end {
                self.cursor.advance();
                if self.cursor.peek().kind == TokenKind::Keyword {
                    self.cursor.advance();
                }
            }
            return true;
        }

        if token.kind == TokenKind::Keyword && end_keywords.contains(&token.lexeme.as_str()) {
            if consume_end {
                self.cursor.advance();
            }
            return true;
        }

        false
    }

    /// Parses one statement and the line end that closes it.
    ///
    /// Returns `Ok(None)` without consuming anything but blank lines when
    /// no statement form starts here.
    pub fn statement(&mut self) -> ParseResult<Option<Stmt>> {
        self.cursor.skip_line_ends();

        for rule in STATEMENT_RULES {
            let Some(statement) = rule(self)? else {
                continue;
            };

            self.ready_context(|p| {
                let token = p.cursor.advance();
                if token.kind == TokenKind::Eol {
                    Ok(())
                } else {
                    Err(p.expected_found("end of statement", token))
                }
            })?;

            return Ok(Some(statement));
        }

        Ok(None)
    }

    fn assignment(&mut self) -> ParseResult<Option<Stmt>> {
        Ok(self.assignment_statement()?.map(Stmt::Assign))
    }

    /// IF cond [THEN|DO] list [ELSE list] END [IF]
    pub fn selection_statement(&mut self) -> ParseResult<Option<Stmt>> {
        if !self.check_keyword("IF") {
            return Ok(None);
        }
        let start = self.cursor.position();
        self.cursor.advance();

        let condition = self.expression()?;
        self.match_any_keyword(BLOCK_OPENERS);

        let then_branch = self.statement_list(&["ELSE"], false)?;

        // the list above only stops at ELSE or END
        let else_branch = if self.match_keyword("ELSE") {
            self.statement_list(&[], true)?
        } else {
            self.consume_keyword("END")?;
            self.match_keyword("IF");
            Vec::new()
        };

        Ok(Some(Stmt::If {
            condition,
            then_branch,
            else_branch,
            span: self.cursor.span_since(start),
        }))
    }

    /// WHILE cond [THEN|DO] list REPEAT
    /// FOR assignment TO expr [THEN|DO] list NEXT
    ///
    /// Either loop may also be closed by `END` with an optional qualifier.
    pub fn iteration_statement(&mut self) -> ParseResult<Option<Stmt>> {
        let start = self.cursor.position();

        if self.match_keyword("WHILE") {
            let condition = self.expression()?;
            self.match_any_keyword(BLOCK_OPENERS);
            let body = self.statement_list(&["REPEAT"], true)?;

            return Ok(Some(Stmt::While {
                condition,
                body,
                span: self.cursor.span_since(start),
            }));
        }

        if self.match_keyword("FOR") {
            // no line end between the initializer and TO
            let init = self.ready_context(|p| match p.assignment_statement()? {
                Some(init) => Ok(init),
                None => Err(p.expected_found("assignment", p.cursor.peek().clone())),
            })?;

            self.consume_keyword("TO")?;
            let bound = self.expression()?;
            self.match_any_keyword(BLOCK_OPENERS);
            let body = self.statement_list(&["NEXT"], true)?;

            return Ok(Some(Stmt::For {
                init,
                bound,
                body,
                span: self.cursor.span_since(start),
            }));
        }

        Ok(None)
    }

    /// Reserved for BREAK / CONTINUE / RETURN. Never matches.
    pub fn jump_statement(&mut self) -> ParseResult<Option<Stmt>> {
        Ok(None)
    }

    /// INPUT variable | OUTPUT expr | PRINT expr
    pub fn io_statement(&mut self) -> ParseResult<Option<Stmt>> {
        let token = self.cursor.peek();
        if !IO_KEYWORDS.iter().any(|kw| token.is_keyword(kw)) {
            return Ok(None);
        }
        let start = self.cursor.position();
        let keyword = self.cursor.advance();

        let operand = if keyword.is_keyword("INPUT") {
            self.ready_context(|p| {
                let operand = p.expression()?;
                if operand.as_variable().is_some() {
                    Ok(operand)
                } else {
                    Err(p.expected("variable reference"))
                }
            })?
        } else {
            self.expression()?
        };

        Ok(Some(Stmt::Io {
            keyword,
            operand,
            span: self.cursor.span_since(start),
        }))
    }

    /// IDENTIFIER ( = | <- | := ) expr
    ///
    /// An identifier at statement start commits to an assignment; anything
    /// other than an assignment operator after it is an error.
    pub fn assignment_statement(&mut self) -> ParseResult<Option<Assignment>> {
        if self.cursor.peek().kind != TokenKind::Identifier {
            return Ok(None);
        }
        let start = self.cursor.position();
        let name = self.cursor.advance();

        self.ready_context(|p| {
            let token = p.cursor.advance();
            if token.kind == TokenKind::Operator && operators::is_assignment(&token.lexeme) {
                Ok(())
            } else {
                Err(p.expected_found("assignment operator", token))
            }
        })?;

        let value = self.expression()?;

        Ok(Some(Assignment {
            target: VariableRef {
                name: name.lexeme,
                span: SourceSpan::point(name.span),
            },
            value,
            span: self.cursor.span_since(start),
        }))
    }
}
