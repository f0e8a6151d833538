/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     lexer/operators.rs
 * Purpose:  Lexical category tables: which spellings belong to which
 *           operator family.
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

//! Operator families are plain data. The expression grammar groups them
//! into precedence levels; the tokenizer uses them to tell word operators
//! (`and`, `neq`) apart from identifiers.

pub const NEG_OPERATORS: &[&str] = &["-"];
pub const PLUS_OPERATORS: &[&str] = &["+"];
pub const NOT_OPERATORS: &[&str] = &["!", "not", "NOT"];

pub const ADD_OPERATORS: &[&str] = &["+"];
pub const SUB_OPERATORS: &[&str] = &["-"];
pub const MUL_OPERATORS: &[&str] = &["*"];
pub const DIV_OPERATORS: &[&str] = &["/"];

pub const EQ_OPERATORS: &[&str] = &["=", "==", "eq", "equals"];
pub const NEQ_OPERATORS: &[&str] = &["!=", "<>", "neq"];

pub const LT_OPERATORS: &[&str] = &["<", "lt"];
pub const GT_OPERATORS: &[&str] = &[">", "gt"];
pub const LE_OPERATORS: &[&str] = &["<=", "le"];
pub const GE_OPERATORS: &[&str] = &[">=", "ge"];

pub const BINARY_AND_OPERATORS: &[&str] = &["&"];
pub const BINARY_XOR_OPERATORS: &[&str] = &["^"];
pub const BINARY_OR_OPERATORS: &[&str] = &["|"];

pub const AND_OPERATORS: &[&str] = &["&&", "and", "AND"];
pub const OR_OPERATORS: &[&str] = &["||", "or", "OR"];

pub const ASSIGN_OPERATORS: &[&str] = &["=", "<-", ":="];

/// A set of operator families that share one precedence level.
pub type OperatorSet = &'static [&'static [&'static str]];

pub const UNARY: OperatorSet = &[NEG_OPERATORS, PLUS_OPERATORS, NOT_OPERATORS];
pub const MULTIPLICATIVE: OperatorSet = &[MUL_OPERATORS, DIV_OPERATORS];
pub const ADDITIVE: OperatorSet = &[ADD_OPERATORS, SUB_OPERATORS];
pub const RELATIONAL: OperatorSet = &[LT_OPERATORS, GT_OPERATORS, LE_OPERATORS, GE_OPERATORS];
pub const EQUALITY: OperatorSet = &[EQ_OPERATORS, NEQ_OPERATORS];
pub const BITWISE_AND: OperatorSet = &[BINARY_AND_OPERATORS];
pub const BITWISE_XOR: OperatorSet = &[BINARY_XOR_OPERATORS];
pub const BITWISE_OR: OperatorSet = &[BINARY_OR_OPERATORS];
pub const LOGICAL_AND: OperatorSet = &[AND_OPERATORS];
pub const LOGICAL_OR: OperatorSet = &[OR_OPERATORS];

const ALL: &[OperatorSet] = &[
    UNARY,
    MULTIPLICATIVE,
    ADDITIVE,
    RELATIONAL,
    EQUALITY,
    BITWISE_AND,
    BITWISE_XOR,
    BITWISE_OR,
    LOGICAL_AND,
    LOGICAL_OR,
    &[ASSIGN_OPERATORS],
];

/// True when `op` is spelled like any family in `set`.
pub fn contains(set: OperatorSet, op: &str) -> bool {
    set.iter().any(|family| family.contains(&op))
}

pub fn is_unary(op: &str) -> bool {
    contains(UNARY, op)
}

pub fn is_assignment(op: &str) -> bool {
    ASSIGN_OPERATORS.contains(&op)
}

/// True for alphabetic operator spellings (`and`, `neq`, `NOT`).
///
/// The tokenizer classifies these as operators instead of identifiers.
pub fn is_word_operator(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphabetic()) && ALL.iter().any(|set| contains(set, word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_group_into_levels() {
        assert!(contains(EQUALITY, "<>"));
        assert!(contains(EQUALITY, "equals"));
        assert!(contains(RELATIONAL, "ge"));
        assert!(!contains(RELATIONAL, "="));
        assert!(contains(LOGICAL_OR, "OR"));
        assert!(!contains(LOGICAL_OR, "|"));
    }

    #[test]
    fn recognises_word_operators() {
        assert!(is_word_operator("and"));
        assert!(is_word_operator("NOT"));
        assert!(is_word_operator("neq"));
        assert!(!is_word_operator("total"));
        assert!(!is_word_operator("&&"));
    }

    #[test]
    fn assignment_spellings() {
        for op in ["=", "<-", ":="] {
            assert!(is_assignment(op), "{op} should assign");
        }
        assert!(!is_assignment("=="));
    }
}
