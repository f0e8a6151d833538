/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
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

use std::fmt::Write;

use crate::error::Error;
use crate::span::Span;

/// Renders compiler-style diagnostics for lexical and syntax errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Marks the error position with a caret (`^`)
/// - Optionally shows a follow-up hint
///
/// The layout follows `rustc`, without color.
pub struct DiagnosticPrinter {
    /// Full source text the error positions refer to.
    source: String,

    /// Display name of the input (`average.pseudo`, `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats `error` as a multi-line diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[P0001]: expected variable reference
    ///   --> average.pseudo:3:11
    ///    |
    ///  3 |     INPUT 5
    ///    |           ^
    ///
    /// help: INPUT reads into a variable, e.g. INPUT total
    /// ```
    pub fn render(&self, error: &Error) -> String {
        let Span { line, column } = error.span();

        // Lines are 1-indexed in spans; `saturating_sub` guards line 0.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Some(help) = error.help() {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &Error) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source;

    #[test]
    fn points_at_the_offending_token() {
        let source = "PROGRAM p\nBEGIN\n    INPUT 5\nEND\n";
        let err = parse_source(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("average.pseudo", source).render(&err);

        assert_eq!(
            rendered,
            "error[P0001]: expected variable reference\n\
             \x20 --> average.pseudo:3:11\n\
             \x20  |\n\
             \x20 3 |     INPUT 5\n\
             \x20  |           ^\n\
             \n\
             help: INPUT reads into a variable, e.g. INPUT total\n"
        );
    }

    #[test]
    fn lexical_errors_render_too() {
        let source = "PROGRAM p\nBEGIN\nOUTPUT \"open\nEND\n";
        let err = parse_source(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("<stdin>", source).render(&err);

        assert!(rendered.starts_with("error[L0001]: unterminated string literal\n"));
        assert!(rendered.contains("<stdin>:3:8"));
    }

    #[test]
    fn errors_without_help_have_no_help_line() {
        let source = "PROGRAM p\nBEGIN\nFOR i = 1 10\nNEXT\nEND\n";
        let err = parse_source(source).unwrap_err();
        let rendered = DiagnosticPrinter::new("loop.pseudo", source).render(&err);

        assert!(rendered.starts_with("error[P0001]: expected TO, got number '10'"));
        assert!(!rendered.contains("help:"));
    }
}
