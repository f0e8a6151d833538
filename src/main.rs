/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line front end: parse a file or stdin and emit the tree.
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

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use pseudo::{DiagnosticPrinter, ParseOptions};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "pseudo",
    version,
    about = "Parse structured-English pseudocode and print its syntax tree."
)]
struct Args {
    /// Source file to parse. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// What to print on success.
    #[arg(long, value_enum, default_value_t = Emit::Pretty)]
    emit: Emit,

    /// Deepest allowed block and expression nesting.
    #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Rust debug form of the syntax tree.
    Debug,
    /// Syntax tree as JSON.
    Json,
    /// Canonical pseudocode re-rendered from the tree.
    Pretty,
    /// Token stream, one token per line.
    Tokens,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {name}: {source}")]
    Read { name: String, source: io::Error },

    #[error(transparent)]
    Source(#[from] pseudo::Error),

    #[error("cannot serialize syntax tree: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();

    let name = args
        .file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let source = match read_source(args.file.as_ref(), &name) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &source) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliError::Source(err)) => {
            DiagnosticPrinter::new(name, source).print(&err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_source(file: Option<&PathBuf>, name: &str) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        name: name.to_string(),
        source,
    };

    match file {
        Some(path) => fs::read_to_string(path).map_err(read_err),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).map_err(read_err)?;
            Ok(source)
        }
    }
}

fn run(args: &Args, source: &str) -> Result<String, CliError> {
    if args.emit == Emit::Tokens {
        let tokens = pseudo::tokenize(source).map_err(pseudo::Error::from)?;
        let mut out = String::new();
        for token in &tokens {
            out.push_str(&format!("{}\t{}\t{:?}\n", token.span, token.kind, token.lexeme));
        }
        return Ok(out);
    }

    let options = ParseOptions {
        max_depth: args.max_depth,
    };
    let program = pseudo::parse_source_with(source, options)?;

    Ok(match args.emit {
        Emit::Debug => format!("{program:#?}\n"),
        Emit::Json => serde_json::to_string_pretty(&program)? + "\n",
        Emit::Pretty | Emit::Tokens => format!("{program}\n"),
    })
}
