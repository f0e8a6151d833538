/*
 * ==========================================================================
 * PSEUDO - Structured-English Pseudocode Front End
 * ==========================================================================
 *
 * File:     tests/cli.rs
 * Purpose:  Command-line behaviour: output modes, diagnostics, exit codes.
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
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const HELLO: &str = "PROGRAM hello\nBEGIN\nname = \"world\"\nOUTPUT \"hello \" + name\nEND\n";

fn pseudo() -> Command {
    Command::cargo_bin("pseudo").unwrap()
}

fn temp_source(file: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pseudo-cli-{}-{file}", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn pretty_prints_from_stdin_by_default() {
    pseudo()
        .write_stdin(HELLO)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PROGRAM hello\nBEGIN\n"))
        .stdout(predicate::str::contains("    name <- \"world\"\n"))
        .stdout(predicate::str::contains("END PROGRAM"));
}

#[test]
fn reads_a_file_argument() {
    let path = temp_source("hello.pseudo", HELLO);
    pseudo()
        .arg(&path)
        .args(["--emit", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"hello\""))
        .stdout(predicate::str::contains("\"node\": \"io\""));
    fs::remove_file(path).ok();
}

#[test]
fn emits_tokens() {
    pseudo()
        .args(["--emit", "tokens"])
        .write_stdin("x <- 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1\tidentifier\t\"x\""))
        .stdout(predicate::str::contains("1:3\toperator\t\"<-\""));
}

#[test]
fn emits_debug_tree() {
    pseudo()
        .args(["--emit", "debug"])
        .write_stdin(HELLO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Program {"));
}

#[test]
fn syntax_errors_exit_nonzero_with_a_diagnostic() {
    let path = temp_source("bad.pseudo", "PROGRAM bad\nBEGIN\n    INPUT 5\nEND\n");
    pseudo()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[P0001]: expected variable reference"))
        .stderr(predicate::str::contains("bad.pseudo:3:11"))
        .stderr(predicate::str::contains("help:"));
    fs::remove_file(path).ok();
}

#[test]
fn lexical_errors_name_stdin() {
    pseudo()
        .write_stdin("PROGRAM p\nBEGIN\nOUTPUT \"open\nEND\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[L0001]"))
        .stderr(predicate::str::contains("<stdin>:3:8"));
}

#[test]
fn max_depth_flag_limits_nesting() {
    let source = format!("PROGRAM p\nBEGIN\nx = {}1{}\nEND\n", "(".repeat(20), ")".repeat(20));
    pseudo()
        .args(["--max-depth", "8"])
        .write_stdin(source.clone())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nesting too deep (limit is 8)"));

    pseudo().write_stdin(source).assert().success();
}

#[test]
fn missing_file_is_reported() {
    pseudo()
        .arg("definitely/not/here.pseudo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read definitely/not/here.pseudo"));
}
