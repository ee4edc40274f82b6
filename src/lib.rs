//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming
//! language. It lexes source text into tokens, parses them into an AST with
//! a Pratt parser, and evaluates the tree against lexically scoped
//! environments with first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ProgramError,
    interpreter::{
        evaluator::core::eval,
        lexer::Lexer,
        parser::core::Parser,
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// source code as a tree, together with the operator enums and the
/// canonical string formatter every node carries. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression variants for all language constructs.
/// - Renders every node in its canonical, fully parenthesized form.
/// - Exposes `token_literal` accessors for tooling and tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating code. The rendered messages are stable: callers and tests
/// match on them byte for byte.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Renders each error in its contractual message format.
/// - Combines both domains into [`ProgramError`] at the crate boundary.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value model to provide a complete interpreter for Monkey source code.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator and values.
/// - Provides the entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads one line at a time with history and line editing, pretty-prints
/// parser errors, prints evaluated values, and handles the `quit`/`exit`
/// forms and end-of-file.
pub mod repl;
/// General utilities shared across the interpreter.
///
/// Currently numeric helpers for tracking the display precision of double
/// values.
pub mod util;

/// Parses and evaluates `source` against an existing environment.
///
/// This is the building block the REPL uses: the environment persists
/// between calls, so bindings from earlier lines stay visible. The result
/// is the value of the final statement; `None` means the program ran fine
/// but its last statement produced nothing (a `let`, for example).
///
/// # Errors
/// Returns [`ProgramError::Parse`] with every accumulated parser error when
/// the source does not parse (nothing is evaluated in that case), or
/// [`ProgramError::Runtime`] when evaluation stops on a runtime error.
///
/// # Examples
/// ```
/// use monkey::{eval_source, interpreter::value::{core::Value, environment::Environment}};
///
/// let env = Environment::new();
///
/// let result = eval_source("let five = 5; five + 10", &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(15)));
///
/// // The binding survives into the next call.
/// let result = eval_source("five * 2", &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub fn eval_source(source: &str, env: &Env) -> Result<Option<Value>, ProgramError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(ProgramError::Parse(parser.into_errors()));
    }

    eval(&program, env).map_err(ProgramError::Runtime)
}

/// Runs a whole script in a fresh environment.
///
/// With `auto_print` set, the value of the final statement (when there is
/// one) is printed to stdout, which is what the CLI's pipe mode does.
///
/// # Errors
/// Returns an error when parsing or evaluation fails.
///
/// # Examples
/// ```
/// use monkey::run_program;
///
/// // The result is computed and no error occurs.
/// let res = run_program("let result = 2 + 2;", false);
/// assert!(res.is_ok());
///
/// // An intentional error: 'x' is not defined.
/// let res = run_program("let y = x + 1;", false);
/// assert!(res.is_err());
/// ```
pub fn run_program(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::new();
    let result = eval_source(source, &env)?;

    if auto_print && let Some(value) = result {
        println!("{value}");
    }

    Ok(())
}
