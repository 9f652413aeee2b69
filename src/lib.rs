//! # luma
//!
//! luma is a small interpreter for an imperative scripting language with
//! Lua-like syntax, written in Rust. Source text is lexed into tokens,
//! parsed into an abstract syntax tree by recursive descent, and executed
//! by walking the tree against an explicit variable store.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::SyntaxError,
    interpreter::{evaluator::core::Environment, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Keeps the node vocabulary closed so evaluation can be exhaustive.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised during a run. It
/// standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations for
/// debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// building blocks behind the crate-level entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the evaluator, such as lossless conversions between
/// integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u32`, and `f64` without silent data
///   loss.
pub mod util;

/// Parses source text into a program without executing it.
///
/// Useful for hosts that want to inspect the AST for diagnostics before or
/// instead of running it.
///
/// # Errors
/// Returns a [`SyntaxError`] if the source cannot be tokenized or does not
/// match the grammar.
///
/// # Examples
/// ```
/// use luma::parse_source;
///
/// let program = parse_source("x := 1").unwrap();
/// assert_eq!(program.block.statements.len(), 1);
///
/// assert!(parse_source("x := ").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    Parser::new(source)?.parse()
}

/// Runs a complete script against the given variable store and returns the
/// program's final value.
///
/// The store is mutated in place, so a host can evaluate several sources
/// against the same `Environment` and keep variables alive between them.
/// The returned value is the last statement's result, or `None` when the
/// program ends in a statement with no value (an assignment, say).
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails. The pipeline
/// stops at the first error; no partial results are produced, although
/// assignments already executed remain visible in the store.
///
/// # Examples
/// ```
/// use luma::{evaluate_source, interpreter::{evaluator::core::Environment, value::core::Value}};
///
/// let mut env = Environment::new();
///
/// // Simple program: the store ends up with x = 3.
/// let res = evaluate_source("x := 1 + 2", &mut env);
/// assert!(res.is_ok());
/// assert_eq!(env.get("x"), Some(&Value::Integer(3)));
///
/// // The same store sees the variable in a later run.
/// let res = evaluate_source("x", &mut env).unwrap();
/// assert_eq!(res, Some(Value::Integer(3)));
/// ```
pub fn evaluate_source(source: &str,
                       env: &mut Environment)
                       -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let program = parse_source(source)?;
    let value = env.eval_program(&program)?;

    Ok(value)
}
