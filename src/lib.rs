//! # minicalc
//!
//! minicalc is a small calculator language written in Rust.
//! It lexes, parses, and evaluates arithmetic expressions with variable
//! assignment, keeping variables alive across statements within one session.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::AstNode,
    error::{Diagnostic, ParseError},
    interpreter::{evaluator::Interpreter, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `AstNode` enum and the `BinaryOperator` type
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and walked read-only by the evaluator.
///
/// # Responsibilities
/// - Defines the four node shapes of the language: numbers, variables,
///   binary operations, and assignments.
/// - Attaches source positions to AST nodes for error reporting.
/// - Provides an indented tree rendering for inspection.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module separates the two severities the language distinguishes:
/// statement-fatal parse errors, returned as `Err` values, and recoverable
/// diagnostics, collected in sinks while the operation that raised them
/// completes normally.
///
/// # Responsibilities
/// - Defines the `ParseError` enum for grammar violations.
/// - Defines the `Diagnostic` enum for skipped characters, undefined
///   variables, and division by zero.
/// - Attaches source positions and human-readable messages to both.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from source text to numeric results.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides the types callers drive directly: `Lexer`, `Parser`, and
///   `Interpreter`.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The outcome of running one buffer of source text.
#[derive(Debug)]
pub struct Evaluation {
    /// The value of the last statement, or `None` for an empty buffer.
    pub value:       Option<f64>,
    /// Every diagnostic the lexer and the interpreter raised along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses every statement in `source` and returns the syntax trees.
///
/// Statements are separated by optional `;` tokens and parsed until the end
/// of the buffer. Nothing is evaluated.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; statements parsed before it
/// are discarded.
///
/// # Examples
/// ```
/// use minicalc::parse;
///
/// let statements = parse("x = 2; x * 3").unwrap();
/// assert_eq!(statements.len(), 2);
///
/// assert!(parse("2 + * 3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<AstNode>, ParseError> {
    let mut parser = Parser::new(source);
    let mut statements = Vec::new();

    while !parser.at_end() {
        statements.push(parser.parse_statement()?);
    }

    Ok(statements)
}

/// Parses and evaluates every statement in `source` against `interpreter`.
///
/// The buffer is parsed completely before anything is evaluated, so a parse
/// error leaves the interpreter untouched. On success the returned
/// [`Evaluation`] carries the value of the last statement along with all
/// diagnostics raised by the lexer and the evaluator; recoverable conditions
/// (skipped characters, undefined variables, division by zero) never fail
/// the run.
///
/// # Errors
/// Returns a [`ParseError`] if any statement in the buffer violates the
/// grammar. The same interpreter stays valid for later calls.
///
/// # Examples
/// ```
/// use minicalc::{interpreter::evaluator::Interpreter, run};
///
/// let mut interpreter = Interpreter::new();
///
/// // Assignment yields the assigned value and persists it.
/// let result = run("x = 7", &mut interpreter).unwrap();
/// assert_eq!(result.value, Some(7.0));
///
/// let result = run("x + 1", &mut interpreter).unwrap();
/// assert_eq!(result.value, Some(8.0));
///
/// // Division by zero substitutes 0.0 and reports a diagnostic.
/// let result = run("5 / 0", &mut interpreter).unwrap();
/// assert_eq!(result.value, Some(0.0));
/// assert_eq!(result.diagnostics.len(), 1);
/// ```
pub fn run(source: &str, interpreter: &mut Interpreter) -> Result<Evaluation, ParseError> {
    let mut parser = Parser::new(source);
    let mut statements = Vec::new();

    while !parser.at_end() {
        statements.push(parser.parse_statement()?);
    }

    let mut diagnostics = parser.take_diagnostics();

    let mut value = None;
    for statement in &statements {
        value = Some(interpreter.evaluate(statement));
    }
    diagnostics.extend(interpreter.take_diagnostics());

    Ok(Evaluation { value, diagnostics })
}
