//! # minilisp
//!
//! minilisp is a small Lisp-like expression interpreter written in Rust.
//! It tokenizes and parses one parenthesised expression at a time and
//! evaluates it with a tree-walking evaluator over integers and booleans,
//! keeping `define`d variables in a per-session environment.

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

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents one expression as a
/// tree: integer literals, symbols and lists. The AST is built by the parser
/// and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while parsing or
/// evaluating a line of source, each carrying structured details so callers
/// can branch on the kind of failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Combines them into a single session-level [`error::Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Line-oriented read-evaluate-print loop over any reader and writer.
pub mod repl;
/// An interpreter session owning its own environment.
pub mod session;

use crate::{error::Error, interpreter::value::Value, session::Session};

/// Evaluates a single expression in a fresh session.
///
/// Bindings made by the expression are discarded afterwards. Use
/// [`Session`] to keep definitions between expressions.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minilisp::{eval, interpreter::value::Value};
///
/// assert_eq!(eval("(+ 1 (* 2 3))").unwrap(), Value::Integer(7));
/// assert_eq!(eval("(if (> 10 5) true false)").unwrap(), Value::Boolean(true));
///
/// // Unknown variable.
/// assert!(eval("(+ y 1)").is_err());
/// ```
pub fn eval(source: &str) -> Result<Value, Error> {
    Session::new().eval(source)
}
