/// The environment module holds the variable bindings of a session.
///
/// A single flat name-to-value table, created empty and only ever extended or
/// overwritten by `define`.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree recursively, resolves symbols, dispatches list
/// applications through a fixed operator table, and reports runtime errors
/// such as division by zero, arity mismatches or type mismatches.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variable definition and conditional evaluation.
/// - Validates operand counts and operand kinds for each operator.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// Splits raw text into parentheses and atoms, dropping whitespace. This is
/// the first stage of interpretation and never fails.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token stream. It classifies atoms as
/// integer literals or symbols and reports unbalanced input as a
/// [`crate::error::ParseError`] instead of running past the end of the tokens.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either 64 bit integers or booleans. The module also provides
/// the checked conversions operators use to demand a particular kind.
pub mod value;
