/// Core evaluation logic.
///
/// Contains the dispatch over node variants, symbol resolution and the
/// evaluation of operator applications.
pub mod core;

/// The operator table.
///
/// Maps every operator name to its arity and implementation, and checks arity
/// before an operator runs.
pub mod operator;

/// Integer arithmetic operators: `+`, `-`, `*`, `/` and `%`.
pub mod arithmetic;

/// Comparison operators: `>`, `<` and `=`.
pub mod comparison;

/// Special forms that do not evaluate all of their operands up front:
/// `define` and `if`.
pub mod special_form;

/// Operand helpers shared by the operator implementations.
pub mod utils;
