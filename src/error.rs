/// Parsing errors.
///
/// Defines the errors raised while tokenizing and parsing one line of source:
/// unbalanced parentheses, stray tokens and out-of-range literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors raised during evaluation: unknown symbols and
/// operators, arity and type mismatches, and arithmetic failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running one line of source through the
/// interpreter.
///
/// All of them are recoverable: a session reports the error and stays usable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The expression was parsed but failed to evaluate.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Failure while running a script of one expression per line.
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// A line failed to parse or evaluate.
    #[error("Error on line {line}: {source}")]
    Line {
        /// 1-based number of the failing line.
        line:   usize,
        /// What went wrong on that line.
        source: Error,
    },
    /// Reading the script or writing its output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
