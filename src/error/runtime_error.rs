use crate::interpreter::{evaluator::operator::Arity, value::ValueKind};

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the structured details of the failure so callers can
/// branch on the kind without inspecting the message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A symbol was evaluated that has no binding in the environment.
    #[error("undefined symbol '{name}'")]
    UndefinedSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// The head of a list names no known operator.
    #[error("unknown operator '{name}'")]
    UnknownOperator {
        /// The name in head position.
        name: String,
    },
    /// An operator received the wrong number of operands.
    #[error("operator '{operator}' expects {expected} operand(s), but got {actual}")]
    ArityError {
        /// The operator name.
        operator: String,
        /// The accepted operand count.
        expected: Arity,
        /// The supplied operand count.
        actual:   usize,
    },
    /// An operand evaluated to a value of the wrong kind.
    #[error("operator '{operator}' expects {expected}, but got {actual}")]
    TypeError {
        /// The operator name.
        operator: String,
        /// The kind the operator requires.
        expected: ValueKind,
        /// The kind that was actually supplied.
        actual:   ValueKind,
    },
    /// A divisor after the first operand of `/` was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The right operand of `%` was zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// The expression has a shape that cannot be evaluated at all.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        /// Details about why the expression is invalid.
        reason: String,
    },
    /// Integer arithmetic overflowed.
    #[error("integer overflow in operator '{operator}'")]
    Overflow {
        /// The operator name.
        operator: String,
    },
}

impl RuntimeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidExpression { reason: reason.into() }
    }
}
