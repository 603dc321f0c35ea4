use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are small and `Copy`; the evaluator moves them around freely and
/// never mutates one after it has been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by the comparison operators and by the `true` / `false`
    /// constants. Used as the condition of `if`, which requires a `Boolean`.
    Boolean(bool),
}

/// The kind of a [`Value`], without its payload.
///
/// Used by type errors to report what an operator wanted and what it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Integer`].
    Integer,
    /// [`Value::Boolean`].
    Boolean,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Converts the value to `i64`, or returns a type error naming `operator`.
    ///
    /// # Example
    /// ```
    /// use minilisp::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_integer("+").unwrap(), 10);
    /// assert!(Value::Boolean(true).as_integer("+").is_err());
    /// ```
    pub fn as_integer(&self, operator: &str) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Boolean(_) => Err(RuntimeError::TypeError { operator: operator.to_string(),
                                                              expected: ValueKind::Integer,
                                                              actual:   self.kind(), }),
        }
    }

    /// Converts the value to `bool`, or returns a type error naming
    /// `operator`.
    ///
    /// Used for the condition of `if`.
    pub fn as_boolean(&self, operator: &str) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(_) => Err(RuntimeError::TypeError { operator: operator.to_string(),
                                                              expected: ValueKind::Boolean,
                                                              actual:   self.kind(), }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
