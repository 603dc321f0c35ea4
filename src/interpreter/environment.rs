use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Stores the variable bindings of one interpreter session.
///
/// There is a single flat table: no nested scopes, no shadowing and no
/// removal. The only mutation is [`Environment::define`], which inserts or
/// overwrites. Each session owns its own `Environment`, so sessions never see
/// each other's bindings.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    symbols: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedSymbol` if nothing is bound to `name`.
    ///
    /// # Example
    /// ```
    /// use minilisp::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.lookup("x").is_err());
    ///
    /// env.define("x", Value::Integer(10));
    /// assert_eq!(env.lookup("x").unwrap(), Value::Integer(10));
    /// ```
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string() })
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(old) = self.symbols.insert(name.to_string(), value) {
            tracing::debug!(name, %old, new = %value, "rebound symbol");
        } else {
            tracing::debug!(name, %value, "defined symbol");
        }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).copied()
    }

    /// Checks whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Checks whether the environment has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings = self.symbols
                               .iter()
                               .map(|(name, value)| (name.as_str(), *value))
                               .collect::<Vec<_>>();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
