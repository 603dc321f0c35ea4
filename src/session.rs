use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::evaluate, parser::core::parse, value::Value,
    },
};

/// One interpreter instance together with its own environment.
///
/// Sessions are independent: bindings made in one are never visible in
/// another. Every call to [`Session::eval`] handles one line of source; an
/// error is returned to the caller and leaves the session usable, with any
/// bindings made before the failure still in place.
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and evaluates one line of source.
    ///
    /// # Errors
    /// `Error::Parse` if the line is not exactly one well-formed expression,
    /// `Error::Runtime` if evaluating it fails.
    ///
    /// # Example
    /// ```
    /// use minilisp::{interpreter::value::Value, session::Session};
    ///
    /// let mut session = Session::new();
    /// session.eval("(define x 10)").unwrap();
    ///
    /// assert_eq!(session.eval("(+ x 5)").unwrap(), Value::Integer(15));
    /// assert!(session.eval("(+ x 5").is_err());
    /// assert_eq!(session.eval("x").unwrap(), Value::Integer(10));
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval(&mut self, source: &str) -> Result<Value, Error> {
        let node = parse(source)?;
        let value = evaluate(&node, &mut self.env)?;
        Ok(value)
    }

    /// The bindings made so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}
