use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a variable can hold: integers, reals, and
/// booleans. The absent value is deliberately not a variant; evaluation
/// results are `Option<Value>` and `None` plays that role, so "no value"
/// can never leak into arithmetic unnoticed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64-bit signed).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `~=`, etc.) and by
    /// `not`. Any value can be used as a condition; see the truthiness rule
    /// in the evaluator.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::ExpectedNumber | LiteralTooLarge)`: If not
    ///   numeric or not representable.
    ///
    /// # Example
    /// ```
    /// use luma::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            Self::Bool(_) => Err(RuntimeError::ExpectedNumber { line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
