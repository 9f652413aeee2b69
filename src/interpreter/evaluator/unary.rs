use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult, is_truthy},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on an already-evaluated operand.
    ///
    /// Supported operators:
    /// - `Plus`: identity; the operand is returned unchanged, absent or not.
    /// - `Negate`: numeric negation for integers and reals. The absent value
    ///   propagates; a boolean operand is an error.
    /// - `Not`: applies the truthiness rule to the operand and yields the
    ///   logical complement, so `not nil` is `true`.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: The evaluated operand, possibly absent.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use luma::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Environment::eval_unary(UnaryOperator::Negate, Some(Value::Integer(5)), 1).unwrap();
    /// assert_eq!(v, Some(Value::Integer(-5)));
    ///
    /// // Logical not treats the absent value as false
    /// let v = Environment::eval_unary(UnaryOperator::Not, None, 1).unwrap();
    /// assert_eq!(v, Some(Value::Bool(true)));
    /// ```
    pub fn eval_unary(op: UnaryOperator,
                      value: Option<Value>,
                      line: usize)
                      -> EvalResult<Option<Value>> {
        match op {
            UnaryOperator::Plus => Ok(value),

            UnaryOperator::Not => Ok(Some(Value::Bool(!is_truthy(value.as_ref())))),

            UnaryOperator::Negate => match value {
                None => Ok(None),
                Some(Value::Integer(n)) => n.checked_neg()
                                            .map(|negated| Some(Value::Integer(negated)))
                                            .ok_or(RuntimeError::Overflow { line }),
                Some(Value::Real(r)) => Ok(Some(Value::Real(-r))),
                Some(Value::Bool(_)) => Err(RuntimeError::ExpectedNumber { line }),
            },
        }
    }
}
