use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::core::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result to the
/// final boolean value.
///
/// Used by `eval_comparison` to invert the result for the negated variant
/// (`~=`). This function does not perform any numeric work itself.
#[must_use]
pub fn equality_op_result(op: ComparisonOperator, is_equal: bool) -> bool {
    match op {
        ComparisonOperator::Equal => is_equal,
        ComparisonOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Environment {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Equality compares integers exactly, booleans directly, and mixed
    /// numeric operands after promotion to real; values of different
    /// categories (a number and a boolean) are never equal. Ordering is
    /// defined for numbers only, again exact between integers and promoted
    /// otherwise; ordering a boolean is a type error.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use luma::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let a = Value::Real(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let result = Environment::eval_comparison(ComparisonOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        Ok(Value::Bool(match op {
                           Equal | NotEqual => {
                               let equality = values_equal(left, right, line)?;
                               equality_op_result(op, equality)
                           },

                           Less | Greater | LessEqual | GreaterEqual => {
                               if matches!(left, Value::Bool(_)) || matches!(right, Value::Bool(_))
                               {
                                   return Err(RuntimeError::TypeError { details: format!("Cannot order {left} and {right}"),
                                                                        line });
                               }

                               if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
                                   match op {
                                       Less => a < b,
                                       Greater => a > b,
                                       LessEqual => a <= b,
                                       GreaterEqual => a >= b,
                                       _ => unreachable!(),
                                   }
                               } else {
                                   let left = left.as_real(line)?;
                                   let right = right.as_real(line)?;

                                   match op {
                                       Less => left < right,
                                       Greater => left > right,
                                       LessEqual => left <= right,
                                       GreaterEqual => left >= right,
                                       _ => unreachable!(),
                                   }
                               }
                           },
                       }))
    }
}

/// Structural equality between two runtime values.
///
/// Integers compare exactly, booleans compare directly, and mixed numeric
/// operands are promoted to real first. A number and a boolean are never
/// equal.
fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Bool(_), _) | (_, Value::Bool(_)) => Ok(false),
        _ => Ok(left.as_real(line)? == right.as_real(line)?),
    }
}
