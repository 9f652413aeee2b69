use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Environment, EvalResult, is_truthy},
        value::core::Value,
    },
    util::num::i64_to_u32_checked,
};

impl Environment {
    /// Evaluates a short-circuit logical operation.
    ///
    /// The left operand is always evaluated first. `or` returns the left
    /// value unchanged when it is truthy and only then evaluates the right
    /// operand; `and` returns the left value unchanged when it is falsy and
    /// only then evaluates the right operand. The skipped operand is never
    /// evaluated, so its side conditions (type errors, and so on) cannot
    /// fire.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The selected operand's value, which may be the absent value.
    pub fn eval_logic(&self,
                      op: BinaryOperator,
                      left: &Expr,
                      right: &Expr)
                      -> EvalResult<Option<Value>> {
        let left_value = self.eval_expr(left)?;

        match op {
            BinaryOperator::Or => {
                if is_truthy(left_value.as_ref()) {
                    Ok(left_value)
                } else {
                    self.eval_expr(right)
                }
            },
            BinaryOperator::And => {
                if is_truthy(left_value.as_ref()) {
                    self.eval_expr(right)
                } else {
                    Ok(left_value)
                }
            },
            _ => unreachable!("eval_logic used with a non logical operator"),
        }
    }

    /// Evaluates an arithmetic operation between two present values.
    ///
    /// Division always produces a real result, following IEEE semantics for
    /// a zero divisor. Addition, subtraction and multiplication stay
    /// integral for integer operands, using checked arithmetic, and promote
    /// to real otherwise. Exponentiation is handled by `eval_pow`. Boolean
    /// operands are rejected.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed result.
    ///
    /// # Example
    /// ```
    /// use luma::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Environment::eval_arith(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// // Division always yields a real.
    /// let result = Environment::eval_arith(BinaryOperator::Div, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Real(0.75));
    /// ```
    pub fn eval_arith(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use Value::{Integer, Real};

        match op {
            Div => Ok(Real(left.as_real(line)? / right.as_real(line)?)),

            Pow => Self::eval_pow(left, right, line),

            Add | Sub | Mul => match (left, right) {
                (Integer(a), Integer(b)) => {
                    let result = match op {
                        Add => a.checked_add(*b),
                        Sub => a.checked_sub(*b),
                        Mul => a.checked_mul(*b),
                        _ => unreachable!(),
                    };
                    result.map(Integer).ok_or(RuntimeError::Overflow { line })
                },
                _ => {
                    let left = left.as_real(line)?;
                    let right = right.as_real(line)?;

                    Ok(Real(match op {
                                Add => left + right,
                                Sub => left - right,
                                Mul => left * right,
                                _ => unreachable!(),
                            }))
                },
            },

            BinaryOperator::And | BinaryOperator::Or => {
                unreachable!("short-circuit operators are evaluated lazily")
            },
        }
    }

    /// Evaluates exponentiation.
    ///
    /// An integer base raised to a non-negative integer exponent stays
    /// integral, with overflow checked. Every other combination is computed
    /// as a real power.
    fn eval_pow(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if let (Value::Integer(base), Value::Integer(exponent)) = (left, right)
           && *exponent >= 0
        {
            let exponent = i64_to_u32_checked(*exponent, line)?;
            return base.checked_pow(exponent)
                       .map(Value::Integer)
                       .ok_or(RuntimeError::Overflow { line });
        }

        Ok(Value::Real(left.as_real(line)?.powf(right.as_real(line)?)))
    }
}
