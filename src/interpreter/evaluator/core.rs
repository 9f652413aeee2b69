use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Block, Expr, LiteralValue, Program, Statement},
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`crate::error::RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, crate::error::RuntimeError>;

/// Decides whether a value counts as true in a boolean context.
///
/// A value is truthy unless it is the absent value (`None`) or exactly
/// `false`. Every number, including zero, is truthy.
///
/// # Example
/// ```
/// use luma::interpreter::{evaluator::core::is_truthy, value::core::Value};
///
/// assert!(is_truthy(Some(&Value::Integer(0))));
/// assert!(is_truthy(Some(&Value::Bool(true))));
/// assert!(!is_truthy(Some(&Value::Bool(false))));
/// assert!(!is_truthy(None));
/// ```
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Bool(false)))
}

/// The variable store and execution engine of the interpreter.
///
/// `Environment` maps variable names to runtime values and carries all the
/// state one evaluation run mutates. It is created empty, handed to the
/// evaluator entry points explicitly, and never shared between independent
/// runs — a host embedding several runs uses one `Environment` each, or
/// deliberately reuses one to keep variables alive across inputs.
///
/// A name is present in the store if and only if its last-assigned value
/// was not the absent value: assigning `None` removes the entry, so
/// [`len`](Self::len) always equals the number of live variables.
///
/// # Example
/// ```
/// use luma::interpreter::{evaluator::core::Environment, value::core::Value};
///
/// let mut env = Environment::new();
///
/// env.set("x", Some(Value::Integer(3)));
/// assert_eq!(env.get("x"), Some(&Value::Integer(3)));
///
/// env.set("x", None);
/// assert_eq!(env.get("x"), None);
/// assert_eq!(env.len(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates a new, empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up a variable by name, returning `None` when it is not
    /// defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Stores a value under a name.
    ///
    /// Passing `Some` inserts or overwrites the binding; passing `None`
    /// removes it, keeping the store free of dead entries.
    pub fn set(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.variables.insert(name.to_string(), value);
            },
            None => {
                self.variables.remove(name);
            },
        }
    }

    /// Returns the number of live variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` when no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the live variables in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Evaluates a complete program against this store.
    ///
    /// The program's result is the result of its top-level block.
    ///
    /// # Errors
    /// Propagates any runtime error raised while evaluating.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        self.eval_block(&program.block)
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// Each statement is evaluated in order; the block's result is the last
    /// statement's result. Side effects on the store persist regardless of
    /// which results are kept.
    ///
    /// # Errors
    /// Propagates any runtime error raised by a statement.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        let mut last = None;

        for statement in &block.statements {
            last = self.eval_statement(statement)?;
        }

        Ok(last)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments mutate the store and yield the absent value; `print`
    /// writes to standard output and yields the absent value; conditionals,
    /// loops and expression statements yield their evaluated result; the
    /// empty statement yields the absent value.
    ///
    /// # Errors
    /// Propagates any runtime error raised while evaluating.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval_expr(value)?;
                self.set(name, value);
                Ok(None)
            },
            Statement::If(if_stmt) => self.eval_if(if_stmt),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::Print { expr, .. } => {
                match self.eval_expr(expr)? {
                    Some(value) => println!("{value}"),
                    None => println!("nil"),
                }
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval_expr(expr),
            Statement::NoOp => Ok(None),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: literals, variables,
    /// unary and binary operations, and comparisons. The match is
    /// exhaustive over the closed AST vocabulary, so an unhandled node kind
    /// cannot exist at runtime.
    ///
    /// The absent value propagates: an arithmetic or comparison operand
    /// that evaluates to `None` makes the whole expression `None` instead
    /// of raising an error.
    ///
    /// # Errors
    /// Returns a runtime error for type misuse or overflow.
    ///
    /// # Example
    /// ```
    /// use luma::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new();
    /// let expr = Expr::Literal { value: 7.into(),
    ///                            line:  1, };
    ///
    /// assert_eq!(env.eval_expr(&expr).unwrap(), Some(Value::Integer(7)));
    /// ```
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, .. } => Ok(self.get(name).copied()),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval_expr(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => match op {
                BinaryOperator::And | BinaryOperator::Or => self.eval_logic(*op, left, right),
                _ => {
                    let left = self.eval_expr(left)?;
                    let right = self.eval_expr(right)?;

                    match (left, right) {
                        (Some(left), Some(right)) => {
                            Self::eval_arith(*op, &left, &right, *line).map(Some)
                        },
                        _ => Ok(None),
                    }
                },
            },
            Expr::Comparison { left, op, right, line } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;

                match (left, right) {
                    (Some(left), Some(right)) => {
                        Self::eval_comparison(*op, &left, &right, *line).map(Some)
                    },
                    _ => Ok(None),
                }
            },
        }
    }

    /// Evaluates a literal expression.
    ///
    /// Converts the literal directly into its runtime value; the `nil`
    /// literal becomes the absent value. Literals never produce errors.
    #[must_use]
    pub const fn eval_literal(value: &LiteralValue) -> Option<Value> {
        match value {
            LiteralValue::Integer(n) => Some(Value::Integer(*n)),
            LiteralValue::Real(r) => Some(Value::Real(*r)),
            LiteralValue::Bool(b) => Some(Value::Bool(*b)),
            LiteralValue::Nil => None,
        }
    }
}
