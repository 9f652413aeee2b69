use crate::{
    ast::{Block, ElseBranch, Expr, IfStmt},
    interpreter::{
        evaluator::core::{Environment, EvalResult, is_truthy},
        value::core::Value,
    },
};

impl Environment {
    /// Evaluates an `if`/`elseif`/`else` conditional.
    ///
    /// The condition is tested under the truthiness rule. When it holds,
    /// the `then` block's result is returned; otherwise evaluation moves to
    /// the else position, which is either a final block or a chained
    /// conditional produced by an `elseif` clause. With no else branch the
    /// result is the absent value. Exactly one branch is ever evaluated.
    ///
    /// # Errors
    /// Propagates any runtime error from the condition or the taken branch.
    pub fn eval_if(&mut self, if_stmt: &IfStmt) -> EvalResult<Option<Value>> {
        let condition = self.eval_expr(&if_stmt.condition)?;

        if is_truthy(condition.as_ref()) {
            return self.eval_block(&if_stmt.then_block);
        }

        match &if_stmt.else_branch {
            Some(ElseBranch::Block(block)) => self.eval_block(block),
            Some(ElseBranch::If(nested)) => self.eval_if(nested),
            None => Ok(None),
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration under the
    /// truthiness rule; while it holds, the body runs and its result is
    /// retained. The loop's result is the final iteration's body result, or
    /// the absent value if the body never ran. There is no iteration cap: a
    /// loop whose condition never turns falsy runs indefinitely.
    ///
    /// # Errors
    /// Propagates any runtime error from the condition or the body.
    pub fn eval_while(&mut self, condition: &Expr, body: &Block) -> EvalResult<Option<Value>> {
        let mut last = None;

        loop {
            let test = self.eval_expr(condition)?;
            if !is_truthy(test.as_ref()) {
                break;
            }

            last = self.eval_block(body)?;
        }

        Ok(last)
    }
}
