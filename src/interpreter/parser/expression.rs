use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, the comparison, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := comparison`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.comparison()
    }

    /// Parses an optional comparison.
    ///
    /// Grammar: `comparison := arith (comp_op arith)?`
    ///
    /// The comparison layer is non-associative: at most one operator from
    /// `==`, `~=`, `<`, `<=`, `>`, `>=` may appear, and chaining requires
    /// parentheses.
    fn comparison(&mut self) -> ParseResult<Expr> {
        let left = self.arith()?;

        let Some(op) = comparison_operator(&self.current.kind) else {
            return Ok(left);
        };

        let op_token = self.bump()?;
        let right = self.arith()?;

        Ok(Expr::Comparison { left:  Box::new(left),
                              op,
                              right: Box::new(right),
                              line:  op_token.line, })
    }

    /// Parses an additive expression with an optional logical tail.
    ///
    /// Grammar: `arith := term (("+" | "-") term)* (("and" | "or") arith)?`
    ///
    /// The additive operators are left-associative via iteration, while the
    /// logical operators are right-associative via recursion into another
    /// full `arith`.
    fn arith(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Sub,
                _ => break,
            };

            let op_token = self.bump()?;
            let right = self.term()?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line:  op_token.line, };
        }

        let op = match self.current.kind {
            TokenKind::And => BinaryOperator::And,
            TokenKind::Or => BinaryOperator::Or,
            _ => return Ok(left),
        };

        let op_token = self.bump()?;
        let right = self.arith()?;

        Ok(Expr::BinaryOp { left:  Box::new(left),
                            op,
                            right: Box::new(right),
                            line:  op_token.line, })
    }

    /// Parses a multiplicative expression.
    ///
    /// Grammar: `term := power (("*" | "/") power)*`
    ///
    /// Both operators are left-associative.
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.power()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinaryOperator::Mul,
                TokenKind::Slash => BinaryOperator::Div,
                _ => break,
            };

            let op_token = self.bump()?;
            let right = self.power()?;

            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line:  op_token.line, };
        }

        Ok(left)
    }

    /// Parses an exponentiation expression.
    ///
    /// Grammar: `power := factor ("^" power)?`
    ///
    /// Exponentiation is right-associative, so `a ^ b ^ c` parses as
    /// `a ^ (b ^ c)`.
    fn power(&mut self) -> ParseResult<Expr> {
        let left = self.factor()?;

        if matches!(self.current.kind, TokenKind::Caret) {
            let op_token = self.bump()?;
            let right = self.power()?;

            return Ok(Expr::BinaryOp { left:  Box::new(left),
                                       op:    BinaryOperator::Pow,
                                       right: Box::new(right),
                                       line:  op_token.line, });
        }

        Ok(left)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-" | "not") factor
    ///             | INTEGER | REAL | "true" | "false" | "nil"
    ///             | "(" expression ")"
    ///             | identifier
    /// ```
    /// A parenthesized group contains a full expression, so comparisons may
    /// be nested anywhere parentheses are allowed. A missing closing
    /// parenthesis is fatal.
    fn factor(&mut self) -> ParseResult<Expr> {
        match self.current.kind {
            TokenKind::Plus => self.unary(UnaryOperator::Plus),
            TokenKind::Minus => self.unary(UnaryOperator::Negate),
            TokenKind::Not => self.unary(UnaryOperator::Not),
            TokenKind::Integer(value) => {
                let token = self.bump()?;
                Ok(Expr::Literal { value: value.into(),
                                   line:  token.line, })
            },
            TokenKind::Real(value) => {
                let token = self.bump()?;
                Ok(Expr::Literal { value: value.into(),
                                   line:  token.line, })
            },
            TokenKind::Bool(value) => {
                let token = self.bump()?;
                Ok(Expr::Literal { value: value.into(),
                                   line:  token.line, })
            },
            TokenKind::Nil => {
                let token = self.bump()?;
                Ok(Expr::Literal { value: LiteralValue::Nil,
                                   line:  token.line, })
            },
            TokenKind::LParen => {
                self.bump()?;
                let expr = self.expression()?;
                self.eat(&TokenKind::RParen)?;
                Ok(expr)
            },
            TokenKind::Identifier(_) => {
                let token = self.bump()?;
                match token.kind {
                    TokenKind::Identifier(name) => Ok(Expr::Variable { name,
                                                                       line: token.line, }),
                    _ => unreachable!(),
                }
            },
            _ => Err(SyntaxError::ExpectedExpression { found:  format!("'{}'", self.current.kind),
                                                       line:   self.current.line,
                                                       column: self.current.column, }),
        }
    }

    /// Parses a prefix unary expression.
    ///
    /// Unary operators are right-associative, so `not -x` parses as
    /// `not (-x)`.
    fn unary(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        let op_token = self.bump()?;
        let expr = self.factor()?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line: op_token.line, })
    }
}

/// Maps a token to its corresponding comparison operator.
///
/// Returns `None` for every token that is not one of `==`, `~=`, `<`, `<=`,
/// `>`, `>=`.
#[must_use]
pub const fn comparison_operator(kind: &TokenKind) -> Option<ComparisonOperator> {
    match kind {
        TokenKind::Equal => Some(ComparisonOperator::Equal),
        TokenKind::NotEqual => Some(ComparisonOperator::NotEqual),
        TokenKind::Less => Some(ComparisonOperator::Less),
        TokenKind::LessEqual => Some(ComparisonOperator::LessEqual),
        TokenKind::Greater => Some(ComparisonOperator::Greater),
        TokenKind::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}
