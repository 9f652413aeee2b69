use crate::{
    ast::{Block, ElseBranch, Expr, IfStmt, LiteralValue, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a statement list into a block.
    ///
    /// Grammar: `block := statement+`
    ///
    /// The list is terminated by end-of-input, `end`, `elseif`, or `else`;
    /// no separators are required between statements. At least one statement
    /// must be present — `nil` serves as the explicit empty statement.
    ///
    /// # Returns
    /// A [`Block`] whose statement order is the evaluation order.
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Block> {
        let mut statements = vec![self.statement()?];

        while !matches!(self.current.kind,
                        TokenKind::Eof | TokenKind::End | TokenKind::Elseif | TokenKind::Else)
        {
            statements.push(self.statement()?);
        }

        Ok(Block { statements })
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an `if`/`elseif`/`else` conditional,
    /// - a `while` loop,
    /// - a `print` statement,
    /// - an assignment,
    /// - the empty statement, a bare `nil`,
    /// - an expression used as a statement.
    ///
    /// The leading token decides the first three; everything else is parsed
    /// as an expression first and promoted to an assignment when the
    /// assignment token follows, or demoted to the empty statement when the
    /// whole expression is a lone `nil`.
    fn statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::If => self.if_statement().map(Statement::If),
            TokenKind::While => self.while_statement(),
            TokenKind::Print => self.print_statement(),
            _ => self.assignment_or_expression(),
        }
    }

    /// Parses an `if` statement with optional `elseif` chain and `else`.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition> then <block>
    ///     elseif <condition> then <block>
    ///     else <block>
    ///     end
    /// ```
    /// The `elseif` clauses are folded into nested [`IfStmt`]s in source
    /// order: the first clause becomes the immediate else branch and the
    /// final `else` block, if present, ends up at the deepest nesting level,
    /// so evaluation short-circuits in textual order.
    ///
    /// # Errors
    /// - `UnexpectedToken` if `then` or the closing `end` is missing.
    /// - Propagates any errors from condition or block parsing.
    fn if_statement(&mut self) -> ParseResult<IfStmt> {
        let if_token = self.eat(&TokenKind::If)?;
        let condition = self.expression()?;
        self.eat(&TokenKind::Then)?;
        let then_block = self.block()?;

        let mut clauses = Vec::new();
        while matches!(self.current.kind, TokenKind::Elseif) {
            let elseif_token = self.bump()?;
            let clause_condition = self.expression()?;
            self.eat(&TokenKind::Then)?;
            let clause_block = self.block()?;
            clauses.push((clause_condition, clause_block, elseif_token.line));
        }

        let mut else_branch = if matches!(self.current.kind, TokenKind::Else) {
            self.bump()?;
            Some(ElseBranch::Block(self.block()?))
        } else {
            None
        };

        self.eat(&TokenKind::End)?;

        for (clause_condition, clause_block, line) in clauses.into_iter().rev() {
            else_branch = Some(ElseBranch::If(Box::new(IfStmt { condition: clause_condition,
                                                                then_block: clause_block,
                                                                else_branch,
                                                                line })));
        }

        Ok(IfStmt { condition,
                    then_block,
                    else_branch,
                    line: if_token.line })
    }

    /// Parses a `while` loop.
    ///
    /// Syntax: `while <condition> do <block> end`
    fn while_statement(&mut self) -> ParseResult<Statement> {
        let while_token = self.eat(&TokenKind::While)?;
        let condition = self.expression()?;
        self.eat(&TokenKind::Do)?;
        let body = self.block()?;
        self.eat(&TokenKind::End)?;

        Ok(Statement::While { condition,
                              body,
                              line: while_token.line })
    }

    /// Parses a `print` statement.
    ///
    /// Syntax: `print <expression>`
    fn print_statement(&mut self) -> ParseResult<Statement> {
        let print_token = self.eat(&TokenKind::Print)?;
        let expr = self.expression()?;

        Ok(Statement::Print { expr,
                              line: print_token.line })
    }

    /// Parses an assignment, an empty statement, or a standalone expression
    /// statement.
    ///
    /// All of them begin with an expression, so a full expression is parsed
    /// first. If the assignment token follows and the expression is a bare
    /// variable, the statement is an assignment `identifier ':=' expression`;
    /// an assignment token after any other expression is an
    /// invalid-assignment-target error. A lone `nil` literal is the
    /// explicit empty statement. Anything else stands as an expression
    /// statement.
    fn assignment_or_expression(&mut self) -> ParseResult<Statement> {
        let expr = self.expression()?;

        if matches!(self.current.kind, TokenKind::Assign) {
            return match expr {
                Expr::Variable { name, line } => {
                    self.bump()?;
                    let value = self.expression()?;
                    Ok(Statement::Assignment { name, value, line })
                },
                _ => Err(SyntaxError::InvalidAssignmentTarget { line:   self.current.line,
                                                                column: self.current.column, }),
            };
        }

        if matches!(expr, Expr::Literal { value: LiteralValue::Nil, .. }) {
            return Ok(Statement::NoOp);
        }

        let line = expr.line_number();
        Ok(Statement::Expression { expr, line })
    }
}
