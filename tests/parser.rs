use luma::{
    ast::{BinaryOperator, ElseBranch, Expr, LiteralValue, Statement},
    error::SyntaxError,
    parse_source,
};

fn statements(source: &str) -> Vec<Statement> {
    parse_source(source).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
                        .block
                        .statements
}

fn literal(value: impl Into<LiteralValue>, line: usize) -> Expr {
    Expr::Literal { value: value.into(),
                    line }
}

#[test]
fn assignment_targets_a_variable() {
    let parsed = statements("x := 1");

    assert_eq!(parsed,
               vec![Statement::Assignment { name:  "x".to_string(),
                                            value: literal(1, 1),
                                            line:  1, }]);
}

#[test]
fn both_assignment_spellings_parse() {
    assert_eq!(statements("x := 1"), statements("x = 1"));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let parsed = statements("1 + 2 * 3");

    let expected = Expr::BinaryOp { left:  Box::new(literal(1, 1)),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::BinaryOp { left:  Box::new(literal(2, 1)),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: Box::new(literal(3, 1)),
                                                                     line:  1, }),
                                    line:  1, };

    assert_eq!(parsed, vec![Statement::Expression { expr: expected,
                                                    line: 1, }]);
}

#[test]
fn power_is_right_associative() {
    let parsed = statements("2 ^ 3 ^ 2");

    let expected = Expr::BinaryOp { left:  Box::new(literal(2, 1)),
                                    op:    BinaryOperator::Pow,
                                    right: Box::new(Expr::BinaryOp { left:  Box::new(literal(3, 1)),
                                                                     op:    BinaryOperator::Pow,
                                                                     right: Box::new(literal(2, 1)),
                                                                     line:  1, }),
                                    line:  1, };

    assert_eq!(parsed, vec![Statement::Expression { expr: expected,
                                                    line: 1, }]);
}

#[test]
fn logical_tail_is_right_associative() {
    let parsed = statements("1 and 2 or 3");

    let expected = Expr::BinaryOp { left:  Box::new(literal(1, 1)),
                                    op:    BinaryOperator::And,
                                    right: Box::new(Expr::BinaryOp { left:  Box::new(literal(2, 1)),
                                                                     op:    BinaryOperator::Or,
                                                                     right: Box::new(literal(3, 1)),
                                                                     line:  1, }),
                                    line:  1, };

    assert_eq!(parsed, vec![Statement::Expression { expr: expected,
                                                    line: 1, }]);
}

#[test]
fn unary_operators_nest() {
    let parsed = statements("not -1");

    match &parsed[0] {
        Statement::Expression { expr: Expr::UnaryOp { op, expr, .. },
                                .. } => {
            assert_eq!(*op, luma::ast::UnaryOperator::Not);
            assert!(matches!(**expr, Expr::UnaryOp { op: luma::ast::UnaryOperator::Negate, .. }));
        },
        other => panic!("Expected a unary expression, got {other:?}"),
    }
}

#[test]
fn elseif_chain_nests_in_source_order() {
    let parsed = statements("if (x == 1) then y := 1 elseif (x == 2) then y := 2 else y := 3 end");

    let Statement::If(if_stmt) = &parsed[0] else {
        panic!("Expected an if statement, got {:?}", parsed[0]);
    };

    assert!(matches!(if_stmt.condition, Expr::Comparison { .. }));

    let Some(ElseBranch::If(first_clause)) = &if_stmt.else_branch else {
        panic!("Expected the first elseif as the immediate else branch");
    };

    assert!(matches!(first_clause.condition, Expr::Comparison { .. }));

    let Some(ElseBranch::Block(else_block)) = &first_clause.else_branch else {
        panic!("Expected the final else at the deepest nesting level");
    };

    assert!(matches!(else_block.statements[0], Statement::Assignment { .. }));
}

#[test]
fn nil_statement_is_a_noop() {
    assert_eq!(statements("nil"), vec![Statement::NoOp]);
}

#[test]
fn statements_need_no_separators() {
    let parsed = statements("x := 1 y := 2 x + y");

    assert_eq!(parsed.len(), 3);
    assert!(matches!(parsed[2], Statement::Expression { .. }));
}

#[test]
fn print_takes_an_expression() {
    let parsed = statements("print 1 + 2");

    match &parsed[0] {
        Statement::Print { expr, .. } => assert!(matches!(expr, Expr::BinaryOp { .. })),
        other => panic!("Expected a print statement, got {other:?}"),
    }
}

#[test]
fn syntax_errors_are_fatal() {
    assert!(parse_source("x := ").is_err());
    assert!(parse_source("if x then y := 1").is_err());
    assert!(parse_source("while x do end").is_err());
    assert!(parse_source("(1 + 2").is_err());
    assert!(parse_source("x := 'strings are not values'").is_err());
    assert!(parse_source("").is_err());
}

#[test]
fn assignment_to_an_expression_is_rejected() {
    assert!(matches!(parse_source("1 + 2 := 3"),
                     Err(SyntaxError::InvalidAssignmentTarget { .. })));
}

#[test]
fn lex_errors_surface_through_the_parser() {
    assert!(matches!(parse_source("x := 12x"), Err(SyntaxError::Lex(_))));
}
