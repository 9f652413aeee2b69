/// Core parser state and entry points.
///
/// Contains the `Parser` type, the single current-token buffer, and the
/// `eat`/`bump` primitives every grammar rule is built on.
pub mod core;

/// Expression parsing.
///
/// Implements the precedence ladder from comparisons down to atomic factors,
/// including the short-circuit logical tail and exponentiation.
pub mod expression;

/// Statement parsing.
///
/// Implements blocks, assignments, conditionals, loops, print statements,
/// and the empty statement.
pub mod statement;
