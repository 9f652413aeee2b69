/// Binary operator evaluation logic.
///
/// Handles the execution of the arithmetic operators and the lazily
/// evaluated short-circuit logical operators.
pub mod binary;

/// Comparison evaluation logic.
///
/// Implements equality and ordering between runtime values, including the
/// promotion of mixed integer/real operands.
pub mod comparison;

/// Control-flow evaluation.
///
/// Evaluates conditionals and loops, dispatching into blocks and keeping
/// the last produced value.
pub mod control;

/// Core evaluation logic and the variable store.
///
/// Contains the main evaluation engine, the `Environment` holding variable
/// state, the truthiness rule, and error propagation.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements identity, numeric negation, and logical NOT.
pub mod unary;
