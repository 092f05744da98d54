/// Entry point of expression parsing.
///
/// Declares the shared result type and the lowest-precedence expression rule.
pub mod core;

/// Statement parsing.
///
/// Parses a single `name = expression;` assignment.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Parses factors: literals, variable references, parenthesized expressions
/// and sign-prefixed factors.
pub mod unary;

/// Helpers shared by the parsing rules.
pub(crate) mod utils;
