use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::nested},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Each fold deepens the tree by one level and counts towards the nesting
/// limit.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression being parsed.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind())
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = token.line();
        tokens.next();
        depth = nested(depth, line)?;
        let right = parse_multiplicative(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses multiplication expressions.
///
/// Handles the left-associative operator `*`, which binds tighter than `+`
/// and `-`.
///
/// The rule is: `multiplicative := unary ("*" unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the expression being parsed.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   mut depth: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind())
          && matches!(op, BinaryOperator::Mul)
    {
        let line = token.line();
        tokens.next();
        depth = nested(depth, line)?;
        let right = parse_unary(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token kind to its binary operator, if it has one.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Multiply), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(TokenKind::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        _ => None,
    }
}
