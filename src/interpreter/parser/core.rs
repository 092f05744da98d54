use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses, unary signs and chained operators allowed
/// in one expression.
///
/// Parsing, evaluating and dropping an expression all recurse once per level,
/// so the bound keeps them within the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Any syntax error, or `ParseError::NestingTooDeep` once the expression
/// nests deeper than [`MAX_NESTING_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, 0)
}
