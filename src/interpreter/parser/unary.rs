use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::ParseResult,
            utils::{expect_token, found, line_of, nested},
        },
    },
};

/// Parses a unary expression (a factor).
///
/// Supports the prefix operators `+` and `-`. They apply to a single factor,
/// so `-x * y` is parsed as `(-x) * y`, and they nest: `-(-5)` and `--5` are
/// both valid.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the expression being parsed.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match tokens.peek().map(|t| t.kind()) {
        Some(TokenKind::Plus) => UnaryOperator::Plus,
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        _ => return parse_primary(tokens, depth),
    };

    let line = line_of(tokens.next());
    let expr = parse_unary(tokens, nested(depth, line)?)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are integer literals, variable references and
/// parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of the expression being parsed.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// `ParseError::InvalidExpression` if the next token cannot start an
/// expression (for example `*`, `)` or `;`) or the input has ended.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().map(|t| t.kind()) {
        Some(TokenKind::Number) => parse_literal(tokens),
        Some(TokenKind::Identifier) => {
            let token = expect_token(tokens, TokenKind::Identifier, |found, line| {
                            ParseError::InvalidExpression { found, line }
                        })?;
            Ok(Expr::Variable { name: token.text().to_string(),
                                line: token.line(), })
        },
        Some(TokenKind::LeftParen) => parse_grouping(tokens, depth),
        _ => {
            let token = tokens.next();
            Err(ParseError::InvalidExpression { found: found(token),
                                                line:  line_of(token), })
        },
    }
}

/// Parses an integer literal.
///
/// # Errors
/// `ParseError::LiteralTooLarge` if the numeral does not fit in an `i64`.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = expect_token(tokens, TokenKind::Number, |found, line| {
                    ParseError::InvalidExpression { found, line }
                })?;

    let value = token.text()
                     .parse::<i64>()
                     .map_err(|_| ParseError::LiteralTooLarge { literal: token.text()
                                                                              .to_string(),
                                                                line:    token.line(), })?;

    Ok(Expr::Literal { value,
                       line: token.line() })
}

/// Parses a parenthesized expression `( expression )`.
///
/// The parentheses only group; no node is created for them.
///
/// # Errors
/// - `ParseError::ExpectedRightParen` if the closing `)` is missing.
/// - `ParseError::NestingTooDeep` if the group opens one level too many.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let line = line_of(tokens.next());
    let expr = parse_additive(tokens, nested(depth, line)?)?;
    expect_token(tokens, TokenKind::RightParen, |found, line| {
        ParseError::ExpectedRightParen { found, line }
    })?;
    Ok(expr)
}
