use std::iter::Peekable;

use crate::{
    ast::Assignment,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses a single assignment statement.
///
/// A statement has the form `<identifier> = <expression> ;`. Every statement
/// must end with exactly one `;`, so a stray second `;` is reported as a
/// missing identifier when the next statement is parsed.
///
/// Grammar: `statement := IDENTIFIER "=" expression ";"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// The parsed [`Assignment`]. It is not evaluated here.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the statement does not start with an identifier,
/// - `=` is missing,
/// - the expression is malformed,
/// - the terminating `;` is missing.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::statement::parse_statement};
///
/// let tokens = tokenize("total = 1 + 2;").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(statement.name, "total");
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Assignment>
    where I: Iterator<Item = &'a Token>
{
    let target = expect_token(tokens, TokenKind::Identifier, |found, line| {
                     ParseError::ExpectedIdentifier { found, line }
                 })?;

    expect_token(tokens, TokenKind::Assign, |found, line| {
        ParseError::ExpectedAssignment { found, line }
    })?;

    let value = parse_expression(tokens)?;

    expect_token(tokens, TokenKind::Semicolon, |found, line| {
        ParseError::ExpectedSemicolon { found, line }
    })?;

    Ok(Assignment { name: target.text().to_string(),
                    value,
                    line: target.line() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Expr},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Assignment> {
        let tokens = tokenize(source).unwrap();
        parse_statement(&mut tokens.iter().peekable())
    }

    #[test]
    fn parses_simple_assignment() {
        let statement = parse("x = 5;").unwrap();
        assert_eq!(statement,
                   Assignment { name:  "x".to_string(),
                                value: Expr::Literal { value: 5, line: 1 },
                                line:  1, });
    }

    #[test]
    fn subtraction_folds_left() {
        let statement = parse("z = a - b - c;").unwrap();
        let Expr::BinaryOp { left, op, right, .. } = statement.value else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Sub);
        assert!(matches!(*right, Expr::Variable { ref name, .. } if name == "c"));
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
    }

    #[test]
    fn statement_must_start_with_identifier() {
        assert_eq!(parse("5 = x;"),
                   Err(ParseError::ExpectedIdentifier { found: Some("5".to_string()),
                                                        line:  1, }));
        assert_eq!(parse(";"),
                   Err(ParseError::ExpectedIdentifier { found: Some(";".to_string()),
                                                        line:  1, }));
    }

    #[test]
    fn identifier_must_be_followed_by_assign() {
        assert_eq!(parse("x 5;"),
                   Err(ParseError::ExpectedAssignment { found: Some("5".to_string()),
                                                        line:  1, }));
        assert_eq!(parse("x"),
                   Err(ParseError::ExpectedAssignment { found: None, line: 0 }));
    }

    #[test]
    fn expression_must_be_terminated() {
        assert_eq!(parse("x = 5 6;"),
                   Err(ParseError::ExpectedSemicolon { found: Some("6".to_string()),
                                                       line:  1, }));
        assert_eq!(parse("x = 5"),
                   Err(ParseError::ExpectedSemicolon { found: None, line: 0 }));
    }
}
