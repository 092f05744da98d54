use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Text of the offending token, or `None` at end of input.
pub(in crate::interpreter::parser) fn found(token: Option<&Token>) -> Option<String> {
    token.map(|t| t.text().to_string())
}

/// Line of the offending token. End of input reports line 0; [`crate::run`]
/// replaces it with the line of the last token.
pub(in crate::interpreter::parser) fn line_of(token: Option<&Token>) -> usize {
    token.map_or(0, Token::line)
}

/// Consumes the next token if it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The kind the next token must have.
/// - `error`: Builds the error from the offending token text and line.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns the error built by `error` if the next token has a different kind
/// or the input has ended. The offending token is consumed as well.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          kind: TokenKind,
                                                          error: fn(Option<String>, usize)
                                                                   -> ParseError)
                                                          -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind() == kind => Ok(token),
        other => Err(error(found(other), line_of(other))),
    }
}

/// Enters one more nesting level.
///
/// # Errors
/// `ParseError::NestingTooDeep` past [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) const fn nested(depth: usize,
                                                   line: usize)
                                                   -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(depth + 1)
}
