//! # tally
//!
//! tally evaluates programs made of sequential integer assignments such as
//! `x = 5; y = (x + 1) * -2;`. Source text is tokenized, each statement is
//! parsed by recursive descent and evaluated immediately, and the results are
//! stored in a caller-owned [`SymbolTable`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::SymbolTable,
        lexer::{Token, TokenKind, tokenize},
    },
};
use crate::{error::ParseError, interpreter::parser::statement::parse_statement};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `Assignment` statement that
/// represent source code as a tree. The AST is built by the parser and
/// consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Attaches line numbers and offending tokens for context.
/// - Combines the stages into a single [`Error`] for callers.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a token stream one statement at a time.
///
/// Each statement is fully parsed, then evaluated and stored in `table`,
/// before the next statement is parsed. Execution stops at the first error;
/// assignments completed before it stay in the table.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed statements and [`Error::Eval`] for
/// undefined variables or overflow.
///
/// # Examples
/// ```
/// use tally::{SymbolTable, run, tokenize};
///
/// let tokens = tokenize("x = 5; y = x * 2; x = y + 1;").unwrap();
/// let mut table = SymbolTable::new();
/// run(&tokens, &mut table).unwrap();
///
/// assert_eq!(table.get("x"), Some(11));
/// assert_eq!(table.get("y"), Some(10));
/// ```
pub fn run(tokens: &[Token], table: &mut SymbolTable) -> Result<(), Error> {
    let last_line = tokens.last().map_or(1, Token::line);
    let mut iter = tokens.iter().peekable();

    while iter.peek().is_some() {
        let statement =
            parse_statement(&mut iter).map_err(|e| at_end_of_input(e, last_line))?;
        table.eval_assignment(&statement)?;
    }

    Ok(())
}

/// Tokenizes `source` and runs it against `table`.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use tally::{SymbolTable, evaluate};
///
/// // Simple program: the result is stored in the table.
/// let mut table = SymbolTable::new();
/// assert!(evaluate("z = 2 + 3 * 4;", &mut table).is_ok());
/// assert_eq!(table.get("z"), Some(14));
///
/// // Example with an intentional error (unknown variable).
/// let res = evaluate("y = x + 1;", &mut SymbolTable::new());
/// assert!(res.is_err());
/// ```
pub fn evaluate(source: &str, table: &mut SymbolTable) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    debug!("tokenized {} tokens", tokens.len());
    run(&tokens, table)
}

/// Reports end-of-input parse errors on the last line of the program.
fn at_end_of_input(error: ParseError, last_line: usize) -> ParseError {
    use ParseError::{
        ExpectedAssignment, ExpectedIdentifier, ExpectedRightParen, ExpectedSemicolon,
        InvalidExpression,
    };

    match error {
        ExpectedIdentifier { found: None, .. } => ExpectedIdentifier { found: None,
                                                                       line:  last_line, },
        ExpectedAssignment { found: None, .. } => ExpectedAssignment { found: None,
                                                                       line:  last_line, },
        ExpectedSemicolon { found: None, .. } => ExpectedSemicolon { found: None,
                                                                     line:  last_line, },
        ExpectedRightParen { found: None, .. } => ExpectedRightParen { found: None,
                                                                       line:  last_line, },
        InvalidExpression { found: None, .. } => InvalidExpression { found: None,
                                                                     line:  last_line, },
        other => other,
    }
}
