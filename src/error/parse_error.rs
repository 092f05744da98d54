use crate::interpreter::parser::core::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// `found` holds the text of the offending token, or `None` when the token
/// stream ended too early.
pub enum ParseError {
    /// A statement did not start with a variable name.
    ExpectedIdentifier {
        /// The token encountered.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The variable name was not followed by `=`.
    ExpectedAssignment {
        /// The token encountered.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The expression was not terminated by `;`.
    ExpectedSemicolon {
        /// The token encountered.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedRightParen {
        /// The token encountered.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token cannot start an expression.
    InvalidExpression {
        /// The token encountered.
        found: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The numeral as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Parentheses, signs or operators are nested too deeply to evaluate.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
}

/// Formats the "but found ..." tail of a message.
fn describe(found: Option<&String>) -> String {
    found.map_or_else(|| "end of input".to_string(), |token| format!("'{token}'"))
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedIdentifier { found, line } => write!(f,
                                                               "Error on line {line}: Expected identifier at start of statement, found {}.",
                                                               describe(found.as_ref())),
            Self::ExpectedAssignment { found, line } => write!(f,
                                                               "Error on line {line}: Expected '=' after identifier, found {}.",
                                                               describe(found.as_ref())),
            Self::ExpectedSemicolon { found, line } => write!(f,
                                                              "Error on line {line}: Expected ';' after expression, found {}.",
                                                              describe(found.as_ref())),
            Self::ExpectedRightParen { found, line } => write!(f,
                                                               "Error on line {line}: Expected closing parenthesis ')', found {}.",
                                                               describe(found.as_ref())),
            Self::InvalidExpression { found, line } => write!(f,
                                                              "Error on line {line}: Invalid expression: {} cannot start an expression.",
                                                              describe(found.as_ref())),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::NestingTooDeep { line } => write!(f,
                                                    "Error on line {line}: Expression is nested more than {MAX_NESTING_DEPTH} levels deep."),
        }
    }
}

impl std::error::Error for ParseError {}
