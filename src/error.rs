/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: illegal
/// characters and numerals written with leading zeroes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token stream into
/// assignment statements, such as a missing `=`, a missing `;` or an
/// unbalanced parenthesis.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing an expression to a value:
/// references to variables that were never assigned and integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced while running a program.
///
/// Every stage reports the first failure it meets; this enum carries that
/// failure back to the caller unchanged.
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The token stream is not a valid program.
    Parse(ParseError),
    /// A statement parsed, but its value could not be computed.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
