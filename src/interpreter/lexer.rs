use logos::Logos;

use crate::error::LexError;

/// Classifies a lexical token in the source input.
///
/// Whitespace is skipped by the lexer and never produces a token.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum TokenKind {
    /// Variable names such as `x` or `counter_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
}

/// A minimal but meaningful unit of text produced by the lexer.
///
/// A token pairs its [`TokenKind`] with the exact source text it was read
/// from. Tokens are never modified after the lexer creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    /// Creates a token of the given kind from its literal text.
    ///
    /// ## Example
    /// ```
    /// use tally::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "42", 1);
    /// assert_eq!(token.text(), "42");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// The kind of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The 1-based source line the token starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}

/// Splits source text into tokens.
///
/// Scans left to right, skipping whitespace. Numerals must be `0` or start
/// with a non-zero digit. Semicolon placement and parenthesis balancing are
/// left to the parser.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// - `LexError::LeadingZero` for numerals such as `007`.
/// - `LexError::InvalidCharacter` for a character that starts no token.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Assign, TokenKind::Number, TokenKind::Semicolon]);
///
/// assert!(tokenize("x = 007;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut line = 1;
    let mut scanned = 0;

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count();
        scanned = span.start;

        match kind {
            Ok(TokenKind::Number) if has_leading_zero(lexer.slice()) => {
                return Err(LexError::LeadingZero { literal: lexer.slice().to_string(),
                                                   position: char_position(source, span.start),
                                                   line });
            },
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                let character = source[span.start..].chars()
                                                    .next()
                                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter { character,
                                                        position: char_position(source,
                                                                                span.start),
                                                        line });
            },
        }
    }

    Ok(tokens)
}

/// Returns `true` for numerals like `00` or `0123`.
fn has_leading_zero(numeral: &str) -> bool {
    numeral.len() > 1 && numeral.starts_with('0')
}

/// Converts a byte offset into a character offset.
fn char_position(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].chars().count()
}
