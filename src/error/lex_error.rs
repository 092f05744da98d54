#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A numeral was written with a leading zero, such as `007`.
    LeadingZero {
        /// The offending numeral.
        literal:  String,
        /// Character offset of the numeral in the source.
        position: usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A character that starts no token.
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// Character offset in the source.
        position:  usize,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl LexError {
    /// Gets the line the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::LeadingZero { line, .. } | Self::InvalidCharacter { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingZero { literal,
                                position,
                                line, } => write!(f,
                                                  "Error on line {line}: Leading zeroes are not allowed: '{literal}' at position {position}."),
            Self::InvalidCharacter { character,
                                     position,
                                     line, } => write!(f,
                                                       "Error on line {line}: Invalid character {character:?} at position {position}."),
        }
    }
}

impl std::error::Error for LexError {}
