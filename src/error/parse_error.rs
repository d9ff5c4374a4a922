use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing one statement.
///
/// A parse error is statement-fatal: it aborts the parse of the statement it
/// occurred in, and the caller decides whether to continue the session. It is
/// never a process exit.
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    UnexpectedToken {
        /// What the parser would have accepted here.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// Where the token was found.
        position: Position,
    },
    /// A number token whose text does not convert to a value (a lone `.`).
    InvalidNumber {
        /// The literal text of the token.
        literal:  String,
        /// Where the literal was found.
        position: Position,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error on {position}: Expected {expected}, found {found}.")
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "Error on {position}: '{literal}' is not a valid number.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
