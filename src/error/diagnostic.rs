use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq)]
/// Represents all recoverable conditions reported during lexing and
/// evaluation.
///
/// Diagnostics are surfaced rather than thrown: the operation that raised one
/// still completes with a result (lexing skips the offending character,
/// evaluation substitutes `0.0`). Callers drain them after the fact and
/// decide how to present them.
pub enum Diagnostic {
    /// The lexer skipped a character that starts no token.
    UnrecognizedCharacter {
        /// The character that was skipped.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// A variable was read before ever being assigned; `0.0` was substituted.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the reference occurred.
        position: Position,
    },
    /// A division had a zero divisor; `0.0` was substituted.
    DivisionByZero {
        /// Where the division occurred.
        position: Position,
    },
}

impl Diagnostic {
    /// Gets the source position the diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnknownVariable { position, .. }
            | Self::DivisionByZero { position } => *position,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error on {position}: Unexpected character '{character}'.")
            },

            Self::UnknownVariable { name, position } => {
                write!(f, "Error on {position}: Undefined variable '{name}'.")
            },

            Self::DivisionByZero { position } => {
                write!(f, "Error on {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for Diagnostic {}
