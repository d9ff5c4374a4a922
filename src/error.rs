/// Parsing errors.
///
/// Defines the statement-fatal error type produced while parsing source
/// code: unexpected tokens and invalid numeric literals. A parse error
/// aborts only the statement it occurred in.
pub mod parse_error;
/// Recoverable diagnostics.
///
/// Contains the diagnostic type for conditions that are reported without
/// failing the surrounding operation: unrecognized characters (skipped by
/// the lexer), undefined variables and division by zero (both substituted
/// with `0.0` by the interpreter).
pub mod diagnostic;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
