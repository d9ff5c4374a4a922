/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, performs the arithmetic, and manages the
/// variable environment that persists across statements. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Keeps the name-to-value environment current across assignments.
/// - Reports recoverable conditions (undefined variable, division by zero)
///   as diagnostics while still producing a numeric result.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, or a delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric literals, identifiers, and single-character operators.
/// - Skips unrecognized characters, reporting each one as a diagnostic.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer on demand and constructs an AST
/// that represents the syntactic structure of each statement, using
/// recursive descent with one token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, assignments).
/// - Validates the grammar, reporting violations with location info.
/// - Encodes operator precedence and left-associativity in its call
///   structure.
pub mod parser;
