use logos::Logos;

use crate::error::Diagnostic;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// A number is a run of digits with at most one embedded `.`; a second
    /// `.` ends the token early, so `1.2.3` lexes as `1.2` followed by `.3`.
    /// A lone `.` is lexically legal and forms a number token of just `.`;
    /// whether its text converts to a value is decided downstream.
    #[regex(r"[0-9]+\.?[0-9]*", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]*", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Newlines; skipped, but tracked for source positions.
    #[token("\n", track_newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Synthesized by [`Lexer::next_token`] once the source is
    /// exhausted; an embedded NUL byte also lexes as this token, matching a
    /// null-terminated buffer.
    #[token("\0")]
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Number(_) => "a number",
            Self::Identifier(_) => "an identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Equals => "'='",
            Self::Semicolon => "';'",
            Self::NewLine | Self::Ignored => "whitespace",
            Self::EndOfInput => "end of input",
        };
        f.write_str(tag)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// begins, so token columns can be computed from spans. Updated as newlines
/// are processed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

/// A location in the source text, used for diagnostics.
///
/// Both fields are 1-based; columns count bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number in the source.
    pub line:   usize,
    /// Column within that line.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Skips a newline while keeping the position bookkeeping current.
fn track_newline(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Pull-based tokenizer over one source buffer.
///
/// The lexer owns its input and hands out one `(Token, Position)` pair per
/// call. Characters that start no token are reported as diagnostics and
/// skipped, so lexing never aborts; once the input is exhausted every further
/// call returns [`Token::EndOfInput`] at the position it was first found.
pub struct Lexer<'src> {
    inner:       logos::Lexer<'src, Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, positioned at line 1, column 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:       Token::lexer_with_extras(source,
                                                     LexerExtras { line:       1,
                                                                   line_start: 0, }),
               diagnostics: Vec::new(), }
    }

    /// Returns the next token together with its source position.
    ///
    /// Unrecognized characters are recorded as
    /// [`Diagnostic::UnrecognizedCharacter`] and skipped before the next
    /// attempt, so this function always yields a token.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x = 2");
    /// assert_eq!(lexer.next_token().0, Token::Identifier("x".to_string()));
    /// assert_eq!(lexer.next_token().0, Token::Equals);
    /// assert_eq!(lexer.next_token().0, Token::Number("2".to_string()));
    /// assert_eq!(lexer.next_token().0, Token::EndOfInput);
    /// assert_eq!(lexer.next_token().0, Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> (Token, Position) {
        loop {
            match self.inner.next() {
                Some(Ok(token)) => return (token, self.token_position()),
                Some(Err(())) => {
                    let position = self.token_position();
                    if let Some(character) = self.inner.slice().chars().next() {
                        self.diagnostics
                            .push(Diagnostic::UnrecognizedCharacter { character, position });
                    }
                },
                None => return (Token::EndOfInput, self.token_position()),
            }
        }
    }

    /// Drains the diagnostics collected so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn token_position(&self) -> Position {
        Position { line:   self.inner.extras.line,
                   column: self.inner.span().start - self.inner.extras.line_start + 1, }
    }
}
