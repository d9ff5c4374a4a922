use crate::{
    ast::{AstNode, BinaryOperator},
    error::{Diagnostic, ParseError},
    interpreter::lexer::{Lexer, Position, Token},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over one source buffer.
///
/// The parser owns its lexer and pulls tokens on demand, holding exactly one
/// current token of lookahead. Each grammar rule is a method; precedence
/// falls out of the call structure, and all binary operators are
/// left-associative.
///
/// Grammar, lowest to highest precedence:
/// ```text
///     statement  := assignment (";")?
///     assignment := IDENTIFIER "=" expression | expression
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := NUMBER | IDENTIFIER | "(" expression ")"
///               | "+" factor | "-" factor
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: (Token, Position),
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with the first token already pulled.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Returns `true` once every token of the source has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        matches!(self.current.0, Token::EndOfInput)
    }

    /// Drains the diagnostics the lexer collected so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.lexer.take_diagnostics()
    }

    /// Parses a single statement, consuming an optional trailing `;`.
    ///
    /// Grammar: `statement := assignment (";")?`
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the statement violates the grammar. The
    /// error aborts this statement only; the parser itself stays usable for
    /// a fresh buffer and the caller's session state is untouched.
    pub fn parse_statement(&mut self) -> ParseResult<AstNode> {
        let node = self.parse_assignment()?;

        if self.current.0 == Token::Semicolon {
            self.advance();
        }

        Ok(node)
    }

    /// Parses an assignment or, failing the lookahead, an expression.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" expression | expression`
    ///
    /// An assignment is recognized only when the current token is an
    /// identifier and the token after it is `=`; one token of lookahead
    /// suffices because `=` cannot otherwise begin an expression. A consumed
    /// identifier that is not followed by `=` continues as the first factor
    /// of an ordinary expression.
    fn parse_assignment(&mut self) -> ParseResult<AstNode> {
        if !matches!(self.current.0, Token::Identifier(_)) {
            return self.parse_expression();
        }

        let (token, position) = self.advance();
        let Token::Identifier(name) = token else {
            unreachable!()
        };

        if self.current.0 == Token::Equals {
            self.advance();
            let value = self.parse_expression()?;
            return Ok(AstNode::Assignment { name,
                                            value: Box::new(value),
                                            position });
        }

        let factor = AstNode::Variable { name, position };
        let term = self.finish_term(factor)?;
        self.finish_expression(term)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    fn parse_expression(&mut self) -> ParseResult<AstNode> {
        let term = self.parse_term()?;
        self.finish_expression(term)
    }

    /// Folds `+`/`-` operators onto an already-parsed left operand,
    /// left-associatively.
    fn finish_expression(&mut self, mut node: AstNode) -> ParseResult<AstNode> {
        loop {
            let op = match self.current.0 {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Sub,
                _ => break,
            };
            let (_, position) = self.advance();
            let right = self.parse_term()?;
            node = AstNode::BinaryOp { op,
                                       left: Box::new(node),
                                       right: Box::new(right),
                                       position };
        }

        Ok(node)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    fn parse_term(&mut self) -> ParseResult<AstNode> {
        let factor = self.parse_factor()?;
        self.finish_term(factor)
    }

    /// Folds `*`/`/` operators onto an already-parsed left operand,
    /// left-associatively.
    fn finish_term(&mut self, mut node: AstNode) -> ParseResult<AstNode> {
        loop {
            let op = match self.current.0 {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                _ => break,
            };
            let (_, position) = self.advance();
            let right = self.parse_factor()?;
            node = AstNode::BinaryOp { op,
                                       left: Box::new(node),
                                       right: Box::new(right),
                                       position };
        }

        Ok(node)
    }

    /// Parses an atomic expression.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER | IDENTIFIER | "(" expression ")"
    ///            | "+" factor | "-" factor
    /// ```
    /// Unary `+` is a no-op pass-through; unary `-` desugars to
    /// `0 - operand`.
    ///
    /// # Errors
    /// - [`ParseError::InvalidNumber`] when a number token's text does not
    ///   convert to `f64` (the lexically-legal lone `.`).
    /// - [`ParseError::UnexpectedToken`] for any token that cannot begin a
    ///   factor.
    fn parse_factor(&mut self) -> ParseResult<AstNode> {
        match &self.current.0 {
            Token::Number(_) => {
                let (token, position) = self.advance();
                let Token::Number(literal) = token else {
                    unreachable!()
                };
                match literal.parse::<f64>() {
                    Ok(value) => Ok(AstNode::Number { value, position }),
                    Err(_) => Err(ParseError::InvalidNumber { literal, position }),
                }
            },

            Token::Identifier(_) => {
                let (token, position) = self.advance();
                let Token::Identifier(name) = token else {
                    unreachable!()
                };
                Ok(AstNode::Variable { name, position })
            },

            Token::LParen => {
                self.advance();
                let node = self.parse_expression()?;
                self.eat(&Token::RParen)?;
                Ok(node)
            },

            Token::Plus => {
                self.advance();
                self.parse_factor()
            },

            Token::Minus => {
                let (_, position) = self.advance();
                let operand = self.parse_factor()?;
                Ok(AstNode::BinaryOp { op: BinaryOperator::Sub,
                                       left: Box::new(AstNode::Number { value: 0.0,
                                                                        position }),
                                       right: Box::new(operand),
                                       position })
            },

            found => {
                Err(ParseError::UnexpectedToken { expected: "a number, an identifier, '(', '+' or '-'".to_string(),
                                                  found:    found.to_string(),
                                                  position: self.current.1, })
            },
        }
    }

    /// Consumes the current token if it matches `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming both tags when the
    /// current token does not match.
    fn eat(&mut self, expected: &Token) -> ParseResult<()> {
        if self.current.0 == *expected {
            self.advance();
            return Ok(());
        }

        Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                          found:    self.current.0.to_string(),
                                          position: self.current.1, })
    }

    /// Replaces the current token with the next one from the lexer,
    /// returning the token that was current.
    fn advance(&mut self) -> (Token, Position) {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }
}
