use std::collections::HashMap;

use crate::{
    ast::{AstNode, BinaryOperator},
    error::Diagnostic,
    interpreter::lexer::Position,
};

/// Stores the evaluation state of one calculator session.
///
/// The interpreter holds the variable environment (name to value) and a
/// diagnostics sink. It is created once and reused across many
/// parse-then-evaluate cycles, so variables persist between statements for
/// the lifetime of the instance. It is not designed for concurrent use; a
/// host exposing it to multiple threads must add its own synchronization.
pub struct Interpreter {
    /// The variable environment. Insert-or-update on assignment, lookup by
    /// exact name; entries live until the interpreter is dropped.
    variables:   HashMap<String, f64>,
    /// Diagnostics raised during evaluation, drained by the caller.
    diagnostics: Vec<Diagnostic>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with an empty variable environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:   HashMap::new(),
               diagnostics: Vec::new(), }
    }

    /// Evaluates an AST node and returns the resulting value.
    ///
    /// Evaluation is total: it always completes with a number. The
    /// recoverable conditions substitute `0.0` and record a diagnostic
    /// instead of failing:
    /// - a variable that was never assigned
    ///   ([`Diagnostic::UnknownVariable`]),
    /// - a division with a zero divisor ([`Diagnostic::DivisionByZero`]).
    ///
    /// Operands evaluate left to right, so an assignment inside the left
    /// operand is visible to the right one. Evaluating an [`AstNode::Assignment`]
    /// stores the value under its name and yields that value; nothing else
    /// mutates the environment.
    ///
    /// # Example
    /// ```
    /// use minicalc::{interpreter::evaluator::Interpreter, parse};
    ///
    /// let statements = parse("2 + 3 * 4").unwrap();
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.evaluate(&statements[0]), 14.0);
    /// ```
    pub fn evaluate(&mut self, node: &AstNode) -> f64 {
        match node {
            AstNode::Number { value, .. } => *value,

            AstNode::Variable { name, position } => self.lookup(name, *position),

            AstNode::BinaryOp { op,
                                left,
                                right,
                                position, } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                self.apply(*op, left, right, *position)
            },

            AstNode::Assignment { name, value, .. } => {
                let value = self.evaluate(value);
                self.set_variable(name, value);
                value
            },
        }
    }

    /// Sets a variable directly, inserting or updating its entry.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }

    /// Looks up a variable without raising a diagnostic when it is missing.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Drains the diagnostics collected during evaluation.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn lookup(&mut self, name: &str, position: Position) -> f64 {
        if let Some(value) = self.get_variable(name) {
            return value;
        }

        self.diagnostics.push(Diagnostic::UnknownVariable { name: name.to_owned(),
                                                            position });
        0.0
    }

    #[allow(clippy::float_cmp)]
    fn apply(&mut self, op: BinaryOperator, left: f64, right: f64, position: Position) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if right == 0.0 {
                    self.diagnostics.push(Diagnostic::DivisionByZero { position });
                    return 0.0;
                }
                left / right
            },
        }
    }
}
