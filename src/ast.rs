use crate::interpreter::lexer::Position;

/// Represents a binary operator.
///
/// The language supports the four basic arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing one statement or
/// expression in the language.
///
/// `AstNode` is a closed sum type with exactly four shapes: numeric literals,
/// variable references, binary operations, and assignments. Child nodes are
/// exclusively owned (`Box`), so every tree is acyclic and finite and is
/// freed as a unit with its root. Each variant carries the source position of
/// the token it was built from, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A numeric literal.
    Number {
        /// The literal's value.
        value:    f64,
        /// Source position of the literal.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Source position of the identifier.
        position: Position,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Source position of the operator.
        position: Position,
    },
    /// An assignment binding a name to the value of an expression.
    Assignment {
        /// The name being assigned to.
        name:     String,
        /// The expression whose value is stored.
        value:    Box<Self>,
        /// Source position of the identifier.
        position: Position,
    },
}

impl AstNode {
    /// Gets the source position from `self`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{ast::AstNode, interpreter::lexer::Position};
    ///
    /// let node = AstNode::Variable { name:     "x".to_string(),
    ///                                position: Position { line: 5, column: 2 }, };
    ///
    /// assert_eq!(node.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Assignment { position, .. } => *position,
        }
    }

    /// Renders the tree as an indented, line-per-node dump.
    ///
    /// Children are indented two spaces below their parent. Useful for
    /// inspecting what the parser built; the CLI exposes it behind `--ast`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::parse;
    ///
    /// let statements = parse("x = 1 + 2").unwrap();
    /// assert_eq!(statements[0].render_tree(),
    ///            "Assignment: x\n  BinaryOp: +\n    Number: 1\n    Number: 2\n");
    /// ```
    #[must_use]
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize) {
        out.push_str(&"  ".repeat(indent));
        match self {
            Self::Number { value, .. } => {
                out.push_str(&format!("Number: {value}\n"));
            },
            Self::Variable { name, .. } => {
                out.push_str(&format!("Variable: {name}\n"));
            },
            Self::BinaryOp { op, left, right, .. } => {
                out.push_str(&format!("BinaryOp: {op}\n"));
                left.write_tree(out, indent + 1);
                right.write_tree(out, indent + 1);
            },
            Self::Assignment { name, value, .. } => {
                out.push_str(&format!("Assignment: {name}\n"));
                value.write_tree(out, indent + 1);
            },
        }
    }
}
