//! Abstract Syntax Tree (AST) definitions for DWISLPY.

use dwislpy_core::{Span, Type};
use std::fmt;

/// A complete DWISLPY program (compilation unit).
///
/// Definitions are kept in source order; the main script is every top-level
/// statement that is not part of a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub definitions: Vec<Definition>,
    pub main: Block,
    pub span: Span,
}

impl Program {
    /// Looks up a definition by name (first match in source order).
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| def.name == name)
    }
}

/// Function or procedure definition: `def name(params) -> type: body`.
///
/// A definition whose return type is `None` is a procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: Type,
    pub body: Block,
    pub span: Span,
}

impl Definition {
    #[must_use]
    pub fn is_procedure(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Formal parameter: `name: type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
    pub span: Span,
}

/// A block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Statements in DWISLPY.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Assignment to an introduced variable: `name = expr`
    Assignment {
        name: String,
        value: Expression,
        span: Span,
    },

    /// Declaration with initializer: `name: type = expr`
    Declaration {
        name: String,
        var_type: Type,
        initializer: Expression,
        span: Span,
    },

    /// `pass`
    Pass { span: Span },

    /// `print(expr)`
    Print { value: Expression, span: Span },

    /// `if cond: ... [else: ...]`
    If {
        condition: Expression,
        then_block: Block,
        else_block: Option<Block>,
        span: Span,
    },

    /// `while cond: ...`
    While {
        condition: Expression,
        body: Block,
        span: Span,
    },

    /// Value return: `return expr`
    Return { value: Expression, span: Span },

    /// No-value return from a procedure: `return`
    ProcedureReturn { span: Span },

    /// Procedure call in statement position: `name(args...)`
    ProcedureCall {
        callee: String,
        arguments: Vec<Expression>,
        span: Span,
    },
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Assignment { span, .. }
            | Self::Declaration { span, .. }
            | Self::Pass { span }
            | Self::Print { span, .. }
            | Self::If { span, .. }
            | Self::While { span, .. }
            | Self::Return { span, .. }
            | Self::ProcedureReturn { span }
            | Self::ProcedureCall { span, .. } => *span,
        }
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
    None,
}

impl Literal {
    /// The intrinsic type of the literal.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Literal::Int(_) => Type::Int,
            Literal::Str(_) => Type::Str,
            Literal::Bool(_) => Type::Bool,
            Literal::None => Type::None,
        }
    }
}

/// Expressions in DWISLPY.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal: `42`, `"text"`, `True`, `None`
    Literal { value: Literal, span: Span },

    /// Variable reference
    Variable { name: String, span: Span },

    /// Binary operation: `left op right`
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
        span: Span,
    },

    /// Logical negation: `not expr`
    Not { operand: Box<Expression>, span: Span },

    /// `input(prompt)`
    Input { prompt: Box<Expression>, span: Span },

    /// `int(expr)`
    IntConvert { operand: Box<Expression>, span: Span },

    /// `str(expr)`
    StrConvert { operand: Box<Expression>, span: Span },

    /// Function call in expression position: `name(args...)`
    Call {
        callee: String,
        arguments: Vec<Expression>,
        span: Span,
    },
}

impl Expression {
    /// Builds prefix `-operand`, written as `0 - operand`.
    ///
    /// The implicit zero gets an empty span at the minus sign, which is what
    /// [`Expression::as_negation`] recognizes.
    #[must_use]
    pub fn negation(minus: Span, operand: Expression) -> Self {
        let span = minus.merge(operand.span());
        let zero = Expression::Literal {
            value: Literal::Int(0),
            span: Span::new(minus.start, minus.start),
        };
        Expression::Binary {
            left: Box::new(zero),
            operator: BinaryOperator::Subtract,
            right: Box::new(operand),
            span,
        }
    }

    /// The operand of a prefix `-`, if this node came from one.
    #[must_use]
    pub fn as_negation(&self) -> Option<&Expression> {
        match self {
            Self::Binary {
                left,
                operator: BinaryOperator::Subtract,
                right,
                ..
            } => match left.as_ref() {
                Self::Literal {
                    value: Literal::Int(0),
                    span,
                } if span.is_empty() => Some(right),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::Variable { span, .. }
            | Self::Binary { span, .. }
            | Self::Not { span, .. }
            | Self::Input { span, .. }
            | Self::IntConvert { span, .. }
            | Self::StrConvert { span, .. }
            | Self::Call { span, .. } => *span,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    IntDivide,
    Modulo,

    // Comparison
    Less,
    LessEqual,
    Equal,

    // Logical
    And,
    Or,
}

impl BinaryOperator {
    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::IntDivide => "//",
            Self::Modulo => "%",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Equal => "==",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
