use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::lexer::tokens::{Number, TokenKind};

/// Operators that appear in unary and binary nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "/")]
    Slash,
}

impl Operator {
    /// Maps an operator token kind to its operator, if it is one.
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Minus => Some(Operator::Minus),
            TokenKind::Star => Some(Operator::Star),
            TokenKind::Slash => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expression tree.
///
/// Every node owns its children, so the tree can't share sub-nodes or form
/// cycles. Serializes with a `type` tag, e.g.
/// `{"type":"binary","operator":"+","left":{..},"right":{..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Expr {
    Literal {
        value: Number,
    },
    Identifier {
        name: String,
    },
    Unary {
        operator: Operator,
        operand: Box<Expr>,
    },
    Binary {
        operator: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(value: Number) -> Self {
        Expr::Literal { value }
    }

    pub fn int(value: i64) -> Self {
        Expr::literal(Number::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::literal(Number::Float(value))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn unary(operator: Operator, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Literal { .. } | Expr::Identifier { .. } => 1,
            Expr::Unary { operand, .. } => 1 + operand.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Call { callee, arguments } => {
                1 + callee.node_count() + arguments.iter().map(Expr::node_count).sum::<usize>()
            }
        }
    }
}

// Fully parenthesized, so the shape of the tree is visible in one line
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal { value } => write!(f, "{}", value),
            Expr::Identifier { name } => write!(f, "{}", name),
            Expr::Unary { operator, operand } => write!(f, "({}{})", operator, operand),
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
