//! Binary and Unary Operators

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    Gt,
    Lt,

    // Logical
    And,
    Or,

    // Assignment (typed `void`)
    Assign,
}

impl BinaryOp {
    /// Stable operator name, used as the payload of operand diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mult",
            BinaryOp::Div => "div",
            BinaryOp::Eq => "eq",
            BinaryOp::Gt => "gt",
            BinaryOp::Lt => "lt",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Assign => "assign",
        }
    }

    /// Source-level spelling.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Assign => "=",
        }
    }

    /// `+ - * /`
    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    /// `and`, `or`
    pub const fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation.
    Minus,
    /// Logical negation.
    Not,
}

impl UnaryOp {
    /// Stable operator name, used as the payload of operand diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Minus => "minus",
            UnaryOp::Not => "not",
        }
    }

    /// Source-level spelling.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Not => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
