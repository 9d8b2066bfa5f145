//! Expression Types
//!
//! Core expression nodes and variants.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name, Span};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// All children are indices, not boxes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    // ===== Literals (no children) =====
    /// Integer literal: 42
    Int(i64),

    /// Boolean literal: true, false
    Bool(bool),

    // ===== References =====
    /// Variable or function name
    Ident(Name),

    // ===== Operators =====
    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    // ===== Calls and access =====
    /// Function pointer call: callee(args)
    Call { callee: ExprId, args: ExprRange },

    /// List index: instance[index]
    Index { instance: ExprId, index: ExprId },

    /// Struct member access: instance.member
    Field { instance: ExprId, member: Name },

    /// List size query: size(list)
    ListSize { list: ExprId },

    /// List append: append(list, element)
    ListAppend { list: ExprId, element: ExprId },

    /// Parenthesized expression: (inner)
    Paren(ExprId),
}
