//! Expression AST.
//!
//! Children are `ExprId` indices into an [`ExprArena`](crate::ExprArena);
//! a tree never shares a node between two parents.

mod expr;
mod operators;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
