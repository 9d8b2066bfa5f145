//! AST Visitor Pattern
//!
//! Provides generic traversal of expression trees stored in an
//! [`ExprArena`]. The visitor can mutate its own state during traversal,
//! but the tree itself remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children
//! in source order. Override `visit_expr` to add behavior at each node.
//!
//! # Example
//!
//! ```
//! use cmm_ir::visitor::{walk_expr, Visitor};
//! use cmm_ir::{Expr, ExprArena, ExprId, ExprKind, Span};
//!
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
//!         if matches!(arena.get_expr(id).kind, ExprKind::Int(_) | ExprKind::Bool(_)) {
//!             self.count += 1;
//!         }
//!         walk_expr(self, id, arena);
//!     }
//! }
//!
//! let mut arena = ExprArena::new();
//! let inner = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
//! let root = arena.alloc_expr(Expr::new(ExprKind::Paren(inner), Span::DUMMY));
//!
//! let mut counter = CountLiterals { count: 0 };
//! counter.visit_expr(root, &arena);
//! assert_eq!(counter.count, 1);
//! ```

use crate::{ExprArena, ExprId, ExprKind};

/// AST Visitor trait.
pub trait Visitor<'ast> {
    /// Visit an expression.
    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        walk_expr(self, id, arena);
    }
}

/// Visit every immediate child of `id`.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast ExprArena,
) {
    for_each_child(arena, id, |child| visitor.visit_expr(child, arena));
}

/// Call `f` with each immediate child of `id`, in source order.
pub fn for_each_child(arena: &ExprArena, id: ExprId, mut f: impl FnMut(ExprId)) {
    match &arena.get_expr(id).kind {
        ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Ident(_) => {}
        ExprKind::Binary { left, right, .. } => {
            f(*left);
            f(*right);
        }
        ExprKind::Unary { operand, .. } => f(*operand),
        ExprKind::Call { callee, args } => {
            f(*callee);
            for &arg in arena.get_expr_list(*args) {
                f(arg);
            }
        }
        ExprKind::Index { instance, index } => {
            f(*instance);
            f(*index);
        }
        ExprKind::Field { instance, .. } => f(*instance),
        ExprKind::ListSize { list } => f(*list),
        ExprKind::ListAppend { list, element } => {
            f(*list);
            f(*element);
        }
        ExprKind::Paren(inner) => f(*inner),
    }
}
