//! Arena allocation for expressions.
//!
//! Expressions are stored contiguously and referenced by `ExprId`.
//! Argument lists are flattened into a side table and referenced by
//! `ExprRange`.

use crate::{Expr, ExprId, ExprRange, Span};

/// Contiguous storage for one or more expression trees.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` expressions.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Allocate an argument list, returning its range.
    ///
    /// # Panics
    /// Panics if the argument table exceeds `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.table_len();
        self.expr_lists.extend(ids);
        ExprRange::new(start, self.table_len())
    }

    fn table_len(&self) -> u32 {
        u32::try_from(self.expr_lists.len())
            .unwrap_or_else(|_| panic!("argument table exceeded {} entries", u32::MAX))
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if the ID does not belong to this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get the IDs of an argument list.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    /// Span of an expression.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get_expr(id).span
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if the arena has no expressions.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
