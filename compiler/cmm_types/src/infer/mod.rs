//! Expression type inference.
//!
//! Dispatches on `ExprKind` to the per-variant typing rules:
//!
//! - Literals -> direct primitive type
//! - Identifiers and calls -> scope lookup, function pointer signatures
//! - Operators -> binary and unary operator rules
//! - Access -> list index, struct member, list size, list append
//! - Parentheses -> transparent
//!
//! Children are always inferred before the rule for their parent runs, so
//! every node of the tree receives exactly one type.

mod access;
mod calls;
mod operators;

use cmm_ir::{ExprArena, ExprId, ExprKind};
use cmm_stack::ensure_sufficient_stack;

use access::{infer_append, infer_field, infer_index, infer_size};
use calls::{infer_call, infer_ident};
use operators::{infer_binary, infer_unary};

use crate::{SymbolScope, Type, TypeCheckError, TypeErrorKind, TypedExpr};

/// Tree-walking checker for one expression tree.
///
/// Holds a read-only view of the arena and the symbol scope. Errors are
/// recorded into the checker, never thrown.
pub struct ExprChecker<'a> {
    arena: &'a ExprArena,
    scope: &'a dyn SymbolScope,
    /// Inferred type per node, indexed by `ExprId`.
    expr_types: Vec<Option<Type>>,
    errors: Vec<TypeCheckError>,
}

impl<'a> ExprChecker<'a> {
    pub fn new(arena: &'a ExprArena, scope: &'a dyn SymbolScope) -> Self {
        ExprChecker {
            arena,
            scope,
            expr_types: vec![None; arena.len()],
            errors: Vec::new(),
        }
    }

    /// Infer the type of `expr_id` and all of its children.
    pub fn infer(&mut self, expr_id: ExprId) -> Type {
        infer_expr(self, expr_id)
    }

    /// Errors recorded so far, in the order they were found.
    pub fn errors(&self) -> &[TypeCheckError] {
        &self.errors
    }

    /// Consume the checker, producing the result for a tree rooted at a node
    /// whose type is `ty`.
    pub fn finish(self, ty: Type) -> TypedExpr {
        TypedExpr::new(ty, self.expr_types, self.errors)
    }

    pub(crate) fn arena(&self) -> &'a ExprArena {
        self.arena
    }

    pub(crate) fn scope(&self) -> &'a dyn SymbolScope {
        self.scope
    }

    /// Record an error against `expr_id` and recover with `NoType`.
    pub(crate) fn report(&mut self, expr_id: ExprId, kind: TypeErrorKind) -> Type {
        let span = self.arena.span(expr_id);
        tracing::debug!(?expr_id, ?span, ?kind, "type error");
        self.errors.push(TypeCheckError::new(expr_id, span, kind));
        Type::NoType
    }

    /// Recover with `NoType` without reporting: an operand already did.
    pub(crate) fn suppress(&self, expr_id: ExprId) -> Type {
        tracing::debug!(?expr_id, "suppressed follow-on error");
        Type::NoType
    }

    /// Recover with `NoType` for an operand combination that has no rule
    /// and no error kind, when no operand failed first.
    pub(crate) fn untyped(&self, expr_id: ExprId, reason: &'static str) -> Type {
        tracing::debug!(?expr_id, reason, "no type and no error");
        Type::NoType
    }

    fn store_type(&mut self, expr_id: ExprId, ty: Type) {
        let index = expr_id.index();
        if index >= self.expr_types.len() {
            self.expr_types.resize(index + 1, None);
        }
        self.expr_types[index] = Some(ty);
    }
}

/// Infer the type of an expression.
#[tracing::instrument(level = "trace", skip(checker))]
pub(crate) fn infer_expr(checker: &mut ExprChecker<'_>, expr_id: ExprId) -> Type {
    ensure_sufficient_stack(|| infer_expr_inner(checker, expr_id))
}

fn infer_expr_inner(checker: &mut ExprChecker<'_>, expr_id: ExprId) -> Type {
    let expr = checker.arena().get_expr(expr_id);

    let ty = match &expr.kind {
        // Literals
        ExprKind::Int(_) => Type::Int,
        ExprKind::Bool(_) => Type::Bool,

        // References and calls
        ExprKind::Ident(name) => infer_ident(checker, expr_id, *name),
        ExprKind::Call { callee, args } => infer_call(checker, expr_id, *callee, *args),

        // Operators
        ExprKind::Binary { op, left, right } => infer_binary(checker, expr_id, *op, *left, *right),
        ExprKind::Unary { op, operand } => infer_unary(checker, expr_id, *op, *operand),

        // Access
        ExprKind::Index { instance, index } => infer_index(checker, expr_id, *instance, *index),
        ExprKind::Field { instance, member } => infer_field(checker, expr_id, *instance, *member),
        ExprKind::ListSize { list } => infer_size(checker, expr_id, *list),
        ExprKind::ListAppend { list, element } => infer_append(checker, expr_id, *list, *element),

        // Grouping
        ExprKind::Paren(inner) => infer_expr(checker, *inner),
    };

    checker.store_type(expr_id, ty.clone());
    ty
}
