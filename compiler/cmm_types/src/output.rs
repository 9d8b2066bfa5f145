//! Result of checking one expression tree.

use cmm_diagnostic::ErrorGuaranteed;
use cmm_ir::{ExprArena, ExprId};

use crate::{ExprChecker, SymbolScope, Type, TypeCheckError};

/// Inferred types and recorded errors for one expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypedExpr {
    ty: Type,
    expr_types: Vec<Option<Type>>,
    errors: Vec<TypeCheckError>,
}

impl TypedExpr {
    pub(crate) fn new(ty: Type, expr_types: Vec<Option<Type>>, errors: Vec<TypeCheckError>) -> Self {
        TypedExpr {
            ty,
            expr_types,
            errors,
        }
    }

    /// Type of the root expression.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Type inferred for `expr_id`, or `None` if it is not part of the
    /// checked tree.
    pub fn type_of(&self, expr_id: ExprId) -> Option<&Type> {
        self.expr_types.get(expr_id.index())?.as_ref()
    }

    /// Errors in the order they were found (children before parents).
    pub fn errors(&self) -> &[TypeCheckError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Proof that at least one error was recorded.
    pub fn error_guarantee(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.errors.len())
    }

    pub fn into_errors(self) -> Vec<TypeCheckError> {
        self.errors
    }
}

/// Check the expression tree rooted at `root`.
///
/// Never fails: an ill-typed tree yields `NoType` somewhere and one error per
/// root cause.
#[tracing::instrument(level = "debug", skip(arena, scope))]
pub fn check_expr(arena: &ExprArena, scope: &dyn SymbolScope, root: ExprId) -> TypedExpr {
    let mut checker = ExprChecker::new(arena, scope);
    let ty = checker.infer(root);
    tracing::debug!(ty = ?ty, errors = checker.errors().len(), "checked expression");
    checker.finish(ty)
}

#[cfg(test)]
mod tests;
