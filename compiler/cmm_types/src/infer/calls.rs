//! Identifier references and function pointer calls.

use cmm_ir::{ExprId, ExprRange, Name};

use super::{infer_expr, ExprChecker};
use crate::{Type, TypeErrorKind};

/// Infer the type of a variable or function name.
pub(crate) fn infer_ident(checker: &mut ExprChecker<'_>, expr_id: ExprId, name: Name) -> Type {
    match checker.scope().lookup_var(name) {
        Some(ty) => ty.clone(),
        None => checker.report(expr_id, TypeErrorKind::UnknownIdentifier { name }),
    }
}

/// Infer the type of `callee(args...)`.
///
/// The callee and every argument are inferred before the signature is
/// consulted. A `NoType` argument never counts as a mismatch on its own, but
/// it does make the call's result unknowable.
pub(crate) fn infer_call(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    callee: ExprId,
    args: ExprRange,
) -> Type {
    let callee_ty = infer_expr(checker, callee);
    let arg_ids = checker.arena().get_expr_list(args);
    let arg_types: Vec<Type> = arg_ids.iter().map(|&arg| infer_expr(checker, arg)).collect();

    let (ret, params) = match callee_ty {
        Type::Fptr { ret, args } => (ret, args),
        Type::NoType => return checker.suppress(expr_id),
        _ => return checker.report(callee, TypeErrorKind::CallOnNonFunction),
    };

    let arity_matches = params.len() == arg_types.len();
    let types_match = params
        .iter()
        .zip(&arg_types)
        .all(|(param, arg)| arg.is_no_type() || arg == param);
    if !(arity_matches && types_match) {
        return checker.report(
            expr_id,
            TypeErrorKind::ArgumentsMismatch {
                expected: params,
                found: arg_types,
            },
        );
    }

    if arg_types.iter().any(Type::is_no_type) {
        checker.suppress(expr_id)
    } else {
        *ret
    }
}
