//! List and struct access: indexing, member access, size and append.

use cmm_ir::{ExprId, Name};

use super::{infer_expr, ExprChecker};
use crate::{Type, TypeErrorKind};

/// Infer the type of `instance[index]`.
pub(crate) fn infer_index(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    instance: ExprId,
    index: ExprId,
) -> Type {
    let instance_ty = infer_expr(checker, instance);
    let index_ty = infer_expr(checker, index);

    match (&instance_ty, &index_ty) {
        (Type::List(element), Type::Int) => (**element).clone(),
        (Type::List(_), Type::NoType) => checker.suppress(expr_id),
        (Type::List(_), _) => checker.report(index, TypeErrorKind::ListIndexNotInt),
        (Type::NoType, _) => checker.suppress(expr_id),
        (_, Type::Int) => checker.report(expr_id, TypeErrorKind::AccessByIndexOnNonList),
        (_, Type::NoType) => checker.suppress(expr_id),
        _ => checker.untyped(expr_id, "neither instance nor index is usable"),
    }
}

/// Infer the type of `instance.member`.
pub(crate) fn infer_field(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    instance: ExprId,
    member: Name,
) -> Type {
    let instance_ty = infer_expr(checker, instance);
    let struct_name = match instance_ty {
        Type::Struct(name) => name,
        Type::NoType => return checker.suppress(expr_id),
        _ => return checker.report(expr_id, TypeErrorKind::AccessOnNonStruct),
    };

    let Some(def) = checker.scope().lookup_struct(struct_name) else {
        tracing::debug!(?struct_name, "struct declaration not found");
        return Type::NoType;
    };
    match def.field(member) {
        Some(ty) => ty.clone(),
        None => checker.report(
            expr_id,
            TypeErrorKind::StructMemberNotFound {
                struct_name,
                member,
            },
        ),
    }
}

/// Infer the type of `size(list)`.
pub(crate) fn infer_size(checker: &mut ExprChecker<'_>, expr_id: ExprId, list: ExprId) -> Type {
    match infer_expr(checker, list) {
        Type::List(_) => Type::Int,
        Type::NoType => checker.suppress(expr_id),
        _ => checker.report(list, TypeErrorKind::SizeOfNonList),
    }
}

/// Infer the type of `append(list, element)`.
///
/// The element is always inferred so its own errors surface, even when the
/// list argument is not a list.
pub(crate) fn infer_append(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    list: ExprId,
    element: ExprId,
) -> Type {
    let list_ty = infer_expr(checker, list);
    let element_ty = infer_expr(checker, element);

    let list_element = match &list_ty {
        Type::List(list_element) => list_element,
        Type::NoType => return checker.suppress(expr_id),
        _ => return checker.report(list, TypeErrorKind::AppendToNonList),
    };

    if element_ty.same_element_kind(list_element) {
        Type::Void
    } else if list_element.is_no_type() || element_ty.is_no_type() {
        checker.suppress(expr_id)
    } else {
        checker.report(element, TypeErrorKind::NewElementTypeNotMatchListType)
    }
}
