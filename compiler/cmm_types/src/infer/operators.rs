//! Operator inference: binary and unary operators.

use cmm_ir::{BinaryOp, ExprId, UnaryOp};

use super::{infer_expr, ExprChecker};
use crate::{Type, TypeErrorKind};

/// Infer the type of a binary operation.
///
/// An `int` on either side selects the integer rules, then a `bool` on
/// either side selects the boolean rules; only then are composite operands
/// considered. A mixed `int`/`bool` pair is therefore judged by the integer
/// rules.
pub(crate) fn infer_binary(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: BinaryOp,
    left: ExprId,
    right: ExprId,
) -> Type {
    let left_ty = infer_expr(checker, left);
    let right_ty = infer_expr(checker, right);

    if left_ty.is_int() || right_ty.is_int() {
        infer_int_operands(checker, expr_id, op, &left_ty, &right_ty)
    } else if left_ty.is_bool() || right_ty.is_bool() {
        infer_bool_operands(checker, expr_id, op, &left_ty, &right_ty)
    } else {
        infer_composite_operands(checker, expr_id, op, &left_ty, &right_ty)
    }
}

fn infer_int_operands(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: BinaryOp,
    left: &Type,
    right: &Type,
) -> Type {
    if !(left.is_int() && right.is_int()) {
        return mismatched_operands(checker, expr_id, op, left, right);
    }
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => Type::Int,
        BinaryOp::Eq | BinaryOp::Gt | BinaryOp::Lt => Type::Bool,
        BinaryOp::Assign => Type::Void,
        BinaryOp::And | BinaryOp::Or => unsupported(checker, expr_id, op),
    }
}

fn infer_bool_operands(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: BinaryOp,
    left: &Type,
    right: &Type,
) -> Type {
    if !(left.is_bool() && right.is_bool()) {
        return mismatched_operands(checker, expr_id, op, left, right);
    }
    match op {
        BinaryOp::And | BinaryOp::Or | BinaryOp::Eq => Type::Bool,
        BinaryOp::Assign => Type::Void,
        BinaryOp::Add
        | BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Gt
        | BinaryOp::Lt => unsupported(checker, expr_id, op),
    }
}

/// Neither side is `int` or `bool`: only `eq` and `assign` between operands
/// of the same composite kind are meaningful.
fn infer_composite_operands(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: BinaryOp,
    left: &Type,
    right: &Type,
) -> Type {
    if left.is_no_type() || right.is_no_type() {
        return checker.suppress(expr_id);
    }
    let same_kind = |is_kind: fn(&Type) -> bool| is_kind(left) && is_kind(right);
    match op {
        BinaryOp::Eq if same_kind(Type::is_fptr) || same_kind(Type::is_struct) => Type::Bool,
        BinaryOp::Assign
            if same_kind(Type::is_fptr) || same_kind(Type::is_struct) || same_kind(Type::is_list) =>
        {
            Type::Void
        }
        _ => unsupported(checker, expr_id, op),
    }
}

/// One side has the required primitive type and the other does not.
fn mismatched_operands(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: BinaryOp,
    left: &Type,
    right: &Type,
) -> Type {
    if left.is_no_type() || right.is_no_type() {
        checker.suppress(expr_id)
    } else {
        unsupported(checker, expr_id, op)
    }
}

fn unsupported(checker: &mut ExprChecker<'_>, expr_id: ExprId, op: BinaryOp) -> Type {
    checker.report(
        expr_id,
        TypeErrorKind::UnsupportedOperandType {
            operator: op.name(),
        },
    )
}

/// Infer the type of a unary operation.
///
/// Only a known wrong primitive is reported (`not` on `int`, `minus` on
/// `bool`). Any other operand type yields `NoType` silently.
pub(crate) fn infer_unary(
    checker: &mut ExprChecker<'_>,
    expr_id: ExprId,
    op: UnaryOp,
    operand: ExprId,
) -> Type {
    let operand_ty = infer_expr(checker, operand);
    match (op, &operand_ty) {
        (UnaryOp::Not, Type::Bool) => Type::Bool,
        (UnaryOp::Minus, Type::Int) => Type::Int,
        (UnaryOp::Not, Type::Int) | (UnaryOp::Minus, Type::Bool) => checker.report(
            expr_id,
            TypeErrorKind::UnsupportedOperandType {
                operator: op.name(),
            },
        ),
        (_, Type::NoType) => checker.suppress(expr_id),
        _ => checker.untyped(expr_id, "unary operand is not `int` or `bool`"),
    }
}
