use cmm_ir::visitor::{walk_expr, Visitor};
use cmm_ir::{BinaryOp, Expr, ExprArena, ExprKind, Span, StringInterner};
use pretty_assertions::assert_eq;

use super::*;
use crate::{Scope, TypeErrorKind};

/// Collects every node reachable from a root.
struct CollectIds(Vec<ExprId>);

impl<'ast> Visitor<'ast> for CollectIds {
    fn visit_expr(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.0.push(id);
        walk_expr(self, id, arena);
    }
}

fn sample(arena: &mut ExprArena, interner: &StringInterner) -> ExprId {
    // (xs[0] + ghost) == size(xs)
    let xs = arena.alloc_expr(Expr::new(ExprKind::Ident(interner.intern("xs")), Span::new(1, 3)));
    let zero = arena.alloc_expr(Expr::new(ExprKind::Int(0), Span::new(4, 5)));
    let index = arena.alloc_expr(Expr::new(
        ExprKind::Index {
            instance: xs,
            index: zero,
        },
        Span::new(1, 6),
    ));
    let ghost = arena.alloc_expr(Expr::new(
        ExprKind::Ident(interner.intern("ghost")),
        Span::new(9, 14),
    ));
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: index,
            right: ghost,
        },
        Span::new(1, 14),
    ));
    let paren = arena.alloc_expr(Expr::new(ExprKind::Paren(sum), Span::new(0, 15)));
    let xs2 = arena.alloc_expr(Expr::new(
        ExprKind::Ident(interner.intern("xs")),
        Span::new(24, 26),
    ));
    let size = arena.alloc_expr(Expr::new(ExprKind::ListSize { list: xs2 }, Span::new(19, 27)));
    arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Eq,
            left: paren,
            right: size,
        },
        Span::new(0, 27),
    ))
}

fn scope(interner: &StringInterner) -> Scope {
    let mut scope = Scope::new();
    scope
        .declare_var(interner.intern("xs"), Type::list(Type::Int))
        .unwrap();
    scope
}

#[test]
fn test_every_node_has_exactly_one_type() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let root = sample(&mut arena, &interner);
    let typed = check_expr(&arena, &scope(&interner), root);

    let mut ids = CollectIds(Vec::new());
    ids.visit_expr(root, &arena);
    assert_eq!(ids.0.len(), arena.len());
    for id in ids.0 {
        assert!(typed.type_of(id).is_some(), "{id:?} has no type");
    }
}

#[test]
fn test_output_records_types_and_errors() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let root = sample(&mut arena, &interner);
    let typed = check_expr(&arena, &scope(&interner), root);

    assert_eq!(typed.ty(), &Type::NoType);
    assert_eq!(typed.type_of(ExprId::new(2)), Some(&Type::Int));
    assert_eq!(typed.type_of(ExprId::new(7)), Some(&Type::Int));
    assert_eq!(typed.type_of(ExprId::new(u32::MAX)), None);

    assert!(typed.has_errors());
    assert!(typed.error_guarantee().is_some());
    assert_eq!(
        typed.errors(),
        &[TypeCheckError::new(
            ExprId::new(3),
            Span::new(9, 14),
            TypeErrorKind::UnknownIdentifier {
                name: interner.intern("ghost")
            },
        )]
    );
    assert_eq!(typed.into_errors().len(), 1);
}

#[test]
fn test_clean_tree_has_no_guarantee() {
    let mut arena = ExprArena::new();
    let root = arena.alloc_expr(Expr::new(ExprKind::Bool(true), Span::new(0, 4)));
    let typed = check_expr(&arena, &Scope::new(), root);
    assert_eq!(typed.ty(), &Type::Bool);
    assert!(!typed.has_errors());
    assert!(typed.error_guarantee().is_none());
}

#[test]
fn test_nodes_outside_tree_are_untyped() {
    let mut arena = ExprArena::new();
    let unrelated = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(0, 1)));
    let root = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(2, 3)));
    let typed = check_expr(&arena, &Scope::new(), root);
    assert_eq!(typed.type_of(root), Some(&Type::Int));
    assert_eq!(typed.type_of(unrelated), None);
}
