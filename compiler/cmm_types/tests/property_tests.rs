//! Property-based tests for the expression checker.
//!
//! Generates random expression trees over a fixed scope (well-typed and
//! ill-typed alike) and verifies:
//! 1. Parenthesization is transparent: `(e)` has the type and errors of `e`
//! 2. Suppression: a rule never reports because an operand it judges is
//!    already `NoType`, and reports at most one error of its own
//! 3. Every node of the tree receives a type

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use cmm_ir::visitor::for_each_child;
use cmm_ir::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Span, StringInterner, UnaryOp};
use cmm_types::{check_expr, Scope, StructDef, Type, TypeErrorKind};
use proptest::prelude::*;

// -- Tree Generation Strategies --

const BINARY_OPS: &[BinaryOp] = &[
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Eq,
    BinaryOp::Gt,
    BinaryOp::Lt,
    BinaryOp::And,
    BinaryOp::Or,
    BinaryOp::Assign,
];

const UNARY_OPS: &[UnaryOp] = &[UnaryOp::Minus, UnaryOp::Not];

/// Declared names plus one that is never declared.
const NAMES: &[&str] = &["n", "b", "p", "xs", "flags", "points", "grid", "f", "g", "ghost"];

const MEMBERS: &[&str] = &["x", "y", "z"];

#[derive(Clone, Debug)]
enum Shape {
    Int(i64),
    Bool(bool),
    Ident(&'static str),
    Binary(BinaryOp, Box<Shape>, Box<Shape>),
    Unary(UnaryOp, Box<Shape>),
    Call(Box<Shape>, Vec<Shape>),
    Index(Box<Shape>, Box<Shape>),
    Field(Box<Shape>, &'static str),
    Size(Box<Shape>),
    Append(Box<Shape>, Box<Shape>),
    Paren(Box<Shape>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        (-100i64..100).prop_map(Shape::Int),
        any::<bool>().prop_map(Shape::Bool),
        prop::sample::select(NAMES).prop_map(Shape::Ident),
    ];
    leaf.prop_recursive(6, 64, 3, |inner| {
        prop_oneof![
            (prop::sample::select(BINARY_OPS), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Shape::Binary(op, Box::new(l), Box::new(r))),
            (prop::sample::select(UNARY_OPS), inner.clone())
                .prop_map(|(op, e)| Shape::Unary(op, Box::new(e))),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| Shape::Call(Box::new(callee), args)),
            (inner.clone(), inner.clone())
                .prop_map(|(l, i)| Shape::Index(Box::new(l), Box::new(i))),
            (inner.clone(), prop::sample::select(MEMBERS))
                .prop_map(|(e, m)| Shape::Field(Box::new(e), m)),
            inner.clone().prop_map(|e| Shape::Size(Box::new(e))),
            (inner.clone(), inner.clone())
                .prop_map(|(l, e)| Shape::Append(Box::new(l), Box::new(e))),
            inner.prop_map(|e| Shape::Paren(Box::new(e))),
        ]
    })
}

// -- Lowering --

struct Lowering<'a> {
    arena: ExprArena,
    interner: &'a StringInterner,
    offset: u32,
}

impl Lowering<'_> {
    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let start = self.offset;
        self.offset += 1;
        self.arena.alloc_expr(Expr::new(kind, Span::new(start, start + 1)))
    }

    fn lower(&mut self, shape: &Shape) -> ExprId {
        let kind = match shape {
            Shape::Int(v) => ExprKind::Int(*v),
            Shape::Bool(v) => ExprKind::Bool(*v),
            Shape::Ident(name) => ExprKind::Ident(self.interner.intern(name)),
            Shape::Binary(op, l, r) => ExprKind::Binary {
                op: *op,
                left: self.lower(l),
                right: self.lower(r),
            },
            Shape::Unary(op, e) => ExprKind::Unary {
                op: *op,
                operand: self.lower(e),
            },
            Shape::Call(callee, args) => {
                let callee = self.lower(callee);
                let ids: Vec<_> = args.iter().map(|a| self.lower(a)).collect();
                ExprKind::Call {
                    callee,
                    args: self.arena.alloc_expr_list(ids),
                }
            }
            Shape::Index(l, i) => ExprKind::Index {
                instance: self.lower(l),
                index: self.lower(i),
            },
            Shape::Field(e, member) => ExprKind::Field {
                instance: self.lower(e),
                member: self.interner.intern(member),
            },
            Shape::Size(e) => ExprKind::ListSize {
                list: self.lower(e),
            },
            Shape::Append(l, e) => ExprKind::ListAppend {
                list: self.lower(l),
                element: self.lower(e),
            },
            Shape::Paren(e) => ExprKind::Paren(self.lower(e)),
        };
        self.alloc(kind)
    }
}

fn scope(interner: &StringInterner) -> Scope {
    let mut scope = Scope::new();
    let point = interner.intern("Point");
    let fields = [
        (interner.intern("x"), Type::Int),
        (interner.intern("y"), Type::Bool),
    ];
    scope
        .declare_struct(StructDef::new(point, fields).unwrap())
        .unwrap();
    let vars = [
        ("n", Type::Int),
        ("b", Type::Bool),
        ("p", Type::Struct(point)),
        ("xs", Type::list(Type::Int)),
        ("flags", Type::list(Type::Bool)),
        ("points", Type::list(Type::Struct(point))),
        ("grid", Type::list(Type::list(Type::Int))),
    ];
    for (name, ty) in vars {
        scope.declare_var(interner.intern(name), ty).unwrap();
    }
    scope
        .declare_function(interner.intern("f"), vec![Type::Int], Type::Bool)
        .unwrap();
    scope
        .declare_function(interner.intern("g"), vec![], Type::list(Type::Int))
        .unwrap();
    scope
}

fn lower(shape: &Shape, interner: &StringInterner) -> (ExprArena, ExprId) {
    let mut lowering = Lowering {
        arena: ExprArena::new(),
        interner,
        offset: 0,
    };
    let root = lowering.lower(shape);
    (lowering.arena, root)
}

fn children(arena: &ExprArena, id: ExprId) -> Vec<ExprId> {
    let mut children = Vec::new();
    for_each_child(arena, id, |child| children.push(child));
    children
}

/// Children whose `NoType` may not excuse a report from the parent rule:
/// an append still judges its list when the element is broken, and a call
/// still judges its callee, its arity and every argument that is not broken.
fn independently_judged(arena: &ExprArena, id: ExprId, kind: &TypeErrorKind) -> bool {
    match (&arena.get_expr(id).kind, kind) {
        (ExprKind::ListAppend { .. }, TypeErrorKind::AppendToNonList)
        | (ExprKind::Call { .. }, TypeErrorKind::CallOnNonFunction) => true,
        (ExprKind::Call { .. }, TypeErrorKind::ArgumentsMismatch { expected, found }) => {
            expected.len() != found.len()
                || expected
                    .iter()
                    .zip(found)
                    .any(|(param, arg)| !arg.is_no_type() && param != arg)
        }
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn paren_is_transparent(shape in shape_strategy()) {
        let interner = StringInterner::new();
        let scope = scope(&interner);
        let (mut arena, root) = lower(&shape, &interner);
        let wrapped = arena.alloc_expr(Expr::new(ExprKind::Paren(root), Span::DUMMY));

        let bare = check_expr(&arena, &scope, root);
        let paren = check_expr(&arena, &scope, wrapped);
        prop_assert_eq!(paren.ty(), bare.ty());
        prop_assert_eq!(paren.errors(), bare.errors());
    }

    #[test]
    fn every_node_is_typed(shape in shape_strategy()) {
        let interner = StringInterner::new();
        let scope = scope(&interner);
        let (arena, root) = lower(&shape, &interner);
        let typed = check_expr(&arena, &scope, root);
        for index in 0..arena.len() {
            let id = ExprId::new(u32::try_from(index).unwrap());
            prop_assert!(typed.type_of(id).is_some());
        }
    }

    #[test]
    fn no_type_suppresses_follow_on_errors(shape in shape_strategy()) {
        let interner = StringInterner::new();
        let scope = scope(&interner);
        let (arena, root) = lower(&shape, &interner);
        let typed = check_expr(&arena, &scope, root);

        for index in 0..arena.len() {
            let id = ExprId::new(u32::try_from(index).unwrap());
            let kids = children(&arena, id);
            let subtree_errors = check_expr(&arena, &scope, id).into_errors();
            let inherited: usize = kids
                .iter()
                .map(|&kid| check_expr(&arena, &scope, kid).errors().len())
                .sum();
            // Children are checked first, so the node's own errors come last
            let own = &subtree_errors[inherited..];
            prop_assert!(own.len() <= 1, "{:?} reported {} errors", id, own.len());

            let Some(error) = own.first() else { continue };
            prop_assert_eq!(typed.type_of(id), Some(&Type::NoType));
            let broken_child = kids
                .iter()
                .any(|&kid| typed.type_of(kid) == Some(&Type::NoType));
            prop_assert!(
                !broken_child || independently_judged(&arena, id, &error.kind),
                "{:?} reported {:?} against a NoType operand",
                id,
                error.kind
            );
        }
    }
}
