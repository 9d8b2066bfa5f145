//! Expression type checking for Cmm.
//!
//! Infers a type for every node of an expression tree, or records a
//! structured error and recovers with [`Type::NoType`] so checking of the
//! surrounding program continues without cascades of follow-on errors.
//!
//! # Error Recovery
//!
//! `NoType` means "already explained". A rule that receives a `NoType`
//! operand never reports against it and never guesses a positive type; it
//! returns `NoType` again. At most one error is recorded per root cause.
//!
//! # Usage
//!
//! ```
//! use cmm_ir::{Expr, ExprArena, ExprKind, Span, StringInterner};
//! use cmm_types::{check_expr, Scope, Type};
//!
//! let interner = StringInterner::new();
//! let mut scope = Scope::new();
//! scope.declare_var(interner.intern("xs"), Type::list(Type::Int)).unwrap();
//!
//! let mut arena = ExprArena::new();
//! let xs = arena.alloc_expr(Expr::new(ExprKind::Ident(interner.intern("xs")), Span::new(0, 2)));
//! let zero = arena.alloc_expr(Expr::new(ExprKind::Int(0), Span::new(3, 4)));
//! let index = arena.alloc_expr(Expr::new(
//!     ExprKind::Index { instance: xs, index: zero },
//!     Span::new(0, 5),
//! ));
//!
//! let typed = check_expr(&arena, &scope, index);
//! assert_eq!(typed.ty(), &Type::Int);
//! assert!(!typed.has_errors());
//! ```

mod error;
mod infer;
mod output;
mod scope;
mod ty;

pub use error::{TypeCheckError, TypeErrorKind};
pub use infer::ExprChecker;
pub use output::{check_expr, TypedExpr};
pub use scope::{Scope, ScopeError, StructDef, SymbolScope};
pub use ty::Type;
