//! Cmm IR - Intermediate Representation Types
//!
//! This crate contains the core data structures shared by the Cmm compiler
//! front end:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Expression nodes (`Expr`, `ExprKind`) and their operators
//! - Arena allocation for expressions
//! - A `Visitor` for walking expression trees
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No Box<Expr>, use ExprId(u32) indices
//!
//! Every type is `Clone + Eq + Hash + Debug` so trees and their
//! analysis results can be compared and cached freely.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
