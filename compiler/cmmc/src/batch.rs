//! Batch checking of independent expression trees.

use cmm_ir::{ExprArena, ExprId};
use cmm_types::{check_expr, SymbolScope, TypedExpr};
use rayon::prelude::*;

use crate::CheckConfig;

/// One independent expression tree, such as the initializer of a top-level
/// declaration.
#[derive(Clone, Debug)]
pub struct CheckUnit {
    pub arena: ExprArena,
    pub root: ExprId,
}

impl CheckUnit {
    pub fn new(arena: ExprArena, root: ExprId) -> Self {
        CheckUnit { arena, root }
    }

    fn check(&self, scope: &dyn SymbolScope) -> TypedExpr {
        check_expr(&self.arena, scope, self.root)
    }
}

/// Check every unit against `scope`. Results are in input order.
///
/// Units share nothing but the read-only scope, so they are checked on a
/// scoped thread pool when `config.parallel` is set.
#[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
pub fn check_units(
    units: &[CheckUnit],
    scope: &(dyn SymbolScope + Sync),
    config: &CheckConfig,
) -> Vec<TypedExpr> {
    if config.parallel && units.len() > 1 {
        check_parallel(units, scope, config.stack_size)
    } else {
        check_sequential(units, scope)
    }
}

fn check_sequential(units: &[CheckUnit], scope: &dyn SymbolScope) -> Vec<TypedExpr> {
    units.iter().map(|unit| unit.check(scope)).collect()
}

/// Uses `build_scoped` so the pool is torn down before returning, avoiding
/// the global pool's atexit handlers.
fn check_parallel(
    units: &[CheckUnit],
    scope: &(dyn SymbolScope + Sync),
    stack_size: usize,
) -> Vec<TypedExpr> {
    rayon::ThreadPoolBuilder::new()
        .stack_size(stack_size)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                units
                    .par_iter()
                    .map(|unit| unit.check(scope))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), checking sequentially");
            check_sequential(units, scope)
        })
}
