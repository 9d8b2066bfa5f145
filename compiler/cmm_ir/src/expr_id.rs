//! Handles into an [`ExprArena`](crate::ExprArena).

use std::fmt;
use std::ops::Range;

/// Handle to one node of an expression arena.
///
/// Only meaningful for the arena that allocated it. Ordered by allocation,
/// so a child built before its parent has the smaller id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ExprId(u32);

crate::static_assert_size!(ExprId, 4);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Position in the arena, also usable to index per-node side tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Call arguments: a run of consecutive entries in the arena's argument
/// table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExprRange {
    start: u32,
    end: u32,
}

impl ExprRange {
    pub(crate) const fn new(start: u32, end: u32) -> Self {
        ExprRange { start, end }
    }

    pub(crate) fn indices(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}
