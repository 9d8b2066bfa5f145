//! Stable codes printed with every Cmm diagnostic.

use std::fmt;

/// Code attached to a diagnostic.
///
/// `E2xxx` codes are type errors found in a Cmm expression. `E9xxx` codes
/// are produced by the reporting layer itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Operator applied to operands of the wrong type.
    E2001,
    /// List index is not an `int`.
    E2002,
    /// Indexing a value that is not a list.
    E2003,
    /// Member access on a value that is not a struct.
    E2004,
    /// Struct has no member with that name.
    E2005,
    /// `append` target is not a list.
    E2006,
    /// Appended element does not match the list element type.
    E2007,
    /// Identifier not declared in any scope.
    E2008,
    /// Call target is not a function pointer.
    E2009,
    /// Call arguments do not match the function pointer.
    E2010,
    /// `size` of a value that is not a list.
    E2011,
    /// Diagnostics were dropped at the error limit.
    E9001,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Whether the code reports a problem in the checked expression rather
    /// than in the reporting layer.
    pub fn is_type_error(self) -> bool {
        !matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
