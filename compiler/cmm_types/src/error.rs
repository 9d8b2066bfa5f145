//! Structured type errors.
//!
//! The checker records these as data. Rendering into a human-readable
//! [`Diagnostic`] happens only in [`TypeCheckError::to_diagnostic`].

use cmm_diagnostic::{Diagnostic, ErrorCode};
use cmm_ir::{ExprId, Name, Span, StringInterner};

use crate::Type;

/// A type error attached to the expression that caused it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeCheckError {
    /// Node the error is attached to.
    pub expr: ExprId,
    /// Source location of that node.
    pub span: Span,
    pub kind: TypeErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeErrorKind {
    /// Operand(s) of a binary or unary operator have an invalid type or
    /// combination. Carries the operator's stable name (`add`, `not`, ...).
    UnsupportedOperandType { operator: &'static str },
    /// List index expression is not an `int`.
    ListIndexNotInt,
    /// Index operator applied to a non-list instance.
    AccessByIndexOnNonList,
    /// Member access applied to a non-struct instance.
    AccessOnNonStruct,
    /// Member access on a struct naming an undeclared field.
    StructMemberNotFound { struct_name: Name, member: Name },
    /// First argument of `append` is not a list.
    AppendToNonList,
    /// Appended element kind disagrees with the list's element kind.
    NewElementTypeNotMatchListType,
    /// Name not declared in any enclosing scope.
    UnknownIdentifier { name: Name },
    /// Call on a value that is not a function pointer.
    CallOnNonFunction,
    /// Call arguments do not match the function pointer's parameters.
    ArgumentsMismatch { expected: Vec<Type>, found: Vec<Type> },
    /// `size` applied to a non-list value.
    SizeOfNonList,
}

impl TypeErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeErrorKind::UnsupportedOperandType { .. } => ErrorCode::E2001,
            TypeErrorKind::ListIndexNotInt => ErrorCode::E2002,
            TypeErrorKind::AccessByIndexOnNonList => ErrorCode::E2003,
            TypeErrorKind::AccessOnNonStruct => ErrorCode::E2004,
            TypeErrorKind::StructMemberNotFound { .. } => ErrorCode::E2005,
            TypeErrorKind::AppendToNonList => ErrorCode::E2006,
            TypeErrorKind::NewElementTypeNotMatchListType => ErrorCode::E2007,
            TypeErrorKind::UnknownIdentifier { .. } => ErrorCode::E2008,
            TypeErrorKind::CallOnNonFunction => ErrorCode::E2009,
            TypeErrorKind::ArgumentsMismatch { .. } => ErrorCode::E2010,
            TypeErrorKind::SizeOfNonList => ErrorCode::E2011,
        }
    }
}

impl TypeCheckError {
    pub fn new(expr: ExprId, span: Span, kind: TypeErrorKind) -> Self {
        TypeCheckError { expr, span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Render into a diagnostic. Names are resolved through `interner`.
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        let (message, label) = match &self.kind {
            TypeErrorKind::UnsupportedOperandType { operator } => (
                format!("unsupported operand type for `{operator}`"),
                "invalid operand types".to_string(),
            ),
            TypeErrorKind::ListIndexNotInt => (
                "list index must be of type `int`".to_string(),
                "index is not an `int`".to_string(),
            ),
            TypeErrorKind::AccessByIndexOnNonList => (
                "index access on a non-list value".to_string(),
                "not a list".to_string(),
            ),
            TypeErrorKind::AccessOnNonStruct => (
                "member access on a non-struct value".to_string(),
                "not a struct".to_string(),
            ),
            TypeErrorKind::StructMemberNotFound {
                struct_name,
                member,
            } => {
                let member = interner.lookup(*member);
                (
                    format!(
                        "struct `{}` has no member `{member}`",
                        interner.lookup(*struct_name)
                    ),
                    format!("unknown member `{member}`"),
                )
            }
            TypeErrorKind::AppendToNonList => (
                "cannot append to a non-list value".to_string(),
                "first argument is not a list".to_string(),
            ),
            TypeErrorKind::NewElementTypeNotMatchListType => (
                "new element type does not match list type".to_string(),
                "mismatched element".to_string(),
            ),
            TypeErrorKind::UnknownIdentifier { name } => (
                format!("unknown identifier `{}`", interner.lookup(*name)),
                "not found in this scope".to_string(),
            ),
            TypeErrorKind::CallOnNonFunction => (
                "call on a value that is not a function pointer".to_string(),
                "not callable".to_string(),
            ),
            TypeErrorKind::ArgumentsMismatch { .. } => (
                "arguments do not match function definition".to_string(),
                "in this call".to_string(),
            ),
            TypeErrorKind::SizeOfNonList => (
                "size of a non-list value".to_string(),
                "not a list".to_string(),
            ),
        };

        let diagnostic = Diagnostic::new(self.code(), self.span, message).with_label(label);
        match &self.kind {
            TypeErrorKind::ArgumentsMismatch { expected, found } => diagnostic
                .with_note(format!("expected: ({})", display_types(expected, interner)))
                .with_note(format!("found: ({})", display_types(found, interner))),
            _ => diagnostic,
        }
    }
}

fn display_types(types: &[Type], interner: &StringInterner) -> String {
    types
        .iter()
        .map(|ty| ty.display(interner))
        .collect::<Vec<_>>()
        .join(", ")
}
