//! Core type definitions.

use cmm_ir::{Name, StringInterner};

/// Concrete type representation.
///
/// Compared structurally: two lists are equal iff their element types are,
/// two structs iff they name the same declaration, two function pointers iff
/// their return and argument types are.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    // ===== Primitives =====
    /// Integer type
    Int,
    /// Boolean type
    Bool,
    /// Type of statements-as-expressions (assignment, append, void calls)
    Void,

    // ===== Compound types =====
    /// Homogeneous list: list(T)
    List(Box<Type>),

    /// Named record type, resolved through the symbol scope
    Struct(Name),

    /// Function pointer: fptr<args -> ret>
    Fptr { ret: Box<Type>, args: Vec<Type> },

    /// Error sentinel: a prior error makes this type unknowable.
    ///
    /// Never satisfies a positive requirement, and never triggers a
    /// diagnostic of its own.
    NoType,
}

impl Type {
    /// `list(element)`
    pub fn list(element: Type) -> Type {
        Type::List(Box::new(element))
    }

    /// `fptr<args -> ret>`
    pub fn fptr(args: Vec<Type>, ret: Type) -> Type {
        Type::Fptr {
            ret: Box::new(ret),
            args,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Int)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    pub fn is_fptr(&self) -> bool {
        matches!(self, Type::Fptr { .. })
    }

    /// Check if this is the error sentinel.
    pub fn is_no_type(&self) -> bool {
        matches!(self, Type::NoType)
    }

    /// Element type of a list.
    pub fn list_element(&self) -> Option<&Type> {
        match self {
            Type::List(element) => Some(element),
            _ => None,
        }
    }

    /// Top-level kind match used when appending to a list.
    ///
    /// Only `int`, `bool`, struct and list kinds are element-compatible;
    /// nested struct names and list element types are not compared.
    pub fn same_element_kind(&self, other: &Type) -> bool {
        matches!(
            (self, other),
            (Type::Int, Type::Int)
                | (Type::Bool, Type::Bool)
                | (Type::Struct(_), Type::Struct(_))
                | (Type::List(_), Type::List(_))
        )
    }

    /// Format type for display.
    pub fn display(&self, interner: &StringInterner) -> String {
        match self {
            Type::Int => "int".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Void => "void".to_string(),
            Type::List(element) => format!("list({})", element.display(interner)),
            Type::Struct(name) => format!("struct {}", interner.lookup(*name)),
            Type::Fptr { ret, args } => {
                let args_str: Vec<_> = args.iter().map(|a| a.display(interner)).collect();
                let args_str = if args_str.is_empty() {
                    "void".to_string()
                } else {
                    args_str.join(", ")
                };
                format!("fptr<{args_str} -> {}>", ret.display(interner))
            }
            Type::NoType => "<no type>".to_string(),
        }
    }
}
