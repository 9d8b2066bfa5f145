//! Read-only symbol lookup consumed by the checker.
//!
//! The checker only ever asks two questions: "what are the fields of this
//! struct?" and "what is the type of this name?". Both answers may be
//! missing; a missing answer is an ordinary outcome, not a failure.

use cmm_ir::Name;
use rustc_hash::FxHashMap;

use crate::Type;

/// Symbol lookup service.
pub trait SymbolScope {
    /// Resolve a struct name to its declaration.
    fn lookup_struct(&self, name: Name) -> Option<&StructDef>;

    /// Resolve a variable or function name to its declared type.
    fn lookup_var(&self, name: Name) -> Option<&Type>;
}

/// Error declaring a symbol.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ScopeError {
    #[error("struct {name:?} is already declared")]
    DuplicateStruct { name: Name },
    #[error("struct {struct_name:?} declares field {field:?} twice")]
    DuplicateField { struct_name: Name, field: Name },
    #[error("{name:?} is already declared in this scope")]
    DuplicateVariable { name: Name },
}

/// A struct declaration: its name and ordered field table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StructDef {
    name: Name,
    fields: Vec<(Name, Type)>,
}

impl StructDef {
    /// Create a declaration, rejecting repeated field names.
    pub fn new(
        name: Name,
        fields: impl IntoIterator<Item = (Name, Type)>,
    ) -> Result<Self, ScopeError> {
        let mut def = StructDef {
            name,
            fields: Vec::new(),
        };
        for (field, ty) in fields {
            if def.field(field).is_some() {
                return Err(ScopeError::DuplicateField {
                    struct_name: name,
                    field,
                });
            }
            def.fields.push((field, ty));
        }
        Ok(def)
    }

    pub fn name(&self) -> Name {
        self.name
    }

    /// Declared type of a member.
    pub fn field(&self, member: Name) -> Option<&Type> {
        self.fields
            .iter()
            .find(|(name, _)| *name == member)
            .map(|(_, ty)| ty)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (Name, &Type)> {
        self.fields.iter().map(|(name, ty)| (*name, ty))
    }
}

/// Concrete symbol table with nested variable scopes.
///
/// Struct declarations are visible from every child scope; variables may be
/// shadowed by a child.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    structs: FxHashMap<Name, StructDef>,
    vars: FxHashMap<Name, Type>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a child scope.
    #[must_use]
    pub fn child(&self) -> Self {
        Scope {
            structs: FxHashMap::default(),
            vars: FxHashMap::default(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Declare a struct. Struct names are global: redeclaring one that any
    /// enclosing scope already knows is an error.
    pub fn declare_struct(&mut self, def: StructDef) -> Result<(), ScopeError> {
        if self.lookup_struct(def.name).is_some() {
            return Err(ScopeError::DuplicateStruct { name: def.name });
        }
        self.structs.insert(def.name, def);
        Ok(())
    }

    /// Declare a variable in this scope.
    pub fn declare_var(&mut self, name: Name, ty: Type) -> Result<(), ScopeError> {
        if self.vars.contains_key(&name) {
            return Err(ScopeError::DuplicateVariable { name });
        }
        self.vars.insert(name, ty);
        Ok(())
    }

    /// Declare a function; its name is a value of function pointer type.
    pub fn declare_function(
        &mut self,
        name: Name,
        args: Vec<Type>,
        ret: Type,
    ) -> Result<(), ScopeError> {
        self.declare_var(name, Type::fptr(args, ret))
    }
}

impl SymbolScope for Scope {
    fn lookup_struct(&self, name: Name) -> Option<&StructDef> {
        self.structs
            .get(&name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.lookup_struct(name)))
    }

    fn lookup_var(&self, name: Name) -> Option<&Type> {
        self.vars
            .get(&name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.lookup_var(name)))
    }
}
