//! Lexical scoping and struct field types for the lowering pass.
//!
//! Mirrors the two-part design of the compiler this one replaces: a scope
//! stack of variable bindings, and a separate registry mapping struct name
//! to its field types. Resolving "is this binding a pointer in C" is done
//! once here (`SymbolTable::resolve`) instead of re-derived at every use
//! site.

mod scope;
mod sl_type;
mod struct_registry;

pub use scope::ScopeStack;
pub use sl_type::SlType;
pub use struct_registry::StructRegistry;

use crate::ast::TypeName;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    pub scopes: ScopeStack,
    pub structs: StructRegistry,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Resolves a surface `TypeName` into an `SlType`, looking up whether
    /// its base name is a registered struct to decide `is_reference`.
    pub fn resolve(&self, type_name: TypeName) -> SlType {
        let is_reference = self.structs.is_struct_type(base_name(&type_name));
        SlType::new(type_name, is_reference)
    }

    pub fn bind(&mut self, name: impl Into<String>, type_name: TypeName) {
        let resolved = self.resolve(type_name);
        self.scopes.bind(name, resolved);
    }

    pub fn lookup(&self, name: &str) -> Option<&SlType> {
        self.scopes.lookup(name)
    }
}

fn base_name(type_name: &TypeName) -> &str {
    match type_name {
        TypeName::Named(name) => name,
        TypeName::Array(inner) => base_name(inner),
    }
}
