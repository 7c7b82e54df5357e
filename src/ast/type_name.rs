use std::fmt::Display;

use pest::iterators::Pair;

use crate::parser::Rule;

/// A type name: a primitive name, a user struct name, or `[T]` for any
/// depth of array nesting. Parsed structurally once and rendered back to
/// the `[T]`-grammar string only where the symbol table needs to store it
/// as a lookup key.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Named(String),
    Array(Box<TypeName>),
}

impl TypeName {
    pub fn from_pair(pair: Pair<Rule>) -> TypeName {
        assert_eq!(pair.as_rule(), Rule::typeName);

        let inner = pair.into_inner().next();
        match inner {
            Some(p) if p.as_rule() == Rule::arrayType => Self::from_array_type(p),
            Some(p) if p.as_rule() == Rule::ident => TypeName::Named(p.as_str().to_owned()),
            other => unreachable!("unexpected typeName child {other:?}"),
        }
    }

    fn from_array_type(pair: Pair<Rule>) -> TypeName {
        assert_eq!(pair.as_rule(), Rule::arrayType);
        let inner = pair.into_inner().next().expect("arrayType has one child");
        TypeName::Array(Box::new(TypeName::from_pair(inner)))
    }

    /// Render back to the `[T]`-grammar string, the canonical key used by
    /// the symbol table and type registry.
    pub fn as_type_string(&self) -> String {
        match self {
            TypeName::Named(name) => name.clone(),
            TypeName::Array(inner) => format!("[{}]", inner.as_type_string()),
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_type_string())
    }
}
