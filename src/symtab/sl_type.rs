use std::fmt::Display;

use crate::ast::TypeName;

/// A resolved type as tracked by the scope stack: the surface `TypeName`
/// plus whether a binding of this type behaves as a pointer in the
/// lowered C. Struct-typed bindings are references (`nova T` allocates
/// through the arena and every copy of the binding aliases the same
/// storage); arrays are always pointers in C regardless, but are not
/// themselves struct references unless their element type is.
#[derive(Debug, Clone, PartialEq)]
pub struct SlType {
    pub type_name: TypeName,
    pub is_reference: bool,
}

impl SlType {
    pub fn new(type_name: TypeName, is_reference: bool) -> SlType {
        SlType {
            type_name,
            is_reference,
        }
    }

    pub fn base_name(&self) -> &str {
        let mut current = &self.type_name;
        loop {
            match current {
                TypeName::Named(name) => return name,
                TypeName::Array(inner) => current = inner,
            }
        }
    }

    pub fn array_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = &self.type_name;
        while let TypeName::Array(inner) = current {
            depth += 1;
            current = inner;
        }
        depth
    }

    pub fn is_array(&self) -> bool {
        matches!(self.type_name, TypeName::Array(_))
    }

    /// Whether lowering must treat a binding of this type as a pointer: a
    /// struct reference, or any array (arrays are always pointers in the
    /// emitted C regardless of element type).
    pub fn is_pointer_like(&self) -> bool {
        self.is_reference || self.is_array()
    }
}

impl Display for SlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.type_name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_depth_counts_nesting() {
        let ty = SlType::new(
            TypeName::Array(Box::new(TypeName::Array(Box::new(TypeName::Named(
                "inteiro32".to_owned(),
            ))))),
            false,
        );
        assert_eq!(ty.array_depth(), 2);
        assert_eq!(ty.base_name(), "inteiro32");
        assert!(ty.is_array());
        assert!(ty.is_pointer_like());
    }

    #[test]
    fn struct_reference_is_pointer_like_without_being_an_array() {
        let ty = SlType::new(TypeName::Named("Contador".to_owned()), true);
        assert!(!ty.is_array());
        assert!(ty.is_pointer_like());
    }

    #[test]
    fn plain_primitive_is_not_pointer_like() {
        let ty = SlType::new(TypeName::Named("inteiro32".to_owned()), false);
        assert!(!ty.is_pointer_like());
    }
}
