use std::collections::HashMap;

use crate::ast::TypeName;

/// Maps struct name -> (field name -> field type), plus field declaration
/// order (needed for positional codegen of the C struct body).
#[derive(Debug, Clone, Default)]
pub struct StructRegistry {
    structs: HashMap<String, StructInfo>,
}

#[derive(Debug, Clone, Default)]
struct StructInfo {
    fields: HashMap<String, TypeName>,
    field_order: Vec<String>,
}

impl StructRegistry {
    pub fn new() -> StructRegistry {
        StructRegistry::default()
    }

    pub fn register_struct(&mut self, name: impl Into<String>) {
        self.structs.entry(name.into()).or_default();
    }

    pub fn register_field(&mut self, struct_name: &str, field: impl Into<String>, ty: TypeName) {
        let entry = self.structs.entry(struct_name.to_owned()).or_default();
        let field = field.into();
        if !entry.fields.contains_key(&field) {
            entry.field_order.push(field.clone());
        }
        entry.fields.insert(field, ty);
    }

    pub fn lookup_field_type(&self, struct_name: &str, field_name: &str) -> Option<&TypeName> {
        self.structs.get(struct_name)?.fields.get(field_name)
    }

    pub fn fields_in_order(&self, struct_name: &str) -> &[String] {
        self.structs
            .get(struct_name)
            .map(|info| info.field_order.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_struct_type(&self, type_name: &str) -> bool {
        self.structs.contains_key(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_follows_first_registration() {
        let mut registry = StructRegistry::new();
        registry.register_struct("Contador");
        registry.register_field("Contador", "v", TypeName::Named("inteiro32".to_owned()));
        registry.register_field("Contador", "nome", TypeName::Named("texto".to_owned()));
        assert_eq!(registry.fields_in_order("Contador"), ["v", "nome"]);
    }

    #[test]
    fn re_registering_a_field_keeps_its_original_position() {
        let mut registry = StructRegistry::new();
        registry.register_field("N", "a", TypeName::Named("inteiro32".to_owned()));
        registry.register_field("N", "b", TypeName::Named("inteiro32".to_owned()));
        registry.register_field("N", "a", TypeName::Named("real64".to_owned()));
        assert_eq!(registry.fields_in_order("N"), ["a", "b"]);
        assert_eq!(
            registry.lookup_field_type("N", "a"),
            Some(&TypeName::Named("real64".to_owned()))
        );
    }

    #[test]
    fn unregistered_name_is_not_a_struct_type() {
        let registry = StructRegistry::new();
        assert!(!registry.is_struct_type("Contador"));
    }
}
