//! The primitive type map, name-for-name from the source language's
//! Portuguese vocabulary (plus short aliases) to C.

use crate::ast::TypeName;
use crate::symtab::StructRegistry;

pub fn map_primitive(name: &str) -> Option<&'static str> {
    Some(match name {
        "inteiro8" | "i8" => "signed char",
        "inteiro16" | "i16" => "short",
        "inteiro32" | "i32" => "int",
        "inteiro64" | "i64" => "long long",
        "inteiro_arq" => "long",
        "inteiro" => "int",

        "byte" => "unsigned char",
        "natural16" | "n16" => "unsigned short",
        "natural32" | "n32" => "unsigned int",
        "natural64" | "n64" => "unsigned long long",
        "natural_arq" => "unsigned long",
        "tamanho" => "size_t",

        "real32" | "r32" => "float",
        "real64" | "r64" => "double",
        "real" => "double",
        "real_ext" | "r_ext" => "long double",

        "booleano" | "bool" => "int",
        "texto" => "char*",
        "caractere" => "char",
        "ponteiro" => "void*",
        "vazio" => "void",
        _ => return None,
    })
}

/// Maps a surface `TypeName` to its C rendering. Array types add one `*`
/// per depth; an unregistered struct name (and any other unknown name)
/// falls back to `void` (spec §6.2).
pub fn map_type(type_name: &TypeName, structs: &StructRegistry) -> String {
    match type_name {
        TypeName::Array(inner) => format!("{}*", map_type(inner, structs)),
        TypeName::Named(name) => {
            if let Some(c_type) = map_primitive(name) {
                c_type.to_owned()
            } else if structs.is_struct_type(name) {
                name.clone()
            } else {
                "void".to_owned()
            }
        }
    }
}

/// `map_type`, widened for binding positions (locals, fields, params):
/// a bare registered struct name additionally gets one `*`, realising
/// "every struct-typed variable is a reference". Arrays already carry
/// their own `*` per depth from `map_type` and are left alone here.
pub fn c_type_for_binding(type_name: &TypeName, structs: &StructRegistry) -> String {
    let base = map_type(type_name, structs);
    match type_name {
        TypeName::Named(name) if structs.is_struct_type(name) => format!("{base}*"),
        _ => base,
    }
}

/// `texto` renders to `char*` via `map_type` for signature/field contexts,
/// but a local declaration of a `texto` variable uses the `sds`
/// dynamic-string-handle typedef so it can be grown in place by the
/// runtime's string-append helpers.
pub fn is_texto(type_name: &TypeName) -> bool {
    matches!(type_name, TypeName::Named(name) if name == "texto")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(name: &str) -> StructRegistry {
        let mut structs = StructRegistry::new();
        structs.register_struct(name);
        structs
    }

    #[test]
    fn primitive_aliases_map_to_the_same_c_type() {
        assert_eq!(map_primitive("inteiro32"), map_primitive("i32"));
        assert_eq!(map_primitive("real64"), map_primitive("r64"));
        assert_eq!(map_primitive("natural_arq"), Some("unsigned long"));
    }

    #[test]
    fn unregistered_struct_name_falls_back_to_void() {
        let structs = StructRegistry::new();
        let ty = TypeName::Named("Fantasma".to_owned());
        assert_eq!(map_type(&ty, &structs), "void");
    }

    #[test]
    fn array_type_adds_one_star_per_depth() {
        let structs = StructRegistry::new();
        let ty = TypeName::Array(Box::new(TypeName::Array(Box::new(TypeName::Named(
            "inteiro32".to_owned(),
        )))));
        assert_eq!(map_type(&ty, &structs), "int**");
    }

    #[test]
    fn binding_position_adds_a_pointer_for_a_registered_struct() {
        let structs = registry_with("Contador");
        let ty = TypeName::Named("Contador".to_owned());
        assert_eq!(map_type(&ty, &structs), "Contador");
        assert_eq!(c_type_for_binding(&ty, &structs), "Contador*");
    }

    #[test]
    fn binding_position_leaves_primitives_and_arrays_alone() {
        let structs = registry_with("Contador");
        let primitive = TypeName::Named("inteiro32".to_owned());
        assert_eq!(c_type_for_binding(&primitive, &structs), "int");

        let array = TypeName::Array(Box::new(TypeName::Named("Contador".to_owned())));
        assert_eq!(
            c_type_for_binding(&array, &structs),
            map_type(&array, &structs)
        );
    }
}
