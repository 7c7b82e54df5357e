//! Lowering for top-level declarations: struct definitions, extern-block
//! namespaces, and function prototypes/bodies. Ordered into passes by
//! [`super::lower`] so forward references across functions and structs
//! work without a separate pre-scan.

use crate::ast::{ExternBlock, FuncDef, StructDef, TypeName};
use crate::sinks::CSink;
use crate::symtab::StructRegistry;

use super::expr::MODULE_TYPE;
use super::typemap::{c_type_for_binding, map_type};
use super::{stmt, LoweringState};

pub fn register_struct(def: &StructDef, structs: &mut StructRegistry) {
    structs.register_struct(def.name.clone());
    for field in &def.fields {
        structs.register_field(&def.name, field.name.clone(), field.type_name.clone());
    }
}

/// `estrutura N { ... }` -> `typedef struct { ... } N;`. Struct-typed
/// variables are references (pointers) in the lowered C, but the struct's
/// own body is declared by value — only *bindings* of the type are
/// pointers.
pub fn lower_struct_def(def: &StructDef, state: &LoweringState, c: &mut CSink) {
    c.write_line("typedef struct {");
    for field in &def.fields {
        let c_type = c_type_for_binding(&field.type_name, &state.symtab.structs);
        c.write_line(&format!("    {c_type} {};", field.name));
    }
    c.write_line(&format!("}} {};", def.name));
    c.write_str("\n");
}

/// Generates the namespace struct of function pointers for an `extern`
/// block and binds it in the scope stack under the `MODULE` sentinel, so
/// method-call lowering can tell `mat.seno(x)` (extern namespace call)
/// apart from a struct method call.
pub fn lower_extern_namespace(block: &ExternBlock, state: &mut LoweringState, c: &mut CSink) {
    c.write_line("struct {");
    for func in &block.funcs {
        let ret = map_type(&func.return_type, &state.symtab.structs);
        let params: Vec<String> = func
            .params
            .iter()
            .map(|p| map_type(&p.type_name, &state.symtab.structs))
            .collect();
        c.write_line(&format!(
            "    {ret} (*{})({});",
            func.name,
            params.join(", ")
        ));
    }
    c.write_line(&format!("}} {};", block.alias));
    c.write_str("\n");

    state
        .symtab
        .bind(block.alias.clone(), TypeName::Named(MODULE_TYPE.to_owned()));
}

/// Emits the `dlopen`/`dlsym` loading sequence for one extern block, run at
/// the top of `main` before any top-level statement executes.
pub fn lower_extern_loading(block: &ExternBlock, c: &mut CSink) {
    let handle = format!("handle_{}", block.alias);
    c.write_line(&format!(
        "    void* {handle} = dlopen(\"{}\", RTLD_LAZY);",
        super::escape_c_string(&block.library_path)
    ));
    c.write_line(&format!("    if (!{handle}) {{"));
    c.write_line("        fprintf(stderr, \"[basalto] erro FFI: %s\\n\", dlerror());");
    c.write_line("        exit(1);");
    c.write_line("    }");

    for func in &block.funcs {
        let symbol = func.link_name.as_deref().unwrap_or(&func.name);
        c.write_line(&format!(
            "    {}.{} = dlsym({handle}, \"{}\");",
            block.alias,
            func.name,
            super::escape_c_string(symbol)
        ));
        c.write_line(&format!("    if (!{}.{}) {{", block.alias, func.name));
        c.write_line(&format!(
            "        fprintf(stderr, \"[basalto] simbolo '{}' nao encontrado.\\n\");",
            super::escape_c_string(symbol)
        ));
        c.write_line("        exit(1);");
        c.write_line("    }");
    }
}

pub fn lower_func_prototype(def: &FuncDef, state: &LoweringState, c: &mut CSink) {
    c.write_line(&format!("{};", signature(def, state)));
}

fn signature(def: &FuncDef, state: &LoweringState) -> String {
    let ret = map_type(&def.return_type, &state.symtab.structs);
    let params: Vec<String> = def
        .params
        .iter()
        .map(|p| {
            let c_type = c_type_for_binding(&p.type_name, &state.symtab.structs);
            format!("{c_type} {}", p.name)
        })
        .collect();
    format!("{ret} {}({})", def.name, params.join(", "))
}

/// A function with no body is an extern prototype (already emitted by
/// [`lower_func_prototype`]); only bodied functions get a definition here.
pub fn lower_func_def(def: &FuncDef, state: &mut LoweringState, c: &mut CSink) {
    let Some(body) = &def.body else {
        return;
    };

    c.write_line(&format!("{} {{", signature(def, state)));
    state.symtab.scopes.enter();

    for param in &def.params {
        let is_receiver = param.name == "self" || param.name == "eu";
        if is_receiver {
            state.symtab.scopes.bind(
                param.name.clone(),
                crate::symtab::SlType::new(param.type_name.clone(), true),
            );
        } else {
            state.symtab.bind(param.name.clone(), param.type_name.clone());
        }
    }

    for item in body {
        if let crate::ast::Item::Statement(s) = item {
            stmt::lower_statement(s, state, c);
        }
    }

    state.symtab.scopes.exit();
    c.write_line("}");
    c.write_str("\n");
}
