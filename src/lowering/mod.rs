//! The lowering engine: walks the AST and emits C (plus, where embeds are
//! present, a companion assembly file). This is the core of the compiler;
//! everything else (parser, CLI, host-compiler invocation) feeds it or
//! consumes its output.

mod decl;
mod expr;
pub mod format;
mod stmt;
pub mod typemap;

pub use expr::{c_type_of, is_pointer_like_expr, lower_expr, static_type, MODULE_TYPE};

use std::path::{Path, PathBuf};

use crate::ast::{Item, Kind, Root};
use crate::diagnostics::Diagnostic;
use crate::sinks::{AsmSink, CSink};
use crate::symtab::SymbolTable;

/// Threaded explicitly through lowering instead of living behind
/// module-level globals: the scope stack/struct registry, the two output
/// sinks, and the bits of per-compilation bookkeeping (embed/array-literal
/// temp naming, the directory embed paths resolve against).
pub struct LoweringState {
    pub symtab: SymbolTable,
    pub asm: AsmSink,
    pub diagnostics: Vec<Diagnostic>,
    pub source_dir: PathBuf,
    temp_counter: usize,
}

impl LoweringState {
    fn new(source_dir: PathBuf) -> LoweringState {
        LoweringState {
            symtab: SymbolTable::new(),
            asm: AsmSink::new(),
            diagnostics: Vec::new(),
            source_dir,
            temp_counter: 0,
        }
    }

    pub(crate) fn next_temp(&mut self) -> usize {
        let id = self.temp_counter;
        self.temp_counter += 1;
        id
    }
}

pub struct LoweredOutput {
    pub c_source: String,
    pub asm_source: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lowers an entire compilation unit: a `programa` (has a `main`) or a
/// `biblioteca` (exports a loader constructor, no `main`).
pub fn lower(root: &Root, source_path: &Path) -> LoweredOutput {
    let source_dir = source_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut state = LoweringState::new(source_dir);
    let mut c = CSink::new();

    emit_preamble(&mut c, &root.name);

    state.symtab.scopes.enter();

    let struct_defs = root.body.iter().filter_map(|item| match item {
        Item::StructDef(s) => Some(s),
        _ => None,
    });
    for s in struct_defs.clone() {
        decl::register_struct(s, &mut state.symtab.structs);
    }
    for s in struct_defs {
        decl::lower_struct_def(s, &state, &mut c);
    }

    let extern_blocks: Vec<_> = root
        .body
        .iter()
        .filter_map(|item| match item {
            Item::ExternBlock(e) => Some(e),
            _ => None,
        })
        .collect();
    for e in &extern_blocks {
        decl::lower_extern_namespace(e, &mut state, &mut c);
    }

    let func_defs: Vec<_> = root
        .body
        .iter()
        .filter_map(|item| match item {
            Item::FuncDef(f) => Some(f),
            _ => None,
        })
        .collect();
    for f in &func_defs {
        decl::lower_func_prototype(f, &state, &mut c);
    }
    c.write_str("\n");

    for f in &func_defs {
        decl::lower_func_def(f, &mut state, &mut c);
    }

    match root.kind {
        Kind::Programa => {
            c.write_line("int main(int argc, char** argv) {");
            state.symtab.scopes.enter();

            for e in &extern_blocks {
                decl::lower_extern_loading(e, &mut c);
            }

            for item in &root.body {
                if let Item::Statement(s) = item {
                    stmt::lower_statement(s, &mut state, &mut c);
                }
            }

            state.symtab.scopes.exit();
            c.write_line("    bs_free_all();");
            c.write_line("    return 0;");
            c.write_line("}");
        }
        Kind::Biblioteca => {
            let ctor_name = sanitize_ident(&root.name);
            c.write_line(&format!(
                "__attribute__((constructor)) void {ctor_name}_init(void) {{"
            ));
            c.write_line(&format!(
                "    fprintf(stderr, \"[basalto] biblioteca '{}' carregada\\n\");",
                root.name
            ));
            c.write_line("}");
        }
    }

    state.symtab.scopes.exit();

    LoweredOutput {
        c_source: c.into_string(),
        asm_source: if state.asm.is_empty() {
            None
        } else {
            Some(state.asm.into_string())
        },
        diagnostics: state.diagnostics,
    }
}

fn sanitize_ident(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn emit_preamble(c: &mut CSink, program_name: &str) {
    c.write_line("#include <stdio.h>");
    c.write_line("#include <stdlib.h>");
    c.write_line("#include <string.h>");
    c.write_line("#include <stdarg.h>");
    c.write_line("#include <dlfcn.h>");
    c.write_line("#include \"sds.h\"");
    c.write_line("#include \"stb_ds.h\"");
    c.write_line("#include \"basalto.h\"");
    c.write_str("\n");
    c.write_line(&format!(
        "const char* NOME_PROGRAMA = \"{}\";",
        escape_c_string(program_name)
    ));
    c.write_str("\n");
}

pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}
