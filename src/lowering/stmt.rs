//! Statement lowering: one `Statement` variant at a time, writing directly
//! into the C sink rather than building an intermediate string (unlike
//! expression lowering, statements have no caller waiting for a value).

use crate::ast::{Item, Statement, TypeName};
use crate::sinks::CSink;

use super::expr::lower_expr;
use super::typemap::{c_type_for_binding, is_texto, map_type};
use super::LoweringState;

pub fn lower_statement(stmt: &Statement, state: &mut LoweringState, c: &mut CSink) {
    match stmt {
        Statement::VarDecl(v) => lower_var_decl(v, state, c),
        Statement::Assign(a) => lower_assign(a, state, c),
        Statement::If(i) => lower_if(i, state, c),
        Statement::WhileLoop(w) => lower_while(w, state, c),
        Statement::ForLoop(f) => lower_for(f, state, c),
        Statement::InfiniteLoop(i) => lower_infinite(i, state, c),
        Statement::Break(_) => c.write_line("break;"),
        Statement::Continue(_) => c.write_line("continue;"),
        Statement::Return(r) => lower_return(r, state, c),
        Statement::InputPause(_) => c.write_line("flush_input();"),
        Statement::AssertStmt(a) => lower_assert(a, state, c),
        Statement::ExprStmt(e) => {
            let value = lower_expr(e, state);
            c.write_line(&format!("{value};"));
        }
        Statement::Block(items) => lower_block(items, state, c),
    }
}

fn lower_block(items: &[Item], state: &mut LoweringState, c: &mut CSink) {
    c.write_line("{");
    state.symtab.scopes.enter();
    for item in items {
        match item {
            Item::Statement(s) => lower_statement(s, state, c),
            Item::StructDef(s) => {
                super::decl::register_struct(s, &mut state.symtab.structs);
                super::decl::lower_struct_def(s, state, c);
            }
            Item::FuncDef(f) => super::decl::lower_func_def(f, state, c),
            Item::ExternBlock(e) => super::decl::lower_extern_namespace(e, state, c),
        }
    }
    state.symtab.scopes.exit();
    c.write_line("}");
}

/// A `texto` local gets the `sds` dynamic-string handle instead of the
/// bare `char*` used in signatures/fields, so it can be grown in place by
/// `sdscat`/`sdscatprintf` without a separate conversion step.
fn lower_var_decl(v: &crate::ast::VarDecl, state: &mut LoweringState, c: &mut CSink) {
    let c_type = if is_texto(&v.type_name) {
        "sds".to_owned()
    } else {
        c_type_for_binding(&v.type_name, &state.symtab.structs)
    };

    match &v.init {
        Some(init) => {
            let value = lower_expr(init, state);
            c.write_line(&format!("{c_type} {} = {value};", v.name));
        }
        None => {
            c.write_line(&format!("{c_type} {};", v.name));
        }
    }

    state.symtab.bind(v.name.clone(), v.type_name.clone());
}

fn lower_assign(a: &crate::ast::Assign, state: &mut LoweringState, c: &mut CSink) {
    let target = lower_expr(&a.target, state);
    let value = lower_expr(&a.value, state);
    c.write_line(&format!("{target} = {value};"));
}

fn lower_if(i: &crate::ast::If, state: &mut LoweringState, c: &mut CSink) {
    let condition = lower_expr(&i.condition, state);
    c.write_line(&format!("if ({condition}) {{"));
    state.symtab.scopes.enter();
    for item in &i.then_block {
        lower_item(item, state, c);
    }
    state.symtab.scopes.exit();

    match &i.else_block {
        Some(else_block) => {
            c.write_line("} else {");
            state.symtab.scopes.enter();
            for item in else_block {
                lower_item(item, state, c);
            }
            state.symtab.scopes.exit();
            c.write_line("}");
        }
        None => c.write_line("}"),
    }
}

fn lower_while(w: &crate::ast::WhileLoop, state: &mut LoweringState, c: &mut CSink) {
    let condition = lower_expr(&w.condition, state);
    c.write_line(&format!("while ({condition}) {{"));
    state.symtab.scopes.enter();
    for item in &w.body {
        lower_item(item, state, c);
    }
    state.symtab.scopes.exit();
    c.write_line("}");
}

fn lower_infinite(i: &crate::ast::InfiniteLoop, state: &mut LoweringState, c: &mut CSink) {
    c.write_line("while (1) {");
    state.symtab.scopes.enter();
    for item in &i.body {
        lower_item(item, state, c);
    }
    state.symtab.scopes.exit();
    c.write_line("}");
}

/// `cada i: lo..hi [passo step] { ... }`: a half-open range loop. The loop
/// variable's type defaults to `inteiro32` when the source left it
/// implicit, matching the primitive the rest of the numeric surface
/// defaults to.
fn lower_for(f: &crate::ast::ForLoop, state: &mut LoweringState, c: &mut CSink) {
    let var_type = f
        .var_type
        .clone()
        .unwrap_or_else(|| TypeName::Named("inteiro32".to_owned()));
    let c_type = map_type(&var_type, &state.symtab.structs);

    let start = lower_expr(&f.start, state);
    let end = lower_expr(&f.end, state);
    let step = f
        .step
        .as_ref()
        .map(|s| lower_expr(s, state))
        .unwrap_or_else(|| "1".to_owned());

    c.write_line(&format!(
        "for ({c_type} {var} = {start}; {var} < {end}; {var} += {step}) {{",
        var = f.var_name,
    ));
    state.symtab.scopes.enter();
    state.symtab.bind(f.var_name.clone(), var_type);
    for item in &f.body {
        lower_item(item, state, c);
    }
    state.symtab.scopes.exit();
    c.write_line("}");
}

fn lower_return(r: &crate::ast::Return, state: &mut LoweringState, c: &mut CSink) {
    match &r.value {
        Some(value) => {
            let value = lower_expr(value, state);
            c.write_line(&format!("return {value};"));
        }
        None => c.write_line("return;"),
    }
}

/// `garantir(cond, "message");`: an assert with a Portuguese-message
/// abort path, not `assert()` (so the message reaches the user even in a
/// release build with `NDEBUG` set).
fn lower_assert(a: &crate::ast::AssertStmt, state: &mut LoweringState, c: &mut CSink) {
    let condition = lower_expr(&a.condition, state);
    let escaped = super::escape_c_string(&a.message);
    c.write_line(&format!("if (!({condition})) {{"));
    c.write_line(&format!(
        "    fprintf(stderr, \"[basalto] garantia falhou: %s\\n\", \"{escaped}\");"
    ));
    c.write_line("    exit(1);");
    c.write_line("}");
}

fn lower_item(item: &Item, state: &mut LoweringState, c: &mut CSink) {
    match item {
        Item::Statement(s) => lower_statement(s, state, c),
        Item::StructDef(s) => {
            super::decl::register_struct(s, &mut state.symtab.structs);
            super::decl::lower_struct_def(s, state, c);
        }
        Item::FuncDef(f) => super::decl::lower_func_def(f, state, c),
        Item::ExternBlock(e) => super::decl::lower_extern_namespace(e, state, c),
    }
}
