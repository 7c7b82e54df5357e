//! Expression lowering: every `ast::Expression` variant maps to a C
//! expression fragment (a plain string; complex cases use a GNU C
//! statement expression so the result is still usable anywhere an
//! expression is expected).

use crate::ast::{BinOp, Expression, IndexKind, TypeName, UnOp};
use crate::symtab::{SlType, SymbolTable};

use super::typemap::map_type;
use super::LoweringState;

/// The sentinel type bound for an extern block's namespace variable.
pub const MODULE_TYPE: &str = "MODULE";

pub fn lower_expr(expr: &Expression, state: &mut LoweringState) -> String {
    match expr {
        Expression::LiteralInt(n) => n.value.to_string(),
        Expression::LiteralDouble(n) => format!("{:?}", n.value),
        Expression::LiteralFloat(n) => format!("{:?}f", n.value),
        Expression::LiteralString(n) => {
            crate::interp::lower_to_dynamic_string_expr(&n.value, state)
        }
        Expression::LiteralBool(n) => if n.value { "1" } else { "0" }.to_owned(),
        Expression::LiteralNull(_) => "NULL".to_owned(),
        Expression::VarRef(v) => v.name.clone(),
        Expression::New(n) => lower_new(n, state),
        Expression::Embed(e) => crate::embed::lower_embed(e, state),
        Expression::InputValue(_) => "read_int()".to_owned(),
        Expression::ArrayLiteral(a) => lower_array_literal(a, state),
        Expression::FuncCall(f) => lower_func_call(f, state),
        Expression::MethodCall(m) => lower_method_call(m, state),
        Expression::PropAccess(p) => lower_prop_access(p, state),
        Expression::ArrayAccess(a) => lower_array_access(a, state),
        Expression::BinaryOp(b) => lower_binary_op(b, state),
        Expression::UnaryOp(u) => {
            let operand = lower_expr(&u.operand, state);
            format!("({}{operand})", u.op)
        }
    }
}

fn lower_new(n: &crate::ast::New, state: &mut LoweringState) -> String {
    let c_type = type_name_as_ident(&n.type_name);
    format!("({c_type}*)bs_alloc(sizeof({c_type}))")
}

fn type_name_as_ident(type_name: &TypeName) -> String {
    match type_name {
        TypeName::Named(name) => name.clone(),
        TypeName::Array(inner) => type_name_as_ident(inner),
    }
}

fn lower_array_literal(a: &crate::ast::ArrayLiteral, state: &mut LoweringState) -> String {
    let id = state.next_temp();
    let elem_type = element_type_guess(a);
    let mut body = format!("({{ {elem_type}* temp_arr_{id} = NULL; ");
    for element in &a.elements {
        let value = lower_expr(element, state);
        body.push_str(&format!("arrput(temp_arr_{id}, {value}); "));
    }
    body.push_str(&format!("temp_arr_{id}; }})"));
    body
}

fn element_type_guess(a: &crate::ast::ArrayLiteral) -> &'static str {
    match a.elements.first() {
        Some(Expression::LiteralDouble(_)) | Some(Expression::LiteralFloat(_)) => "double",
        Some(Expression::LiteralString(_)) => "char*",
        _ => "int",
    }
}

fn lower_func_call(f: &crate::ast::FuncCall, state: &mut LoweringState) -> String {
    if f.name == "escreval" || f.name == "escreva" {
        return crate::interp::lower_print_call(f, state);
    }
    let args: Vec<String> = f.args.iter().map(|a| lower_expr(a, state)).collect();
    format!("{}({})", f.name, args.join(", "))
}

fn lower_method_call(m: &crate::ast::MethodCall, state: &mut LoweringState) -> String {
    let args: Vec<String> = m.args.iter().map(|a| lower_expr(a, state)).collect();

    if is_module_receiver(&m.receiver, &state.symtab) {
        let receiver = lower_expr(&m.receiver, state);
        return format!("{receiver}.{}({})", m.method, args.join(", "));
    }

    let receiver_text = lower_expr(&m.receiver, state);
    match m.method.as_str() {
        "len" => format!("arrlen({receiver_text})"),
        "push" => format!("arrput({receiver_text}, {})", args.first().cloned().unwrap_or_default()),
        "pop" => format!("arrpop({receiver_text})"),
        method => {
            let receiver_arg = if is_pointer_like_expr(&m.receiver, &state.symtab) {
                receiver_text
            } else {
                format!("&{receiver_text}")
            };
            let mut all_args = vec![receiver_arg];
            all_args.extend(args);
            format!("{method}({})", all_args.join(", "))
        }
    }
}

fn is_module_receiver(receiver: &Expression, symtab: &SymbolTable) -> bool {
    matches!(
        static_type(receiver, symtab),
        Some(SlType {
            type_name: TypeName::Named(name),
            ..
        }) if name == MODULE_TYPE
    )
}

fn lower_prop_access(p: &crate::ast::PropAccess, state: &mut LoweringState) -> String {
    let receiver_text = lower_expr(&p.receiver, state);

    if p.field == "len" {
        return format!("arrlen({receiver_text})");
    }

    if is_self_ref(&p.receiver) || is_pointer_like_expr(&p.receiver, &state.symtab) {
        format!("{receiver_text}->{}", p.field)
    } else {
        format!("{receiver_text}.{}", p.field)
    }
}

fn lower_array_access(a: &crate::ast::ArrayAccess, state: &mut LoweringState) -> String {
    let base = lower_expr(&a.base, state);
    match &a.index {
        IndexKind::Single(index) => {
            let index = lower_expr(index, state);
            format!("{base}[{index}]")
        }
        IndexKind::Slice(lo, hi) => {
            let lo_text = lower_expr(lo, state);
            let hi_text = lower_expr(hi, state);
            let id = state.next_temp();
            let elem_type = base_element_c_type(&a.base, &state.symtab);
            format!(
                "({{ long _lo{id} = {lo_text}; long _hi{id} = {hi_text}; \
                 long _len{id} = arrlen({base}); \
                 if (_lo{id} < 0) _lo{id} = 0; \
                 if (_hi{id} > _len{id}) _hi{id} = _len{id}; \
                 {elem_type}* _slice{id} = NULL; \
                 for (long _i{id} = _lo{id}; _i{id} < _hi{id}; _i{id}++) \
                     arrput(_slice{id}, {base}[_i{id}]); \
                 _slice{id}; }})"
            )
        }
    }
}

fn base_element_c_type(base: &Expression, symtab: &SymbolTable) -> String {
    match static_type(base, symtab) {
        Some(SlType {
            type_name: TypeName::Array(inner),
            ..
        }) => super::typemap::map_type(&inner, &symtab.structs),
        _ => "int".to_owned(),
    }
}

fn lower_binary_op(b: &crate::ast::BinaryOp, state: &mut LoweringState) -> String {
    let is_string_operand = |e: &Expression, state: &LoweringState| -> bool {
        matches!(e, Expression::LiteralString(_))
            || matches!(static_type(e, &state.symtab), Some(t) if matches!(&t.type_name, TypeName::Named(n) if n == "texto"))
    };

    let lhs_is_str = is_string_operand(&b.lhs, state);
    let rhs_is_str = is_string_operand(&b.rhs, state);
    let lhs = lower_expr(&b.lhs, state);
    let rhs = lower_expr(&b.rhs, state);

    if lhs_is_str && rhs_is_str {
        match b.op {
            BinOp::Add => return format!("sdscatsds(sdsdup({lhs}), {rhs})"),
            BinOp::Eq => return format!("(strcmp({lhs}, {rhs}) == 0)"),
            BinOp::Neq => return format!("(strcmp({lhs}, {rhs}) != 0)"),
            _ => {}
        }
    }

    format!("({lhs} {} {rhs})", b.op)
}

fn is_self_ref(expr: &Expression) -> bool {
    matches!(expr, Expression::VarRef(v) if v.name == "self" || v.name == "eu")
}

/// Whether the lowered C value of `expr` is already a pointer, per the
/// rules in the symbol table: `self`/`eu`, a binding recorded as a
/// reference or array, an array access result, or a chained property
/// access whose resolved field type is itself a reference or array.
pub fn is_pointer_like_expr(expr: &Expression, symtab: &SymbolTable) -> bool {
    if is_self_ref(expr) {
        return true;
    }
    if matches!(expr, Expression::ArrayAccess(_)) {
        return true;
    }
    static_type(expr, symtab)
        .map(|t| t.is_pointer_like())
        .unwrap_or(false)
}

/// Best-effort static type of an expression, enough to drive pointer-ness
/// decisions. Not a type checker: function-call results and arithmetic
/// fall back to `None`, which callers treat as "not a pointer".
pub fn static_type(expr: &Expression, symtab: &SymbolTable) -> Option<SlType> {
    match expr {
        Expression::VarRef(v) => symtab.lookup(&v.name).cloned(),
        Expression::New(n) => Some(symtab.resolve(n.type_name.clone())),
        Expression::PropAccess(p) => {
            let receiver_type = static_type(&p.receiver, symtab)?;
            let field_type = symtab
                .structs
                .lookup_field_type(receiver_type.base_name(), &p.field)?
                .clone();
            Some(symtab.resolve(field_type))
        }
        Expression::ArrayAccess(a) => {
            let base_type = static_type(&a.base, symtab)?;
            match &a.index {
                IndexKind::Single(_) => match base_type.type_name {
                    TypeName::Array(inner) => Some(symtab.resolve(*inner)),
                    _ => None,
                },
                IndexKind::Slice(..) => Some(base_type),
            }
        }
        Expression::LiteralString(_) => Some(symtab.resolve(TypeName::Named("texto".to_owned()))),
        Expression::LiteralInt(_) => Some(symtab.resolve(TypeName::Named("inteiro32".to_owned()))),
        Expression::LiteralDouble(_) => Some(symtab.resolve(TypeName::Named("real64".to_owned()))),
        Expression::LiteralFloat(_) => Some(symtab.resolve(TypeName::Named("real32".to_owned()))),
        Expression::LiteralBool(_) => Some(symtab.resolve(TypeName::Named("booleano".to_owned()))),
        _ => None,
    }
}

pub fn c_type_of(expr: &Expression, symtab: &SymbolTable) -> String {
    static_type(expr, symtab)
        .map(|t| map_type(&t.type_name, &symtab.structs))
        .unwrap_or_else(|| "int".to_owned())
}
