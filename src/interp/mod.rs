//! The interpolated-string mini-language: `${expr[:fmt]}` inside string
//! literals. A proper two-phase design — tokenize into static/interpolated
//! fragments, then parse each `${...}` body with the main expression
//! grammar — replacing fragile byte-by-byte scanning.

mod scanner;

use scanner::Fragment;

use crate::ast::{parse_expr, Expression, FuncCall};
use crate::lowering::format::default_format_for_c_type;
use crate::lowering::{c_type_of, escape_c_string, lower_expr, LoweringState};
use crate::parser::{CarbonoParser, Rule};

/// Parses a `${...}` body with the same expression grammar the main parser
/// uses (not a hand-rolled dotted-identifier scanner). Falls back to a bare
/// variable reference if the fragment doesn't parse as a full expression
/// (e.g. legacy inputs the grammar doesn't cover) so lowering degrades
/// gracefully instead of panicking on interpolation bodies.
fn parse_fragment_expr(body: &str) -> Expression {
    match CarbonoParser::parse_rule(Rule::expr, body) {
        Ok(mut pairs) => {
            let pair = pairs.next().expect("expr rule always yields one pair");
            parse_expr(pair, "<interp>")
        }
        Err(_) => Expression::VarRef(crate::ast::VarRef {
            name: body.to_owned(),
            position: ("<interp>".to_owned(), 0, 0),
        }),
    }
}

/// Builds a fresh dynamic string (`sds`) incrementally: static runs append
/// verbatim, interpolated fragments append with either the user-supplied
/// format or a type-directed default. Used both for `texto` initializers
/// and (via [`lower_print_call`]) for `escreval`/`escreva`.
pub fn lower_to_dynamic_string_expr(raw: &str, state: &mut LoweringState) -> String {
    let fragments = scanner::scan(raw);
    let id = state.next_temp();
    let mut body = format!("({{ sds _s{id} = sdsempty(); ");

    for fragment in fragments {
        match fragment {
            Fragment::Static(text) => {
                let escaped = escape_c_string(&text);
                body.push_str(&format!("_s{id} = sdscat(_s{id}, \"{escaped}\"); "));
            }
            Fragment::Interp { expr, fmt } => {
                let parsed = parse_fragment_expr(&expr);
                let value = lower_expr(&parsed, state);
                let format = fmt.map(|f| normalize_fmt(&f)).unwrap_or_else(|| {
                    default_format_for_c_type(&c_type_of(&parsed, &state.symtab)).to_owned()
                });
                body.push_str(&format!(
                    "_s{id} = sdscatprintf(_s{id}, \"{format}\", {value}); "
                ));
            }
        }
    }

    body.push_str(&format!("_s{id}; }})"));
    body
}

fn normalize_fmt(fmt: &str) -> String {
    if fmt.starts_with('%') {
        fmt.to_owned()
    } else {
        format!("%{fmt}")
    }
}

/// Lowers `escreval(...)`/`escreva(...)` to a statement sequence: a literal
/// string argument goes through the interpolation engine and is printed as
/// `%s`, with `escreval` appending a trailing newline; any other argument
/// uses the type-directed default format directly.
pub fn lower_print_call(call: &FuncCall, state: &mut LoweringState) -> String {
    let trailing_newline = call.name == "escreval";
    let Some(arg) = call.args.first() else {
        return if trailing_newline {
            "printf(\"\\n\")".to_owned()
        } else {
            "0".to_owned()
        };
    };

    let printf_call = match arg {
        Expression::LiteralString(s) => {
            let built = lower_to_dynamic_string_expr(&s.value, state);
            format!("printf(\"%s\", {built})")
        }
        other => {
            let value = lower_expr(other, state);
            let format = default_format_for_c_type(&c_type_of(other, &state.symtab));
            format!("printf(\"{format}\", {value})")
        }
    };

    if trailing_newline {
        format!("({{ {printf_call}; printf(\"\\n\"); 0; }})")
    } else {
        printf_call
    }
}
