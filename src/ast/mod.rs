//! The AST: one Rust type per source-language node kind, instead of the
//! single overloaded node struct of the language this transpiler targets.
//! Each submodule owns one node kind (or a small family of closely related
//! ones) plus the `parse_*` function that builds it from a pest `Pair`.

mod array_access;
mod array_literal;
mod assert_stmt;
mod assign;
mod binary_op;
mod block;
mod control_flow;
mod embed_expr;
mod expression;
mod extern_block;
mod for_loop;
mod func_call;
mod func_def;
mod if_stmt;
mod infinito;
mod input_pause;
mod input_value_expr;
mod literal;
mod method_call;
mod new_expr;
mod param;
mod position;
mod postfix_expr;
mod prop_access;
mod root;
mod statement;
mod struct_def;
mod type_name;
mod unary_op;
mod var_decl;
mod var_ref;
mod while_loop;

pub use array_access::{ArrayAccess, IndexKind};
pub use array_literal::ArrayLiteral;
pub use assert_stmt::AssertStmt;
pub use assign::Assign;
pub use binary_op::{BinOp, BinaryOp};
pub use block::{Block, Item};
pub use control_flow::{Break, Continue, Return};
pub use embed_expr::Embed;
pub use expression::{parse_expr, Expression};
pub use extern_block::{ExternBlock, ExternFunc};
pub use for_loop::ForLoop;
pub use func_call::FuncCall;
pub use func_def::FuncDef;
pub use if_stmt::If;
pub use infinito::InfiniteLoop;
pub use input_pause::InputPause;
pub use input_value_expr::InputValue;
pub use literal::{LiteralBool, LiteralDouble, LiteralFloat, LiteralInt, LiteralNull, LiteralString};
pub use method_call::MethodCall;
pub use new_expr::New;
pub use param::Param;
pub use position::{position_of, Position};
pub use prop_access::PropAccess;
pub use root::{Kind, Root};
pub use statement::Statement;
pub use struct_def::{StructDef, StructField};
pub use type_name::TypeName;
pub use unary_op::{UnOp, UnaryOp};
pub use var_decl::VarDecl;
pub use var_ref::VarRef;
pub use while_loop::WhileLoop;

use crate::parser::{CarbonoParser, Rule};

/// Parses a whole source file into a [`Root`]. The single entry point the
/// rest of the pipeline (lowering, tests) calls.
pub fn parse_source(source: &str, file: &str) -> Result<Root, crate::parser::ParseError> {
    let mut pairs = CarbonoParser::parse_program(source)?;
    let program_pair = pairs.next().expect("program rule always produces one pair");
    let root_pair = program_pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::root)
        .expect("program always wraps a root");
    Ok(root::parse_root(root_pair, file))
}
