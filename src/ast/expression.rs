use pest::iterators::Pair;

use super::array_access::ArrayAccess;
use super::array_literal::ArrayLiteral;
use super::binary_op::BinaryOp;
use super::embed_expr::Embed;
use super::func_call::FuncCall;
use super::input_value_expr::InputValue;
use super::literal::{LiteralBool, LiteralDouble, LiteralFloat, LiteralInt, LiteralNull, LiteralString};
use super::method_call::MethodCall;
use super::new_expr::New;
use super::position_of;
use super::prop_access::PropAccess;
use super::unary_op::UnaryOp;
use super::var_ref::VarRef;
use super::Position;
use crate::parser::Rule;

/// The single sum type every expression-shaped AST node folds into, one
/// variant per node kind rather than one overloaded node struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    LiteralInt(LiteralInt),
    LiteralDouble(LiteralDouble),
    LiteralFloat(LiteralFloat),
    LiteralString(LiteralString),
    LiteralBool(LiteralBool),
    LiteralNull(LiteralNull),
    VarRef(VarRef),
    New(New),
    Embed(Embed),
    InputValue(InputValue),
    ArrayLiteral(ArrayLiteral),
    FuncCall(FuncCall),
    MethodCall(MethodCall),
    PropAccess(PropAccess),
    ArrayAccess(ArrayAccess),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
}

impl Expression {
    pub fn position(&self) -> &Position {
        match self {
            Expression::LiteralInt(n) => &n.position,
            Expression::LiteralDouble(n) => &n.position,
            Expression::LiteralFloat(n) => &n.position,
            Expression::LiteralString(n) => &n.position,
            Expression::LiteralBool(n) => &n.position,
            Expression::LiteralNull(n) => &n.position,
            Expression::VarRef(n) => &n.position,
            Expression::New(n) => &n.position,
            Expression::Embed(n) => &n.position,
            Expression::InputValue(n) => &n.position,
            Expression::ArrayLiteral(n) => &n.position,
            Expression::FuncCall(n) => &n.position,
            Expression::MethodCall(n) => &n.position,
            Expression::PropAccess(n) => &n.position,
            Expression::ArrayAccess(n) => &n.position,
            Expression::BinaryOp(n) => &n.position,
            Expression::UnaryOp(n) => &n.position,
        }
    }
}

/// Entry point for any expression-shaped pair: `expr` unwraps straight to
/// `orExpr`; the binary-precedence levels recurse through
/// `binary_op::parse_binary_level`, which bottoms out at `unaryExpr`/
/// `postfixExpr`.
pub fn parse_expr(pair: Pair<Rule>, file: &str) -> Expression {
    match pair.as_rule() {
        Rule::expr => {
            let inner = pair
                .into_inner()
                .next()
                .expect("expr wraps a single orExpr");
            parse_expr(inner, file)
        }
        Rule::orExpr | Rule::andExpr | Rule::cmpExpr | Rule::addExpr | Rule::mulExpr => {
            super::binary_op::parse_binary_level(pair, file)
        }
        Rule::unaryExpr => super::unary_op::parse_unary(pair, file),
        Rule::postfixExpr => super::postfix_expr::parse_postfix(pair, file),
        other => {
            let _ = position_of(&pair, file);
            unreachable!("unexpected expression rule {other:?}")
        }
    }
}
