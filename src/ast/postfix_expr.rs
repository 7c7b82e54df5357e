use pest::iterators::Pair;

use super::array_access::{ArrayAccess, IndexKind};
use super::{position_of, Expression};
use crate::parser::Rule;

/// Folds a `postfixExpr` (a primary expression followed by zero or more
/// `call`/`indexing`/`sliceIndexing`/`propAccess` suffixes) left to right.
/// The first suffix after a bare `VarRef` becomes a `FuncCall`; a `call`
/// suffix applied to anything already folded into a `PropAccess` becomes a
/// `MethodCall` instead. This is the one place the primary+postfix shapes of
/// get resolved into concrete node kinds.
pub fn parse_postfix(pair: Pair<Rule>, file: &str) -> Expression {
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let primary_pair = inner.next().expect("postfixExpr has a primary");
    let mut expr = parse_primary(primary_pair, file);

    for suffix in inner {
        let suffix_pos = position_of(&suffix, file);
        expr = match suffix.as_rule() {
            Rule::call => {
                let args: Vec<Expression> = suffix
                    .into_inner()
                    .map(|p| super::expression::parse_expr(p, file))
                    .collect();
                match expr {
                    Expression::VarRef(v) => Expression::FuncCall(super::func_call::FuncCall {
                        name: v.name,
                        args,
                        position: suffix_pos,
                    }),
                    Expression::PropAccess(p) => {
                        Expression::MethodCall(super::method_call::MethodCall {
                            receiver: p.receiver,
                            method: p.field,
                            args,
                            position: suffix_pos,
                        })
                    }
                    other => panic!("call suffix applied to non-callable expression {other:?}"),
                }
            }
            Rule::indexing => {
                let index_pair = suffix
                    .into_inner()
                    .next()
                    .expect("indexing has one expr");
                let index = super::expression::parse_expr(index_pair, file);
                Expression::ArrayAccess(ArrayAccess {
                    base: Box::new(expr),
                    index: IndexKind::Single(Box::new(index)),
                    position: suffix_pos,
                })
            }
            Rule::sliceIndexing => {
                let mut idx = suffix.into_inner();
                let lo = super::expression::parse_expr(
                    idx.next().expect("sliceIndexing has a lower bound"),
                    file,
                );
                let hi = super::expression::parse_expr(
                    idx.next().expect("sliceIndexing has an upper bound"),
                    file,
                );
                Expression::ArrayAccess(ArrayAccess {
                    base: Box::new(expr),
                    index: IndexKind::Slice(Box::new(lo), Box::new(hi)),
                    position: suffix_pos,
                })
            }
            Rule::propAccess => {
                let field = suffix
                    .into_inner()
                    .next()
                    .expect("propAccess has a field name")
                    .as_str()
                    .to_owned();
                Expression::PropAccess(super::prop_access::PropAccess {
                    receiver: Box::new(expr),
                    field,
                    position: suffix_pos,
                })
            }
            other => unreachable!("unexpected postfix suffix rule {other:?}"),
        };
    }

    let _ = &position;
    expr
}

fn parse_primary(pair: Pair<Rule>, file: &str) -> Expression {
    match pair.as_rule() {
        Rule::newExpr => Expression::New(super::new_expr::parse_new(pair, file)),
        Rule::embedExpr => Expression::Embed(super::embed_expr::parse_embed(pair, file)),
        Rule::inputValueExpr => {
            Expression::InputValue(super::input_value_expr::parse_input_value(pair, file))
        }
        Rule::arrayLiteral => {
            Expression::ArrayLiteral(super::array_literal::parse_array_literal(pair, file))
        }
        Rule::floatLit => Expression::LiteralFloat(super::literal::parse_float(pair, file)),
        Rule::doubleLit => Expression::LiteralDouble(super::literal::parse_double(pair, file)),
        Rule::intLit => Expression::LiteralInt(super::literal::parse_int(pair, file)),
        Rule::string => Expression::LiteralString(super::literal::parse_string(pair, file)),
        Rule::boolLit => Expression::LiteralBool(super::literal::parse_bool(pair, file)),
        Rule::nullLit => Expression::LiteralNull(super::literal::parse_null(pair, file)),
        Rule::ident => Expression::VarRef(super::var_ref::parse_var_ref(pair, file)),
        Rule::expr => super::expression::parse_expr(pair, file),
        other => unreachable!("unexpected primary rule {other:?}"),
    }
}
