use pest::iterators::Pair;

use super::{literal::parse_string, position_of, Expression, Position};
use crate::parser::Rule;

/// `garantir(cond, "message");`: aborts the running program with
/// `message` on stderr when `cond` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertStmt {
    pub condition: Expression,
    pub message: String,
    pub position: Position,
}

pub fn parse_assert(pair: Pair<Rule>, file: &str) -> AssertStmt {
    assert_eq!(pair.as_rule(), Rule::assertStmt);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let condition = super::expression::parse_expr(inner.next().expect("assertStmt has a condition"), file);
    let message = parse_string(inner.next().expect("assertStmt has a message"), file).value;

    AssertStmt {
        condition,
        message,
        position,
    }
}
