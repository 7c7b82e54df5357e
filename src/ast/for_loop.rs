use pest::iterators::Pair;

use super::{position_of, Block, Expression, Position, TypeName};
use crate::parser::Rule;

/// `cada (i[: T]: lo..hi [passo step]) { ... }`: a half-open numeric range
/// loop with an optional step and an optional explicit element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub var_name: String,
    pub var_type: Option<TypeName>,
    pub start: Expression,
    pub end: Expression,
    pub step: Option<Expression>,
    pub body: Block,
    pub position: Position,
}

pub fn parse_for_loop(pair: Pair<Rule>, file: &str) -> ForLoop {
    assert_eq!(pair.as_rule(), Rule::cadaStmt);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner().peekable();

    let var_name = inner.next().expect("cadaStmt has a var name").as_str().to_owned();

    let var_type = if matches!(inner.peek().map(|p| p.as_rule()), Some(Rule::typeName)) {
        Some(TypeName::from_pair(inner.next().unwrap()))
    } else {
        None
    };

    let start = super::expression::parse_expr(inner.next().expect("cadaStmt has a start bound"), file);
    let end = super::expression::parse_expr(inner.next().expect("cadaStmt has an end bound"), file);

    // Remaining children are either an optional step expr followed by the
    // body block, or just the body block.
    let mut remaining: Vec<_> = inner.collect();
    let body_pair = remaining.pop().expect("cadaStmt has a body block");
    let step = remaining
        .into_iter()
        .next()
        .map(|p| super::expression::parse_expr(p, file));
    let body = super::block::parse_block(body_pair, file);

    ForLoop {
        var_name,
        var_type,
        start,
        end,
        step,
        body,
        position,
    }
}
