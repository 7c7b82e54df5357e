use pest::iterators::Pair;

use super::{position_of, Block, Expression, Position};
use crate::parser::Rule;

/// `enquanto (cond) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Block,
    pub position: Position,
}

pub fn parse_while_loop(pair: Pair<Rule>, file: &str) -> WhileLoop {
    assert_eq!(pair.as_rule(), Rule::enquantoStmt);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let condition = super::expression::parse_expr(inner.next().expect("enquantoStmt has a condition"), file);
    let body = super::block::parse_block(inner.next().expect("enquantoStmt has a body"), file);

    WhileLoop {
        condition,
        body,
        position,
    }
}
