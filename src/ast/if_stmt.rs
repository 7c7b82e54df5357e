use pest::iterators::Pair;

use super::{position_of, Block, Expression, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expression,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub position: Position,
}

pub fn parse_if(pair: Pair<Rule>, file: &str) -> If {
    assert_eq!(pair.as_rule(), Rule::ifStmt);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let condition = super::expression::parse_expr(inner.next().expect("ifStmt has a condition"), file);
    let then_block = super::block::parse_block(inner.next().expect("ifStmt has a then block"), file);
    let else_block = inner.next().map(|p| super::block::parse_block(p, file));

    If {
        condition,
        then_block,
        else_block,
        position,
    }
}
