use pest::iterators::Pair;

use super::{position_of, Block, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct InfiniteLoop {
    pub body: Block,
    pub position: Position,
}

pub fn parse_infinite_loop(pair: Pair<Rule>, file: &str) -> InfiniteLoop {
    assert_eq!(pair.as_rule(), Rule::infinitoStmt);
    let position = position_of(&pair, file);
    let body = super::block::parse_block(
        pair.into_inner().next().expect("infinitoStmt has a body"),
        file,
    );
    InfiniteLoop { body, position }
}
