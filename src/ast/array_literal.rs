use pest::iterators::Pair;

use super::{position_of, Expression, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub position: Position,
}

pub fn parse_array_literal(pair: Pair<Rule>, file: &str) -> ArrayLiteral {
    assert_eq!(pair.as_rule(), Rule::arrayLiteral);
    let position = position_of(&pair, file);
    let elements = pair
        .into_inner()
        .map(|p| super::expression::parse_expr(p, file))
        .collect();
    ArrayLiteral { elements, position }
}
