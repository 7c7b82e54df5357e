use pest::iterators::Pair;

use super::{position_of, Position, TypeName};
use crate::parser::Rule;

/// `nova T`: allocates a zero-filled `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct New {
    pub type_name: TypeName,
    pub position: Position,
}

pub fn parse_new(pair: Pair<Rule>, file: &str) -> New {
    assert_eq!(pair.as_rule(), Rule::newExpr);
    let position = position_of(&pair, file);
    let type_name = TypeName::from_pair(pair.into_inner().next().expect("newExpr has a type"));
    New { type_name, position }
}
