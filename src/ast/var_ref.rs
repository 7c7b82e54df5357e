use pest::iterators::Pair;

use super::{position_of, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct VarRef {
    pub name: String,
    pub position: Position,
}

pub fn parse_var_ref(pair: Pair<Rule>, file: &str) -> VarRef {
    assert_eq!(pair.as_rule(), Rule::ident);
    VarRef {
        name: pair.as_str().to_owned(),
        position: position_of(&pair, file),
    }
}
