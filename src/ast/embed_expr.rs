use pest::iterators::Pair;

use super::{literal::parse_string, position_of, Position};
use crate::parser::Rule;

/// `@embutir("path")`: a compile-time resource inlining
/// primitive, lowered by [`crate::embed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub path: String,
    pub position: Position,
}

pub fn parse_embed(pair: Pair<Rule>, file: &str) -> Embed {
    assert_eq!(pair.as_rule(), Rule::embedExpr);
    let position = position_of(&pair, file);
    let path_pair = pair.into_inner().next().expect("embedExpr has a path string");
    let path = parse_string(path_pair, file).value;
    Embed { path, position }
}
