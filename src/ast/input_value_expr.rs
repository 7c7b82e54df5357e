use pest::iterators::Pair;

use super::{position_of, Position};
use crate::parser::Rule;

/// `ler()` used in expression position; distinct from the
/// statement-level `ler();` pause, which discards the read value.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub position: Position,
}

pub fn parse_input_value(pair: Pair<Rule>, file: &str) -> InputValue {
    InputValue {
        position: position_of(&pair, file),
    }
}
