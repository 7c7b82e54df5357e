use pest::iterators::Pair;

use super::{position_of, Position};
use crate::parser::Rule;

/// `ler();` used as a bare statement: pauses for one line of stdin input
/// and discards it — distinct from `ler()` used as a value in
/// expression position ([`super::input_value_expr::InputValue`]).
#[derive(Debug, Clone, PartialEq)]
pub struct InputPause {
    pub position: Position,
}

pub fn parse_input_pause(pair: Pair<Rule>, file: &str) -> InputPause {
    assert_eq!(pair.as_rule(), Rule::inputPauseStmt);
    InputPause {
        position: position_of(&pair, file),
    }
}
