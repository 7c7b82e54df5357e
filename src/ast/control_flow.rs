use pest::iterators::Pair;

use super::{position_of, Expression, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Continue {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expression>,
    pub position: Position,
}

pub fn parse_break(pair: Pair<Rule>, file: &str) -> Break {
    assert_eq!(pair.as_rule(), Rule::breakStmt);
    Break {
        position: position_of(&pair, file),
    }
}

pub fn parse_continue(pair: Pair<Rule>, file: &str) -> Continue {
    assert_eq!(pair.as_rule(), Rule::continueStmt);
    Continue {
        position: position_of(&pair, file),
    }
}

pub fn parse_return(pair: Pair<Rule>, file: &str) -> Return {
    assert_eq!(pair.as_rule(), Rule::returnStmt);
    let position = position_of(&pair, file);
    let value = pair
        .into_inner()
        .next()
        .map(|p| super::expression::parse_expr(p, file));
    Return { value, position }
}
