use pest::iterators::Pair;

use super::{position_of, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralInt {
    pub value: i64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct LiteralDouble {
    pub value: f64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct LiteralFloat {
    pub value: f32,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralString {
    pub value: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralBool {
    pub value: bool,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNull {
    pub position: Position,
}

pub fn parse_int(pair: Pair<Rule>, file: &str) -> LiteralInt {
    let position = position_of(&pair, file);
    let value = pair.as_str().parse().expect("intLit is all ASCII digits");
    LiteralInt { value, position }
}

pub fn parse_double(pair: Pair<Rule>, file: &str) -> LiteralDouble {
    let position = position_of(&pair, file);
    let value = pair.as_str().parse().expect("doubleLit is a valid f64");
    LiteralDouble { value, position }
}

pub fn parse_float(pair: Pair<Rule>, file: &str) -> LiteralFloat {
    let position = position_of(&pair, file);
    let text = pair.as_str().trim_end_matches('f');
    let value = text.parse().expect("floatLit is a valid f32");
    LiteralFloat { value, position }
}

/// The lexer strips the surrounding quotes before handing us `stringInner`;
/// escapes (`\n`, `\t`, `\r`, `\\`, `\"`) are unescaped here, once, up front.
/// `${...}` interpolation fragments are left untouched for
/// [`crate::interp`] to scan later.
pub fn parse_string(pair: Pair<Rule>, file: &str) -> LiteralString {
    let position = position_of(&pair, file);
    let raw = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
    let value = unescape::unescape(raw).unwrap_or_else(|| raw.to_owned());
    LiteralString { value, position }
}

pub fn parse_bool(pair: Pair<Rule>, file: &str) -> LiteralBool {
    let position = position_of(&pair, file);
    let value = pair.as_str() == "verdadeiro";
    LiteralBool { value, position }
}

pub fn parse_null(pair: Pair<Rule>, file: &str) -> LiteralNull {
    LiteralNull {
        position: position_of(&pair, file),
    }
}
