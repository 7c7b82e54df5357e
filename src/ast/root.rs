use pest::iterators::Pair;

use super::literal::parse_string;
use super::{position_of, Block, Position};
use crate::parser::Rule;

/// Every source file is either a standalone `programa` (has a `main`
/// entry point, emits an executable) or a `biblioteca` (no entry point,
/// emits relocatable object code for other programs to `extern`).
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Programa,
    Biblioteca,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub kind: Kind,
    pub name: String,
    pub body: Block,
    pub position: Position,
}

pub fn parse_root(pair: Pair<Rule>, file: &str) -> Root {
    assert_eq!(pair.as_rule(), Rule::root);
    let inner = pair
        .into_inner()
        .next()
        .expect("root wraps programaRoot or bibliotecaRoot");

    let position = position_of(&inner, file);
    let kind = match inner.as_rule() {
        Rule::programaRoot => Kind::Programa,
        Rule::bibliotecaRoot => Kind::Biblioteca,
        other => unreachable!("unexpected root rule {other:?}"),
    };

    let mut fields = inner.into_inner();
    let name = parse_string(fields.next().expect("root has a program name"), file).value;
    let body = super::block::parse_block(fields.next().expect("root has a body block"), file);

    Root {
        kind,
        name,
        body,
        position,
    }
}
