use pest::iterators::Pair;

use super::param::{parse_param_list, Param};
use super::{position_of, Block, Position, TypeName};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: TypeName,
    /// A function declared with a `;` body instead of a block is a
    /// forward declaration.
    pub body: Option<Block>,
    pub position: Position,
}

pub fn parse_func_def(pair: Pair<Rule>, file: &str) -> FuncDef {
    assert_eq!(pair.as_rule(), Rule::funcDef);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner().peekable();

    let name = inner.next().expect("funcDef has a name").as_str().to_owned();

    let params = if matches!(inner.peek().map(|p| p.as_rule()), Some(Rule::paramList)) {
        parse_param_list(inner.next().unwrap())
    } else {
        Vec::new()
    };

    let return_type = TypeName::from_pair(inner.next().expect("funcDef has a return type"));

    let body = inner
        .next()
        .filter(|p| p.as_rule() == Rule::block)
        .map(|p| super::block::parse_block(p, file));

    FuncDef {
        name,
        params,
        return_type,
        body,
        position,
    }
}
