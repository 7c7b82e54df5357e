use pest::iterators::Pair;

use super::{position_of, Expression, Position, TypeName};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub type_name: TypeName,
    pub init: Option<Expression>,
    pub position: Position,
}

pub fn parse_var_decl(pair: Pair<Rule>, file: &str) -> VarDecl {
    assert_eq!(pair.as_rule(), Rule::varDecl);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let name = inner.next().expect("varDecl has a name").as_str().to_owned();
    let type_name = TypeName::from_pair(inner.next().expect("varDecl has a type"));
    let init = inner.next().map(|p| super::expression::parse_expr(p, file));

    VarDecl {
        name,
        type_name,
        init,
        position,
    }
}
