use pest::iterators::Pair;

use super::TypeName;
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_name: TypeName,
}

pub fn parse_param(pair: Pair<Rule>) -> Param {
    assert_eq!(pair.as_rule(), Rule::param);
    let mut inner = pair.into_inner();
    let name = inner.next().expect("param has a name").as_str().to_owned();
    let type_name = TypeName::from_pair(inner.next().expect("param has a type"));
    Param { name, type_name }
}

pub fn parse_param_list(pair: Pair<Rule>) -> Vec<Param> {
    assert_eq!(pair.as_rule(), Rule::paramList);
    pair.into_inner().map(parse_param).collect()
}
