use pest::iterators::Pair;

use super::{position_of, Position, TypeName};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub type_name: TypeName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<StructField>,
    pub position: Position,
}

pub fn parse_struct_def(pair: Pair<Rule>, file: &str) -> StructDef {
    assert_eq!(pair.as_rule(), Rule::structDef);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let name = inner.next().expect("structDef has a name").as_str().to_owned();
    let fields = inner.map(parse_struct_member).collect();

    StructDef {
        name,
        fields,
        position,
    }
}

fn parse_struct_member(pair: Pair<Rule>) -> StructField {
    assert_eq!(pair.as_rule(), Rule::structMember);
    let mut inner = pair.into_inner();
    let name = inner.next().expect("structMember has a name").as_str().to_owned();
    let type_name = TypeName::from_pair(inner.next().expect("structMember has a type"));
    StructField { name, type_name }
}
