use pest::iterators::Pair;

use super::literal::parse_string;
use super::param::{parse_param_list, Param};
use super::{position_of, Position, TypeName};
use crate::parser::Rule;

/// One declared entry point in an `extern` block; `link_name` is the
/// optional `como "symbol"` override for the dlsym lookup name (falls back
/// to the carbono-level name when absent).
#[derive(Debug, Clone, PartialEq)]
pub struct ExternFunc {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: TypeName,
    pub link_name: Option<String>,
}

/// `extern "libpath" como alias { ... }`: lowers to a namespace struct of
/// function pointers loaded via `dlopen`/`dlsym` under the alias name,
/// bound in the scope stack with the sentinel type `MODULE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternBlock {
    pub library_path: String,
    pub alias: String,
    pub funcs: Vec<ExternFunc>,
    pub position: Position,
}

pub fn parse_extern_block(pair: Pair<Rule>, file: &str) -> ExternBlock {
    assert_eq!(pair.as_rule(), Rule::externBlock);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let library_path = parse_string(inner.next().expect("externBlock has a library path"), file).value;
    let alias = inner.next().expect("externBlock has an alias").as_str().to_owned();
    let funcs = inner.map(|p| parse_extern_func(p, file)).collect();

    ExternBlock {
        library_path,
        alias,
        funcs,
        position,
    }
}

fn parse_extern_func(pair: Pair<Rule>, file: &str) -> ExternFunc {
    assert_eq!(pair.as_rule(), Rule::externFunc);
    let mut inner = pair.into_inner().peekable();

    let name = inner.next().expect("externFunc has a name").as_str().to_owned();

    let params = if matches!(inner.peek().map(|p| p.as_rule()), Some(Rule::paramList)) {
        parse_param_list(inner.next().unwrap())
    } else {
        Vec::new()
    };

    let return_type = TypeName::from_pair(inner.next().expect("externFunc has a return type"));

    let link_name = inner.next().map(|p| parse_string(p, file).value);

    ExternFunc {
        name,
        params,
        return_type,
        link_name,
    }
}
