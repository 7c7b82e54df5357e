use pest::iterators::Pair;

use super::extern_block::ExternBlock;
use super::func_def::FuncDef;
use super::statement::Statement;
use super::struct_def::StructDef;
use crate::parser::Rule;

/// `block = "{" item* "}"`, `item = structDef | externBlock | funcDef |
/// statement`. Nested declarations are legal anywhere a statement is (the
/// grammar doesn't restrict them to the top level), so a block is a flat
/// list of items rather than a statement list plus a separate
/// declaration list.
pub type Block = Vec<Item>;

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    StructDef(StructDef),
    ExternBlock(ExternBlock),
    FuncDef(FuncDef),
    Statement(Statement),
}

pub fn parse_block(pair: Pair<Rule>, file: &str) -> Block {
    assert_eq!(pair.as_rule(), Rule::block);
    pair.into_inner().map(|p| parse_item(p, file)).collect()
}

fn parse_item(pair: Pair<Rule>, file: &str) -> Item {
    match pair.as_rule() {
        Rule::structDef => Item::StructDef(super::struct_def::parse_struct_def(pair, file)),
        Rule::externBlock => Item::ExternBlock(super::extern_block::parse_extern_block(pair, file)),
        Rule::funcDef => Item::FuncDef(super::func_def::parse_func_def(pair, file)),
        _ => Item::Statement(super::statement::parse_statement(pair, file)),
    }
}
