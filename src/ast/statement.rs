use pest::iterators::Pair;

use super::assert_stmt::AssertStmt;
use super::assign::Assign;
use super::control_flow::{Break, Continue, Return};
use super::for_loop::ForLoop;
use super::if_stmt::If;
use super::infinito::InfiniteLoop;
use super::input_pause::InputPause;
use super::var_decl::VarDecl;
use super::while_loop::WhileLoop;
use super::Expression;
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDecl(VarDecl),
    Assign(Assign),
    If(If),
    WhileLoop(WhileLoop),
    ForLoop(ForLoop),
    InfiniteLoop(InfiniteLoop),
    Break(Break),
    Continue(Continue),
    Return(Return),
    InputPause(InputPause),
    AssertStmt(AssertStmt),
    /// A bare expression evaluated for its side effect.
    ExprStmt(Expression),
    Block(super::Block),
}

pub fn parse_statement(pair: Pair<Rule>, file: &str) -> Statement {
    match pair.as_rule() {
        Rule::varDecl => Statement::VarDecl(super::var_decl::parse_var_decl(pair, file)),
        Rule::assignStmt => Statement::Assign(super::assign::parse_assign(pair, file)),
        Rule::ifStmt => Statement::If(super::if_stmt::parse_if(pair, file)),
        Rule::enquantoStmt => Statement::WhileLoop(super::while_loop::parse_while_loop(pair, file)),
        Rule::cadaStmt => Statement::ForLoop(super::for_loop::parse_for_loop(pair, file)),
        Rule::infinitoStmt => {
            Statement::InfiniteLoop(super::infinito::parse_infinite_loop(pair, file))
        }
        Rule::breakStmt => Statement::Break(super::control_flow::parse_break(pair, file)),
        Rule::continueStmt => Statement::Continue(super::control_flow::parse_continue(pair, file)),
        Rule::returnStmt => Statement::Return(super::control_flow::parse_return(pair, file)),
        Rule::inputPauseStmt => {
            Statement::InputPause(super::input_pause::parse_input_pause(pair, file))
        }
        Rule::assertStmt => Statement::AssertStmt(super::assert_stmt::parse_assert(pair, file)),
        Rule::exprStmt => {
            let inner = pair.into_inner().next().expect("exprStmt wraps an expr");
            Statement::ExprStmt(super::expression::parse_expr(inner, file))
        }
        Rule::block => Statement::Block(super::block::parse_block(pair, file)),
        other => unreachable!("unexpected statement rule {other:?}"),
    }
}
