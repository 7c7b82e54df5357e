use std::fmt::Display;

use pest::iterators::Pair;

use super::{position_of, postfix_expr::parse_postfix, Expression, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnOp {
    Neg,
    Not,
}

impl Display for UnOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: UnOp,
    pub operand: Box<Expression>,
    pub position: Position,
}

pub fn parse_unary(pair: Pair<Rule>, file: &str) -> Expression {
    assert_eq!(pair.as_rule(), Rule::unaryExpr);
    let position = position_of(&pair, file);

    let mut inner = pair.into_inner();
    let first = inner.next().expect("unaryExpr has at least one child");

    match first.as_rule() {
        Rule::unaryOp => {
            let op = match first.as_str() {
                "-" => UnOp::Neg,
                "!" => UnOp::Not,
                other => unreachable!("unknown unary operator '{other}'"),
            };
            let operand_pair = inner.next().expect("unary operator without operand");
            let operand = parse_unary(operand_pair, file);
            Expression::UnaryOp(UnaryOp {
                op,
                operand: Box::new(operand),
                position,
            })
        }
        Rule::postfixExpr => parse_postfix(first, file),
        other => unreachable!("unexpected unaryExpr child {other:?}"),
    }
}
