use std::fmt::Display;

use pest::iterators::Pair;

use super::{position_of, Expression, Position};
use crate::parser::Rule;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

impl BinOp {
    fn from_str(op: &str) -> BinOp {
        match op {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "%" => BinOp::Mod,
            "==" => BinOp::Eq,
            "!=" => BinOp::Neq,
            "<" => BinOp::Lt,
            ">" => BinOp::Gt,
            "<=" => BinOp::Le,
            ">=" => BinOp::Ge,
            "&&" => BinOp::And,
            "||" => BinOp::Or,
            other => unreachable!("unknown binary operator '{other}'"),
        }
    }
}

/// The operator renders to the identical C token; carbono's arithmetic and
/// comparison operators are a strict subset of C's.
impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: BinOp,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub position: Position,
}

/// Parses one of the precedence levels (`orExpr`, `andExpr`, `cmpExpr`,
/// `addExpr`, `mulExpr`) into a left-associative chain of `BinaryOp` nodes,
/// recursing one level down for each operand. A level with a single operand
/// and no operator collapses to that operand directly, so e.g. a bare
/// identifier never gets wrapped in a spurious `BinaryOp`.
pub fn parse_binary_level(pair: Pair<Rule>, file: &str) -> Expression {
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let first = inner.next().expect("binary level has at least one operand");
    let mut lhs = descend(first, file);

    loop {
        let Some(op_pair) = inner.next() else {
            return lhs;
        };
        let op = BinOp::from_str(op_pair.as_str());
        let rhs_pair = inner.next().expect("operator without right operand");
        let rhs = descend(rhs_pair, file);

        lhs = Expression::BinaryOp(BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position: position.clone(),
        });
    }
}

fn descend(pair: Pair<Rule>, file: &str) -> Expression {
    match pair.as_rule() {
        Rule::orExpr | Rule::andExpr | Rule::cmpExpr | Rule::addExpr | Rule::mulExpr => {
            parse_binary_level(pair, file)
        }
        Rule::unaryExpr => super::unary_op::parse_unary(pair, file),
        other => unreachable!("unexpected operand rule {other:?}"),
    }
}
