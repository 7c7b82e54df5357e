use pest::iterators::Pair;

use super::{position_of, Expression, Position};
use crate::parser::Rule;

/// `assignTarget = "postfixExpr" | "ident"`: either a bare name or a
/// postfix chain ending in a prop/array access. Both resolve to an
/// `Expression` so the lowering side has one assignment-target shape to
/// handle instead of two.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: Expression,
    pub value: Expression,
    pub position: Position,
}

pub fn parse_assign(pair: Pair<Rule>, file: &str) -> Assign {
    assert_eq!(pair.as_rule(), Rule::assignStmt);
    let position = position_of(&pair, file);
    let mut inner = pair.into_inner();

    let target_pair = inner.next().expect("assignStmt has a target");
    let target = parse_assign_target(target_pair, file);
    let value = super::expression::parse_expr(
        inner.next().expect("assignStmt has a value"),
        file,
    );

    Assign {
        target,
        value,
        position,
    }
}

fn parse_assign_target(pair: Pair<Rule>, file: &str) -> Expression {
    assert_eq!(pair.as_rule(), Rule::assignTarget);
    let inner = pair
        .into_inner()
        .next()
        .expect("assignTarget wraps a postfixExpr or ident");
    match inner.as_rule() {
        Rule::postfixExpr => super::postfix_expr::parse_postfix(inner, file),
        Rule::ident => Expression::VarRef(super::var_ref::parse_var_ref(inner, file)),
        other => unreachable!("unexpected assignTarget child {other:?}"),
    }
}
