use super::{Expression, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub name: String,
    pub args: Vec<Expression>,
    pub position: Position,
}
