use super::{Expression, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct PropAccess {
    pub receiver: Box<Expression>,
    pub field: String,
    pub position: Position,
}
