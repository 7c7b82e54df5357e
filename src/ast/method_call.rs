use super::{Expression, Position};

/// `receiver.m(args)`. The receiver is always an expression; the common
/// case of a bare-name receiver is just a `VarRef`, same simplification as
/// `ArrayAccess`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub receiver: Box<Expression>,
    pub method: String,
    pub args: Vec<Expression>,
    pub position: Position,
}
