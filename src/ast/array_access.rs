use super::{Expression, Position};

/// Always a `base`+`index` shape; the bare-name shortcut collapses into
/// this too (the base is simply a `VarRef`).
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub base: Box<Expression>,
    pub index: IndexKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndexKind {
    Single(Box<Expression>),
    /// `arr[lo..hi]`: a half-open slice.
    Slice(Box<Expression>, Box<Expression>),
}
