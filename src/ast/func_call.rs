use crate::coord::Coord;

use super::Node;

/// `name(args)`. `name` is an expression that must evaluate to a function
/// value (typically an [`super::id::Id`]); `args` is an
/// [`super::expr_list::ExprList`].
#[derive(Debug, Clone)]
pub struct FuncCall {
    pub name: Box<Node>,
    pub args: Box<Node>,
    pub coord: Coord,
}
