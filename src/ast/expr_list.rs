use crate::coord::Coord;

use super::Node;

#[derive(Debug, Clone)]
pub struct ExprList {
    pub exprs: Vec<Node>,
    pub coord: Coord,
}
