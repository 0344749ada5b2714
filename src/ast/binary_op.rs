use crate::coord::Coord;

use super::Node;

#[derive(Debug, Clone)]
pub struct BinaryOp {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub coord: Coord,
}
