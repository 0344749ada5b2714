use crate::coord::Coord;

use super::Node;

#[derive(Debug, Clone)]
pub struct Assignment {
    pub lvalue: Box<Node>,
    pub rvalue: Box<Node>,
    pub coord: Coord,
}
