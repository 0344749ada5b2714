use crate::coord::Coord;

use super::Node;

/// `op` is one of `"p++"`, `"p--"`, `"~"`, `"!"`.
#[derive(Debug, Clone)]
pub struct UnaryOp {
    pub op: String,
    pub expr: Box<Node>,
    pub coord: Coord,
}
