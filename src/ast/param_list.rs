use crate::coord::Coord;

use super::Node;

#[derive(Debug, Clone)]
pub struct ParamList {
    pub params: Vec<Node>,
    pub coord: Coord,
}
