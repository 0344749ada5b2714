use crate::coord::Coord;

use super::Node;

/// The root of a parsed template: an ordered sequence of top-level
/// declarations and typedefs.
#[derive(Debug, Clone)]
pub struct FileAst {
    pub children: Vec<Node>,
    pub coord: Coord,
}
