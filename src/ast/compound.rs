use crate::coord::Coord;

use super::Node;

/// A `{ ... }` block: the only construct that pushes its own scope frame
/// and is sensitive to a `return` unwinding through it.
#[derive(Debug, Clone)]
pub struct Compound {
    pub children: Vec<Node>,
    pub coord: Coord,
}
