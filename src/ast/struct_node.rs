use crate::coord::Coord;

use super::Node;

/// A `struct { ... }` body: an ordered list of member declarations,
/// evaluated into a struct-shaped field.
#[derive(Debug, Clone)]
pub struct StructNode {
    pub decls: Vec<Node>,
    pub coord: Coord,
}
