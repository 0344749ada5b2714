use crate::coord::Coord;

use super::Node;

/// Wraps a type expression (an [`super::identifier_type::IdentifierType`] or
/// a nested [`super::struct_node::StructNode`]) and carries the declared
/// name for the binding it belongs to. Transparent when evaluated: it simply
/// forwards to whatever `type_node` produces.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub declname: Option<String>,
    pub type_node: Box<Node>,
    pub coord: Coord,
}
