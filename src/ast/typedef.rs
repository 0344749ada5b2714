use crate::coord::Coord;

use super::Node;

/// `typedef <type> <name>;`. `type_node` is expected to be a
/// [`super::type_decl::TypeDecl`] wrapping an
/// [`super::identifier_type::IdentifierType`]; the evaluator pulls the name
/// chain out of that nesting rather than requiring the caller to flatten it
/// up front, matching how the rest of the tree is shaped.
#[derive(Debug, Clone)]
pub struct Typedef {
    pub name: String,
    pub type_node: Box<Node>,
    pub coord: Coord,
}
