use crate::coord::Coord;

use super::Node;

/// `<type> <name>[<dim>];`. `dim` is evaluated once, eagerly, to an integer
/// element count. Nested the same way a scalar declaration's type is
/// (typically `type_node` is a [`super::type_decl::TypeDecl`]); unlike a
/// scalar, an `ArrayDecl` never appears bare as a declaration's sole type
/// expression — it sits as the `type` of the enclosing [`super::decl::Decl`],
/// which is the only place `quals` (and therefore `local`-ness) lives. This
/// node carries no binding name or locality of its own: both come from that
/// enclosing `Decl`, exactly as for any other declaration shape.
///
/// `dim_quals` mirrors the real parser's array-dimension qualifiers (e.g.
/// `static`/`const` on the dimension expression itself); this interpreter
/// has no use for them and they are not consulted anywhere.
#[derive(Debug, Clone)]
pub struct ArrayDecl {
    pub dim: Box<Node>,
    pub type_node: Box<Node>,
    pub dim_quals: Vec<String>,
    pub coord: Coord,
}
