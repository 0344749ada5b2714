use crate::coord::Coord;

/// A bare type name chain, e.g. `unsigned long` is `["unsigned", "long"]`.
/// Resolved against the scope's type table into a [`crate::field::FieldConstructor`].
#[derive(Debug, Clone)]
pub struct IdentifierType {
    pub names: Vec<String>,
    pub coord: Coord,
}
