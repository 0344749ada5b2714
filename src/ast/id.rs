use crate::coord::Coord;

/// A bare identifier reference, resolved via the scope stack's
/// locals-before-vars lookup.
#[derive(Debug, Clone)]
pub struct Id {
    pub name: String,
    pub coord: Coord,
}
