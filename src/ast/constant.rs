use crate::coord::Coord;

/// A literal: `kind` is the literal's lexical family (`"int"`, `"long"`,
/// `"float"`, `"double"`, `"char"`, `"string"`) and `value` is its raw,
/// unparsed text (still quoted for char/string literals).
#[derive(Debug, Clone)]
pub struct Constant {
    pub kind: String,
    pub value: String,
    pub coord: Coord,
}
