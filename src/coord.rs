//! Source coordinates attached to AST nodes for error reporting.

/// A position within the template source that produced a node: file name,
/// line, and column. Mirrors the `coord` attribute every AST node in spec
/// §6 carries.
pub type Coord = (String, usize, usize);

/// A coordinate to use when a node genuinely has none (e.g. synthesized in
/// tests). Not used by the evaluator itself.
pub const UNKNOWN: (&str, usize, usize) = ("<unknown>", 0, 0);

pub fn unknown() -> Coord {
    let (file, line, col) = UNKNOWN;
    (file.to_owned(), line, col)
}
