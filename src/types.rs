//! The type resolver (spec §4.B): reduces a name chain like
//! `["unsigned", "BYTE"]` down through the scope's typedef table to a
//! closed set of base type names, then builds the matching
//! [`FieldConstructor`].

use crate::coord::Coord;
use crate::error::{InterpError, InterpResult};
use crate::field::{FieldConstructor, IntWidth};
use crate::scope::ScopeStack;

/// Resolves a type-name chain against `scope`'s typedef table. Qualifiers
/// (`unsigned`, `signed`) are expected as leading entries in `names`; the
/// last entry is always the "core" name being resolved.
pub fn resolve(names: &[String], scope: &ScopeStack, coord: &Coord) -> InterpResult<FieldConstructor> {
    let mut names = names.to_vec();
    loop {
        let Some(core) = names.last().cloned() else {
            return Err(InterpError::UnresolvedType(
                coord.clone(),
                String::new(),
                String::new(),
            ));
        };

        if let Some(ctor) = base_constructor(&core, &names[..names.len() - 1]) {
            return Ok(ctor);
        }

        match scope.get_type(&core) {
            Some(resolved) => {
                names.pop();
                names.extend(resolved);
            }
            None => {
                return Err(InterpError::UnresolvedType(
                    coord.clone(),
                    names.join(" "),
                    core,
                ));
            }
        }
    }
}

/// Maps a resolved core type name to a constructor, applying the
/// `unsigned` qualifier where it's meaningful (the integer family:
/// char/short/int/long). `long` aliases to the same 32-bit `Int` family as
/// `int` (SPEC_FULL.md §B.6).
fn base_constructor(core: &str, qualifiers: &[String]) -> Option<FieldConstructor> {
    let unsigned = qualifiers.iter().any(|q| q == "unsigned");

    Some(match core {
        "char" => {
            if unsigned {
                FieldConstructor::Int {
                    signed: false,
                    width: IntWidth::Char,
                }
            } else {
                FieldConstructor::Char
            }
        }
        "short" => FieldConstructor::Int {
            signed: !unsigned,
            width: IntWidth::Short,
        },
        "int" | "long" => FieldConstructor::Int {
            signed: !unsigned,
            width: IntWidth::Int,
        },
        "double" => FieldConstructor::Double,
        "float" => FieldConstructor::Float,
        "void" => FieldConstructor::Void,
        "string" => FieldConstructor::Str,
        "wstring" => FieldConstructor::WStr,
        _ => return None,
    })
}
