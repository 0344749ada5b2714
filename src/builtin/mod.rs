//! The native function catalog (spec §4.D, SPEC_FULL.md §B.3): a small,
//! fixed set of built-ins registered once per process into a
//! `once_cell`-backed, write-once global, then bound as locals into every
//! fresh root scope ([`crate::interp::Interpreter::new_root_scope`]).
//!
//! The original interpreter populates its catalog by globbing a directory
//! of Python plugin modules at runtime; file/template discovery is out of
//! scope here (spec §1), so this crate ships the catalog as `const` data
//! instead. The "idempotent, process-global, write-once" contract is the
//! same either way — `OnceCell` just expresses it without touching the
//! filesystem.

mod array_length;
mod printf;
mod strlen;

use once_cell::sync::OnceCell;

use crate::function::NativeFunction;

const CATALOG: &[NativeFunction] = &[
    NativeFunction {
        name: "Strlen",
        return_type: "int",
        callable: strlen::strlen,
    },
    NativeFunction {
        name: "ArrayLength",
        return_type: "int",
        callable: array_length::array_length,
    },
    NativeFunction {
        name: "Printf",
        return_type: "void",
        callable: printf::printf,
    },
];

static REGISTRY: OnceCell<Vec<NativeFunction>> = OnceCell::new();

/// Returns the process-wide builtin catalog, registering it on first call.
/// Calling this from multiple `Interpreter`s (or threads) only ever runs
/// registration once.
pub fn catalog() -> &'static [NativeFunction] {
    REGISTRY.get_or_init(|| {
        log::debug!("registering {} builtin function(s)", CATALOG.len());
        CATALOG.to_vec()
    })
}
