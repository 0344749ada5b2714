//! The DOM data model (spec §3): a polymorphic `Field`, owned inside a
//! `Dom` arena so that parent back-links can be a plain, `Copy` key instead
//! of a real reference — the spec's Design Note recommends exactly this
//! shape, and `slotmap` is the idiomatic way to get it.

mod constructor;
mod value;

pub use constructor::FieldConstructor;
pub use value::{FieldValue, IntWidth, Scalar, StrKind};

slotmap::new_key_type! {
    /// A stable handle to a field inside a [`Dom`]. Cheap to copy, cheap to
    /// store as a parent back-link.
    pub struct FieldId;
}

/// A single node in the parsed tree: a name (assigned when it's bound into
/// a scope or a struct, empty for ephemeral intermediate values), an
/// optional parent, an optional byte range it was parsed from, and its
/// value.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Field {
    pub name: String,
    pub parent: Option<FieldId>,
    pub range: Option<(u64, u64)>,
    pub value: FieldValue,
}

/// The arena owning every field produced while evaluating a template. The
/// distinguished root (created once per [`crate::interp::Interpreter::run`]
/// call) is itself just a struct-shaped field.
#[derive(Debug, Default)]
pub struct Dom {
    arena: slotmap::SlotMap<FieldId, Field>,
}

impl Dom {
    pub fn new() -> Self {
        Self {
            arena: slotmap::SlotMap::with_key(),
        }
    }

    /// Inserts a field with no name, no parent, and no byte range —
    /// the shape every constructor-produced or computed (binary/unary op
    /// result, literal) field starts in before it's optionally bound.
    pub fn insert_ephemeral(&mut self, value: FieldValue) -> FieldId {
        self.arena.insert(Field {
            name: String::new(),
            parent: None,
            range: None,
            value,
        })
    }

    pub fn new_struct(&mut self, name: impl Into<String>) -> FieldId {
        let id = self.insert_ephemeral(FieldValue::Struct { children: vec![] });
        self.rename(id, name);
        id
    }

    pub fn get(&self, id: FieldId) -> &Field {
        self.arena.get(id).expect("dangling FieldId")
    }

    pub fn value(&self, id: FieldId) -> &FieldValue {
        &self.get(id).value
    }

    pub fn rename(&mut self, id: FieldId, name: impl Into<String>) {
        if let Some(field) = self.arena.get_mut(id) {
            field.name = name.into();
        }
    }

    pub fn set_range(&mut self, id: FieldId, start: u64, len: u64) {
        if let Some(field) = self.arena.get_mut(id) {
            field.range = Some((start, start + len));
        }
    }

    pub fn set_scalar(&mut self, id: FieldId, scalar: Scalar) {
        if let Some(field) = self.arena.get_mut(id) {
            field.value.assign_scalar(scalar);
        }
    }

    /// Attaches `child` as a named member of the struct field `parent`,
    /// in insertion order, and sets `child`'s name and parent back-link.
    pub fn add_child(&mut self, parent: FieldId, name: impl Into<String>, child: FieldId) {
        let name = name.into();
        if let Some(field) = self.arena.get_mut(child) {
            field.name = name.clone();
            field.parent = Some(parent);
        }
        if let Some(parent_field) = self.arena.get_mut(parent) {
            if let FieldValue::Struct { children } = &mut parent_field.value {
                children.push((name, child));
            }
        }
    }
}
