//! The scope stack (spec §4.A): a sequence of frames, each holding three
//! independent namespaces (types, locals, vars), searched innermost-first.
//!
//! `ScopeStack` is a cheap-to-clone handle around a shared frame sequence
//! (`Rc<RefCell<Vec<Frame>>>`) rather than an owned `Vec`. This matters for
//! function values: a function captures the scope *at its definition site*,
//! and the original interpreter's `Scope.clone()` hands out a reference to
//! the same underlying frame list rather than a deep copy. A recursive call
//! pushes a fresh frame onto that *same* shared sequence every time it's
//! invoked, so the stack's depth really does track recursion depth — which
//! is exactly why `Limits::max_scope_depth` (SPEC_FULL.md §A.3) is checked
//! against `ScopeStack::depth`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::field::FieldId;
use crate::function::FunctionHandle;

/// What an identifier can resolve to via [`ScopeStack::get_id`]: either a
/// local (a scalar binding or a function value) or a var (always a parsed
/// field).
#[derive(Debug, Clone)]
pub enum LocalValue {
    Field(FieldId),
    Function(FunctionHandle),
}

#[derive(Debug, Default)]
struct Frame {
    types: HashMap<String, Vec<String>>,
    locals: HashMap<String, LocalValue>,
    vars: HashMap<String, FieldId>,
}

#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl ScopeStack {
    /// A fresh stack with exactly one frame (invariant 3: never empty).
    pub fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(vec![Frame::default()])),
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn push(&self) {
        self.frames.borrow_mut().push(Frame::default());
    }

    /// Pops the innermost frame. Refuses (logging a warning) to remove the
    /// bottom frame rather than violating invariant 3.
    pub fn pop(&self) {
        let mut frames = self.frames.borrow_mut();
        if frames.len() > 1 {
            frames.pop();
        } else {
            log::warn!("scope stack pop() called at depth 1; ignoring");
        }
    }

    pub fn add_var(&self, name: impl Into<String>, field: FieldId) {
        let mut frames = self.frames.borrow_mut();
        let top = frames.last_mut().expect("scope stack is never empty");
        top.vars.insert(name.into(), field);
    }

    pub fn add_local(&self, name: impl Into<String>, value: LocalValue) {
        let mut frames = self.frames.borrow_mut();
        let top = frames.last_mut().expect("scope stack is never empty");
        top.locals.insert(name.into(), value);
    }

    /// Registers a typedef, reducing `orig_names` through any typedef chain
    /// already visible so that what's stored is always grounded in base
    /// type names (or an as-yet-unresolved name, which a later lookup will
    /// keep trying to reduce).
    pub fn add_type(&self, new_name: impl Into<String>, orig_names: Vec<String>) {
        let resolved = self.reduce_type_chain(orig_names);
        let mut frames = self.frames.borrow_mut();
        let top = frames.last_mut().expect("scope stack is never empty");
        top.types.insert(new_name.into(), resolved);
    }

    pub fn get_var(&self, name: &str) -> Option<FieldId> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find_map(|f| f.vars.get(name).copied())
    }

    pub fn get_local(&self, name: &str) -> Option<LocalValue> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find_map(|f| f.locals.get(name).cloned())
    }

    pub fn get_type(&self, name: &str) -> Option<Vec<String>> {
        self.frames
            .borrow()
            .iter()
            .rev()
            .find_map(|f| f.types.get(name).cloned())
    }

    /// Locals-before-vars lookup across the *entire* stack: every frame's
    /// locals are checked, innermost-first, before any frame's vars are
    /// considered. A local declared several frames out still shadows a var
    /// declared in the current frame.
    pub fn get_id(&self, name: &str) -> Option<LocalValue> {
        if let Some(local) = self.get_local(name) {
            return Some(local);
        }
        self.get_var(name).map(LocalValue::Field)
    }

    fn reduce_type_chain(&self, names: Vec<String>) -> Vec<String> {
        let mut names = names;
        loop {
            let Some(last) = names.last().cloned() else {
                break;
            };
            match self.get_type(&last) {
                Some(resolved) => {
                    names.pop();
                    names.extend(resolved);
                }
                None => break,
            }
        }
        names
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
