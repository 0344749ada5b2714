//! Function values (spec §4.D): user-defined functions close over the
//! scope they were defined in, and native functions are plain Rust
//! callbacks registered once per process (see [`crate::builtin`]).

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Node;
use crate::coord::Coord;
use crate::error::InterpResult;
use crate::field::{FieldConstructor, FieldId};
use crate::interp::Interpreter;
use crate::scope::ScopeStack;
use crate::stream::ByteStream;

/// A user-defined function: its signature is fixed at the point its
/// `FuncDecl` is evaluated, but its `name` (set when the declaration binds
/// it) and `body` (attached by the enclosing `FuncDef`) are filled in
/// afterward — so the value is built in two steps while staying the same
/// object every caller observes. `Rc<RefCell<..>>` gives that shared,
/// mutate-after-construction handle cheaply, the same shape the scope stack
/// itself uses for its frame sequence.
#[derive(Clone)]
pub struct FunctionValue(Rc<RefCell<FunctionInner>>);

struct FunctionInner {
    name: String,
    return_ctor: FieldConstructor,
    params: Vec<(String, FieldConstructor)>,
    captured_scope: ScopeStack,
    body: Node,
}

impl FunctionValue {
    pub fn new(
        return_ctor: FieldConstructor,
        params: Vec<(String, FieldConstructor)>,
        captured_scope: ScopeStack,
    ) -> Self {
        let empty_body = Node::Compound(crate::ast::Compound {
            children: vec![],
            coord: crate::coord::unknown(),
        });
        Self(Rc::new(RefCell::new(FunctionInner {
            name: String::new(),
            return_ctor,
            params,
            captured_scope,
            body: empty_body,
        })))
    }

    pub fn set_name(&self, name: String) {
        self.0.borrow_mut().name = name;
    }

    pub fn set_body(&self, body: Node) {
        self.0.borrow_mut().body = body;
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn params(&self) -> Vec<(String, FieldConstructor)> {
        self.0.borrow().params.clone()
    }

    pub fn captured_scope(&self) -> ScopeStack {
        self.0.borrow().captured_scope.clone()
    }

    pub fn body(&self) -> Node {
        self.0.borrow().body.clone()
    }
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FunctionValue({})", self.name())
    }
}

/// A process-global native function (spec §4.D, SPEC_FULL.md §B.3):
/// plain data (a name, a `fn` pointer, and a declared return type string),
/// so the catalog can be a `const` array rather than requiring allocation
/// at registration time.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub return_type: &'static str,
    pub callable: NativeCallable,
}

pub type NativeCallable = fn(
    args: &[crate::value::Value],
    ctxt: Option<FieldId>,
    scope: &mut ScopeStack,
    stream: &mut dyn ByteStream,
    interp: &mut Interpreter,
    coord: &Coord,
) -> InterpResult<crate::value::Value>;

#[derive(Debug, Clone)]
pub enum FunctionHandle {
    User(FunctionValue),
    Native(NativeFunction),
}

impl FunctionHandle {
    pub fn name(&self) -> String {
        match self {
            FunctionHandle::User(f) => f.name(),
            FunctionHandle::Native(n) => n.name.to_owned(),
        }
    }
}
