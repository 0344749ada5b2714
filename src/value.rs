//! The heterogeneous result of evaluating a node (spec §4.C): most node
//! kinds produce a field, but type expressions produce a constructor,
//! function-valued declarations produce a function, and a few
//! structural node kinds (`ParamList`, `ExprList`, a parameter `Decl`)
//! produce intermediate shapes only their direct caller understands.

use crate::field::{FieldConstructor, FieldId};
use crate::function::FunctionHandle;

#[derive(Debug, Clone)]
pub enum Value {
    /// A field already placed in the `Dom` arena: the common case for
    /// constants, identifiers, struct instances, array instances, and the
    /// results of binary/unary operations and assignments.
    Field(FieldId),
    /// What an `IdentifierType`/`TypeDecl` resolves to when it names a
    /// scalar or string type rather than an inline struct body.
    Constructor(FieldConstructor),
    /// A bound function value, user-defined or native.
    Function(FunctionHandle),
    /// The `(name, constructor)` pair produced by evaluating a `Decl` that
    /// sits inside a `ParamList` (`is_func_param` is set).
    FuncParam(String, FieldConstructor),
    /// The parameter list collected by evaluating a `ParamList` node.
    ParamList(Vec<(String, FieldConstructor)>),
    /// The argument values collected by evaluating an `ExprList` node.
    Exprs(Vec<Value>),
    /// A typedef registration, or any other node kind with no meaningful
    /// result value.
    Void,
}
