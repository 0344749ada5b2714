use crate::coord::Coord;
use crate::error::InterpResult;
use crate::field::{FieldId, FieldValue};
use crate::interp::Interpreter;
use crate::scope::ScopeStack;
use crate::stream::ByteStream;
use crate::value::Value;

/// `Printf(...)`: a diagnostic sink. A template embedded in a host
/// application has no business writing to the host's stdout, so this
/// renders its arguments through the `log` facade instead (`info!` level)
/// rather than `println!`.
pub fn printf(
    args: &[Value],
    _ctxt: Option<FieldId>,
    _scope: &mut ScopeStack,
    _stream: &mut dyn ByteStream,
    interp: &mut Interpreter,
    coord: &Coord,
) -> InterpResult<Value> {
    let rendered: Vec<String> = args
        .iter()
        .map(|v| match v {
            Value::Field(id) => interp.dom().value(*id).display(),
            other => format!("{other:?}"),
        })
        .collect();
    log::info!("{:?}: Printf: {}", coord, rendered.join(" "));
    Ok(Value::Field(interp.dom_mut().insert_ephemeral(FieldValue::Void)))
}
