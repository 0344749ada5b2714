use crate::coord::Coord;
use crate::error::{InterpError, InterpResult};
use crate::field::{FieldId, FieldValue, IntWidth};
use crate::interp::Interpreter;
use crate::scope::ScopeStack;
use crate::stream::ByteStream;
use crate::value::Value;

/// `ArrayLength(x)`: the element count of an array field. Unlike `Strlen`,
/// a non-array argument is a template error rather than a silent `0`.
pub fn array_length(
    args: &[Value],
    _ctxt: Option<FieldId>,
    _scope: &mut ScopeStack,
    _stream: &mut dyn ByteStream,
    interp: &mut Interpreter,
    coord: &Coord,
) -> InterpResult<Value> {
    let Some(Value::Field(id)) = args.first() else {
        return Err(InterpError::UnresolvedID(
            coord.clone(),
            "ArrayLength expects a single field argument".into(),
        ));
    };

    let FieldValue::Array { elements, .. } = interp.dom().value(*id) else {
        return Err(InterpError::UnresolvedID(
            coord.clone(),
            "ArrayLength expects an array field".into(),
        ));
    };
    let len = elements.len();

    Ok(Value::Field(interp.dom_mut().insert_ephemeral(FieldValue::Int {
        signed: true,
        width: IntWidth::Int,
        value: len as i64,
    })))
}
