use crate::coord::Coord;
use crate::error::{InterpError, InterpResult};
use crate::field::{FieldId, FieldValue, IntWidth};
use crate::interp::Interpreter;
use crate::scope::ScopeStack;
use crate::stream::ByteStream;
use crate::value::Value;

/// `Strlen(x)`: the length of a string field, or the element count of an
/// array field.
pub fn strlen(
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
            "Strlen expects a single field argument".into(),
        ));
    };

    let len = match interp.dom().value(*id) {
        FieldValue::Str { value, .. } => value.len(),
        FieldValue::Array { elements, .. } => elements.len(),
        _ => 0,
    };

    Ok(Value::Field(interp.dom_mut().insert_ephemeral(FieldValue::Int {
        signed: true,
        width: IntWidth::Int,
        value: len as i64,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::unknown;
    use crate::field::StrKind;
    use crate::interp::Limits;
    use crate::stream::SliceStream;

    #[test]
    fn counts_string_bytes() {
        let mut interp = Interpreter::new(Limits::default());
        let id = interp.dom_mut().insert_ephemeral(FieldValue::Str {
            value: "hello".into(),
            kind: StrKind::ZeroTerminated,
        });
        let mut scope = interp.new_root_scope();
        let mut stream = SliceStream::new(Vec::new());
        let result = strlen(&[Value::Field(id)], None, &mut scope, &mut stream, &mut interp, &unknown());
        let Value::Field(result_id) = result.unwrap() else {
            panic!("expected a field");
        };
        assert_eq!(interp.dom().value(result_id).to_scalar(), crate::field::Scalar::Int(5));
    }
}
