use crate::coord::Coord;
use crate::error::{InterpError, InterpResult};
use crate::stream::ByteStream;

use super::value::{IntWidth, StrKind};
use super::{Dom, FieldId, FieldValue};

/// A nullary field producer (spec §4.B/§6): invoked with a stream, it reads
/// and returns a populated field; invoked without one, it returns a
/// default-valued field (used for `local` declarations, which never touch
/// the stream).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum FieldConstructor {
    Char,
    Int { signed: bool, width: IntWidth },
    Float,
    Double,
    Str,
    WStr,
    /// An array of `count` elements of `element`. Deferring instantiation
    /// (rather than eagerly building the elements at `ArrayDecl` evaluation
    /// time) is what lets a `local` array skip the stream the same way a
    /// `local` scalar does — the decision belongs to whoever calls
    /// `instantiate`, exactly as for every other constructor variant.
    Array {
        element: Box<FieldConstructor>,
        count: usize,
    },
    Void,
}

/// A zero-terminated string longer than this is almost certainly a
/// malformed or adversarial stream, not a real template; bail out with
/// `LimitExceeded` instead of reading forever.
const MAX_CSTRING_LEN: usize = 1 << 20;

impl FieldConstructor {
    pub fn instantiate(
        &self,
        dom: &mut Dom,
        stream: Option<&mut dyn ByteStream>,
        coord: &Coord,
    ) -> InterpResult<FieldId> {
        match self {
            FieldConstructor::Void => Ok(dom.insert_ephemeral(FieldValue::Void)),
            FieldConstructor::Char => {
                read_fixed(dom, stream, coord, 1, |b| FieldValue::Char(b[0]))
            }
            FieldConstructor::Int { signed, width } => {
                let signed = *signed;
                let width = *width;
                let n = width.byte_len();
                read_fixed(dom, stream, coord, n, move |bytes| {
                    let mut buf = [0u8; 8];
                    buf[..bytes.len()].copy_from_slice(bytes);
                    let raw = u64::from_le_bytes(buf);
                    let value = if signed {
                        sign_extend(raw, n)
                    } else {
                        raw as i64
                    };
                    FieldValue::Int {
                        signed,
                        width,
                        value,
                    }
                })
            }
            FieldConstructor::Float => read_fixed(dom, stream, coord, 4, |b| {
                let mut buf = [0u8; 4];
                buf.copy_from_slice(b);
                FieldValue::Float(f32::from_le_bytes(buf))
            }),
            FieldConstructor::Double => read_fixed(dom, stream, coord, 8, |b| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(b);
                FieldValue::Double(f64::from_le_bytes(buf))
            }),
            FieldConstructor::Str => match stream {
                Some(s) => {
                    let start = s.position();
                    let bytes = read_until_nul(s, coord)?;
                    let id = dom.insert_ephemeral(FieldValue::Str {
                        value: String::from_utf8_lossy(&bytes).into_owned(),
                        kind: StrKind::ZeroTerminated,
                    });
                    dom.set_range(id, start, bytes.len() as u64 + 1);
                    Ok(id)
                }
                None => Ok(dom.insert_ephemeral(FieldValue::Str {
                    value: String::new(),
                    kind: StrKind::ZeroTerminated,
                })),
            },
            FieldConstructor::Array { element, count } => match stream {
                Some(s) => {
                    let start = s.position();
                    let mut elements = Vec::with_capacity(*count);
                    for _ in 0..*count {
                        elements.push(element.instantiate(dom, Some(&mut *s), coord)?);
                    }
                    let array_id = dom.insert_ephemeral(FieldValue::Array {
                        elements,
                        element: element.clone(),
                    });
                    dom.set_range(array_id, start, s.position() - start);
                    Ok(array_id)
                }
                None => {
                    let mut elements = Vec::with_capacity(*count);
                    for _ in 0..*count {
                        elements.push(element.instantiate(dom, None, coord)?);
                    }
                    Ok(dom.insert_ephemeral(FieldValue::Array {
                        elements,
                        element: element.clone(),
                    }))
                }
            },
            FieldConstructor::WStr => match stream {
                Some(s) => {
                    let start = s.position();
                    let mut units = Vec::new();
                    loop {
                        if units.len() >= MAX_CSTRING_LEN {
                            return Err(InterpError::LimitExceeded(
                                coord.clone(),
                                "wide string exceeded the maximum scanned length".into(),
                            ));
                        }
                        let bytes = s
                            .read(2)
                            .map_err(|e| InterpError::StreamRead(coord.clone(), e.to_string()))?;
                        let unit = u16::from_le_bytes([bytes[0], bytes[1]]);
                        if unit == 0 {
                            break;
                        }
                        units.push(unit);
                    }
                    let value = String::from_utf16_lossy(&units);
                    let id = dom.insert_ephemeral(FieldValue::Str {
                        value,
                        kind: StrKind::ZeroTerminated,
                    });
                    dom.set_range(id, start, units.len() as u64 * 2 + 2);
                    Ok(id)
                }
                None => Ok(dom.insert_ephemeral(FieldValue::Str {
                    value: String::new(),
                    kind: StrKind::ZeroTerminated,
                })),
            },
        }
    }
}

fn read_fixed(
    dom: &mut Dom,
    stream: Option<&mut dyn ByteStream>,
    coord: &Coord,
    n: usize,
    build: impl FnOnce(&[u8]) -> FieldValue,
) -> InterpResult<FieldId> {
    match stream {
        Some(s) => {
            let start = s.position();
            let bytes = s
                .read(n)
                .map_err(|e| InterpError::StreamRead(coord.clone(), e.to_string()))?;
            let id = dom.insert_ephemeral(build(&bytes));
            dom.set_range(id, start, n as u64);
            Ok(id)
        }
        None => {
            let zeros = vec![0u8; n];
            Ok(dom.insert_ephemeral(build(&zeros)))
        }
    }
}

fn read_until_nul(stream: &mut dyn ByteStream, coord: &Coord) -> InterpResult<Vec<u8>> {
    let mut bytes = Vec::new();
    loop {
        if bytes.len() >= MAX_CSTRING_LEN {
            return Err(InterpError::LimitExceeded(
                coord.clone(),
                "zero-terminated string exceeded the maximum scanned length".into(),
            ));
        }
        let byte = stream
            .read(1)
            .map_err(|e| InterpError::StreamRead(coord.clone(), e.to_string()))?;
        if byte[0] == 0 {
            break;
        }
        bytes.push(byte[0]);
    }
    Ok(bytes)
}

fn sign_extend(raw: u64, nbytes: usize) -> i64 {
    match nbytes {
        1 => (raw as u8 as i8) as i64,
        2 => (raw as u16 as i16) as i64,
        4 => (raw as u32 as i32) as i64,
        _ => raw as i64,
    }
}
