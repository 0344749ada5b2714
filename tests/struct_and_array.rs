mod common;

use common::*;
use tpl_interp::field::FieldValue;
use tpl_interp::interp::{Interpreter, Limits};
use tpl_interp::stream::SliceStream;

#[test]
fn struct_fields_appear_as_dom_children_in_declared_order() {
    // struct { char a; int b; } s;
    let ast = file(vec![struct_decl(
        "s",
        vec![field_decl("a", &["char"]), field_decl("b", &["int"])],
    )]);
    let mut interp = Interpreter::new(Limits::default());
    let mut stream = SliceStream::new(vec![b'Z', 0x01, 0x00, 0x00, 0x00]);
    let root = interp.run(&ast, &mut stream).unwrap();

    let FieldValue::Struct { children } = interp.dom().value(root) else {
        panic!("root must be a struct");
    };
    assert_eq!(children.len(), 1);
    let (_, s_id) = &children[0];
    let FieldValue::Struct { children: s_children } = interp.dom().value(*s_id) else {
        panic!("s must be a struct");
    };
    assert_eq!(s_children.len(), 2);
    assert_eq!(s_children[0].0, "a");
    assert_eq!(s_children[1].0, "b");

    match interp.dom().value(s_children[0].1) {
        FieldValue::Char(c) => assert_eq!(*c, b'Z'),
        other => panic!("unexpected {other:?}"),
    }
    match interp.dom().value(s_children[1].1) {
        FieldValue::Int { value, .. } => assert_eq!(*value, 1),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn array_length_driven_by_a_local_variable() {
    // local int n = 3; char bytes[n];
    let ast = file(vec![
        local_decl("n", &["int"], Some(int_const(3))),
        array_field_decl("bytes", &["char"], ident("n")),
    ]);
    let mut interp = Interpreter::new(Limits::default());
    let mut stream = SliceStream::new(vec![1, 2, 3, 99]);
    let root = interp.run(&ast, &mut stream).unwrap();

    let FieldValue::Struct { children } = interp.dom().value(root) else {
        panic!("root must be a struct");
    };
    assert_eq!(children.len(), 1);
    let (name, arr_id) = &children[0];
    assert_eq!(name, "bytes");
    let FieldValue::Array { elements, .. } = interp.dom().value(*arr_id) else {
        panic!("bytes must be an array");
    };
    assert_eq!(elements.len(), 3);
    assert_eq!(stream.position(), 3);
    match interp.dom().value(elements[2]) {
        FieldValue::Char(c) => assert_eq!(*c, 3),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn array_length_exceeding_the_limit_is_rejected() {
    let ast = file(vec![array_field_decl("bytes", &["char"], int_const(100))]);
    let mut interp = Interpreter::new(Limits {
        max_array_len: 10,
        ..Limits::default()
    });
    let mut stream = SliceStream::new(vec![0u8; 200]);
    let err = interp.run(&ast, &mut stream).unwrap_err();
    assert!(matches!(err, tpl_interp::error::InterpError::LimitExceeded(..)));
}

#[test]
fn local_array_does_not_touch_the_stream() {
    // local char scratch[4];
    let ast = file(vec![local_array_decl("scratch", &["char"], int_const(4))]);
    let mut interp = Interpreter::new(Limits::default());
    let mut stream = SliceStream::new(vec![]);
    let root = interp.run(&ast, &mut stream).unwrap();
    // local arrays are not DOM children.
    let FieldValue::Struct { children } = interp.dom().value(root) else {
        panic!("root must be a struct");
    };
    assert!(children.is_empty());
    assert_eq!(stream.position(), 0);
}
