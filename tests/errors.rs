mod common;

use common::*;
use tpl_interp::ast::{Constant, FuncDecl, Node, ParamList, StructNode, TypeDecl};
use tpl_interp::coord::unknown;
use tpl_interp::error::InterpError;
use tpl_interp::interp::{Interpreter, Limits};
use tpl_interp::stream::SliceStream;

fn run(ast: Node) -> InterpError {
    let mut interp = Interpreter::new(Limits::default());
    let mut stream = SliceStream::new(vec![0u8; 16]);
    interp.run(&ast, &mut stream).unwrap_err()
}

#[test]
fn unresolved_identifier_carries_its_coordinate() {
    // local int x = y;  -- `y` was never declared.
    let ast = file(vec![local_decl("x", &["int"], Some(ident("y")))]);
    let err = run(ast);
    match err {
        InterpError::UnresolvedID(coord, name) => {
            assert_eq!(name, "y");
            assert_eq!(coord, unknown());
        }
        other => panic!("expected UnresolvedID, got {other:?}"),
    }
}

#[test]
fn unresolved_type_carries_the_unresolved_name() {
    // Nonexistent x;  -- not a builtin, not typedef'd.
    let ast = file(vec![field_decl("x", &["Nonexistent"])]);
    let err = run(ast);
    match err {
        InterpError::UnresolvedType(_, _, core) => assert_eq!(core, "Nonexistent"),
        other => panic!("expected UnresolvedType, got {other:?}"),
    }
}

#[test]
fn unsupported_binary_operator_is_rejected() {
    // local int x = 1 && 2;  -- `&&` (logical and) isn't in the supported set.
    let ast = file(vec![local_decl(
        "x",
        &["int"],
        Some(binary("&&", int_const(1), int_const(2))),
    )]);
    let err = run(ast);
    match err {
        InterpError::UnsupportedBinaryOperator(_, op) => assert_eq!(op, "&&"),
        other => panic!("expected UnsupportedBinaryOperator, got {other:?}"),
    }
}

#[test]
fn unsupported_unary_operator_is_rejected() {
    // local int x = -5;  -- unary minus isn't in the supported set (only p++/p--/~/!).
    let ast = file(vec![local_decl("x", &["int"], Some(unary("-", int_const(5))))]);
    let err = run(ast);
    match err {
        InterpError::UnsupportedUnaryOperator(_, op) => assert_eq!(op, "-"),
        other => panic!("expected UnsupportedUnaryOperator, got {other:?}"),
    }
}

#[test]
fn function_declared_to_return_an_inline_struct_is_rejected() {
    // struct { char a; } weird();  -- a return type that resolves to an
    // already-instantiated field, not a reusable constructor.
    let return_type = Node::TypeDecl(TypeDecl {
        declname: None,
        type_node: Box::new(Node::Struct(StructNode { decls: vec![], coord: unknown() })),
        coord: unknown(),
    });
    let signature = Node::FuncDecl(FuncDecl {
        args: Box::new(Node::ParamList(ParamList { params: vec![], coord: unknown() })),
        return_type: Box::new(return_type),
        coord: unknown(),
    });
    let ast = file(vec![decl("weird", &[], signature, None)]);
    let err = run(ast);
    match err {
        InterpError::UnresolvedType(_, what, _) => assert_eq!(what, "return type"),
        other => panic!("expected UnresolvedType, got {other:?}"),
    }
}

#[test]
fn unsupported_constant_type_is_rejected() {
    let bogus = Node::Constant(Constant {
        kind: "imaginary".to_owned(),
        value: "3i".to_owned(),
        coord: unknown(),
    });
    let ast = file(vec![local_decl("x", &["int"], Some(bogus))]);
    let err = run(ast);
    match err {
        InterpError::UnsupportedConstantType(_, kind) => assert_eq!(kind, "imaginary"),
        other => panic!("expected UnsupportedConstantType, got {other:?}"),
    }
}
