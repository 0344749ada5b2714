//! Small hand-built-AST helpers shared by the scenario tests. There is no
//! parser in this crate, so every test builds its tree directly; these
//! helpers just keep that construction from being repeated verbatim in every
//! file.

#![allow(dead_code)]

use std::cell::Cell;

use tpl_interp::ast::*;
use tpl_interp::coord::unknown;

pub fn id_type(names: &[&str]) -> Node {
    Node::IdentifierType(IdentifierType {
        names: names.iter().map(|s| s.to_string()).collect(),
        coord: unknown(),
    })
}

pub fn type_decl(declname: Option<&str>, inner: Node) -> Node {
    Node::TypeDecl(TypeDecl {
        declname: declname.map(str::to_owned),
        type_node: Box::new(inner),
        coord: unknown(),
    })
}

pub fn decl(name: &str, quals: &[&str], type_node: Node, init: Option<Node>) -> Node {
    Node::Decl(Decl {
        name: name.to_owned(),
        quals: quals.iter().map(|s| s.to_string()).collect(),
        type_node: Box::new(type_node),
        init: init.map(Box::new),
        is_func_param: Cell::new(false),
        coord: unknown(),
    })
}

/// A plain `<type-names> <name>;` field, parsed from the stream.
pub fn field_decl(name: &str, type_names: &[&str]) -> Node {
    decl(
        name,
        &[],
        type_decl(Some(name), id_type(type_names)),
        None,
    )
}

/// `local <type-names> <name> = <init>;`
pub fn local_decl(name: &str, type_names: &[&str], init: Option<Node>) -> Node {
    decl(
        name,
        &["local"],
        type_decl(Some(name), id_type(type_names)),
        init,
    )
}

pub fn typedef(name: &str, type_names: &[&str]) -> Node {
    Node::Typedef(Typedef {
        name: name.to_owned(),
        type_node: Box::new(type_decl(None, id_type(type_names))),
        coord: unknown(),
    })
}

pub fn int_const(n: i64) -> Node {
    Node::Constant(Constant {
        kind: "int".to_owned(),
        value: n.to_string(),
        coord: unknown(),
    })
}

pub fn ident(name: &str) -> Node {
    Node::Id(Id {
        name: name.to_owned(),
        coord: unknown(),
    })
}

pub fn binary(op: &str, left: Node, right: Node) -> Node {
    Node::BinaryOp(BinaryOp {
        op: op.to_owned(),
        left: Box::new(left),
        right: Box::new(right),
        coord: unknown(),
    })
}

pub fn unary(op: &str, expr: Node) -> Node {
    Node::UnaryOp(UnaryOp {
        op: op.to_owned(),
        expr: Box::new(expr),
        coord: unknown(),
    })
}

pub fn assign(lvalue: Node, rvalue: Node) -> Node {
    Node::Assignment(Assignment {
        lvalue: Box::new(lvalue),
        rvalue: Box::new(rvalue),
        coord: unknown(),
    })
}

pub fn struct_decl(name: &str, members: Vec<Node>) -> Node {
    decl(
        name,
        &[],
        type_decl(Some(name), Node::Struct(StructNode { decls: members, coord: unknown() })),
        None,
    )
}

/// The bare `<elem-type-names>[<dim>]` type expression, as it sits in the
/// `type` position of the enclosing `Decl` — never a declaration by itself.
fn array_type(elem_type_names: &[&str], dim: Node) -> Node {
    Node::ArrayDecl(ArrayDecl {
        dim: Box::new(dim),
        type_node: Box::new(type_decl(None, id_type(elem_type_names))),
        dim_quals: vec![],
        coord: unknown(),
    })
}

/// `<elem-type-names> <name>[<dim>];`, parsed from the stream.
pub fn array_field_decl(name: &str, elem_type_names: &[&str], dim: Node) -> Node {
    decl(name, &[], type_decl(Some(name), array_type(elem_type_names, dim)), None)
}

/// `local <elem-type-names> <name>[<dim>];`
pub fn local_array_decl(name: &str, elem_type_names: &[&str], dim: Node) -> Node {
    decl(
        name,
        &["local"],
        type_decl(Some(name), array_type(elem_type_names, dim)),
        None,
    )
}

pub fn compound(children: Vec<Node>) -> Node {
    Node::Compound(Compound { children, coord: unknown() })
}

pub fn return_stmt(expr: Option<Node>) -> Node {
    Node::Return(ReturnStmt { expr: expr.map(Box::new), coord: unknown() })
}

/// A function parameter: `<type-names> <name>`, marked so `handle_func_decl`
/// treats it as a parameter rather than a field to parse.
pub fn param(name: &str, type_names: &[&str]) -> Node {
    decl(name, &[], type_decl(Some(name), id_type(type_names)), None)
}

pub fn param_list(params: Vec<Node>) -> Node {
    Node::ParamList(ParamList { params, coord: unknown() })
}

pub fn func_decl(params: Vec<Node>, return_type_names: &[&str]) -> Node {
    Node::FuncDecl(FuncDecl {
        args: Box::new(param_list(params)),
        return_type: Box::new(type_decl(None, id_type(return_type_names))),
        coord: unknown(),
    })
}

/// `<return-type> <name>(<params>) { <body> }`: a `FuncDef` wrapping a
/// `Decl(name, FuncDecl(params, return-type))` signature, mirroring how a
/// parser would shape `<ret> name(params) { body }` — the `Decl` is what
/// binds the function value into scope, `FuncDef` attaches its body.
pub fn func_def(name: &str, params: Vec<Node>, return_type_names: &[&str], body: Vec<Node>) -> Node {
    Node::FuncDef(FuncDef {
        decl: Box::new(decl(name, &[], func_decl(params, return_type_names), None)),
        body: Box::new(compound(body)),
        coord: unknown(),
    })
}

pub fn expr_list(exprs: Vec<Node>) -> Node {
    Node::ExprList(ExprList { exprs, coord: unknown() })
}

pub fn call(name: &str, args: Vec<Node>) -> Node {
    Node::FuncCall(FuncCall {
        name: Box::new(ident(name)),
        args: Box::new(expr_list(args)),
        coord: unknown(),
    })
}

pub fn file(children: Vec<Node>) -> Node {
    Node::FileAst(FileAst { children, coord: unknown() })
}
