//! The AST evaluator (spec §4.C): a single recursive `evaluate` entry point
//! dispatching on node kind, threading `(scope, ctxt, stream)` through
//! every call exactly as the original interpreter does.

use crate::ast::*;
use crate::coord::Coord;
use crate::error::{InterpError, InterpResult};
use crate::field::{Dom, FieldConstructor, FieldId, FieldValue, Scalar};
use crate::function::{FunctionHandle, FunctionValue};
use crate::scope::{LocalValue, ScopeStack};
use crate::stream::ByteStream;
use crate::value::Value;
use crate::{builtin, types};

/// Soft, process-facing resource limits (SPEC_FULL.md §A.3). Neither bound
/// exists in the original Python implementation's closed error set; both
/// are a systems-language port's responsibility since Rust doesn't get a
/// host recursion limit or garbage collector for free.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_scope_depth: usize,
    pub max_array_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_scope_depth: 512,
            max_array_len: 16 * 1024 * 1024,
        }
    }
}

/// The result of evaluating a node that may contain a `return` (only
/// `Compound` and `Return` itself produce `Returned`; every other node kind
/// always produces `Completed`). Modeling non-local return this way, rather
/// than as a Rust panic or a dedicated `Err` variant, keeps the unwind
/// entirely inside `Result`'s happy path and guarantees it can never escape
/// `evaluate` unnoticed — see the Design Note on non-local return.
#[derive(Debug)]
pub enum Outcome {
    Completed(Value),
    Returned(Value),
}

pub struct Interpreter {
    dom: Dom,
    limits: Limits,
}

impl Interpreter {
    pub fn new(limits: Limits) -> Self {
        Self {
            dom: Dom::new(),
            limits,
        }
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    /// A fresh scope stack with every catalog builtin bound as a local
    /// function value.
    pub fn new_root_scope(&self) -> ScopeStack {
        let scope = ScopeStack::new();
        for native in builtin::catalog() {
            scope.add_local(native.name, LocalValue::Function(FunctionHandle::Native(*native)));
        }
        scope
    }

    /// Evaluates a whole template against `stream`, returning the root of
    /// the resulting DOM.
    pub fn run(&mut self, ast: &Node, stream: &mut dyn ByteStream) -> InterpResult<FieldId> {
        let mut scope = self.new_root_scope();
        match self.evaluate(ast, &mut scope, None, stream)? {
            Outcome::Completed(Value::Field(id)) => Ok(id),
            Outcome::Completed(_) => unreachable!("FileAST must evaluate to a field"),
            Outcome::Returned(_) => {
                unreachable!("a `return` escaped to the top level — programmer bug, see spec §7")
            }
        }
    }

    /// The single dispatch entry point. Only `Compound` and `Return`
    /// interact with non-local control flow; everything else always
    /// completes normally.
    pub fn evaluate(
        &mut self,
        node: &Node,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Outcome> {
        log::trace!("evaluate {} at {:?}", node.kind_name(), node.coord());
        match node {
            Node::Compound(n) => self.handle_compound(n, scope, ctxt, stream),
            Node::Return(n) => self.handle_return(n, scope, ctxt, stream),
            other => {
                let value = self.evaluate_value(other, scope, ctxt, stream)?;
                Ok(Outcome::Completed(value))
            }
        }
    }

    fn eval_expr(
        &mut self,
        node: &Node,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        self.evaluate_value(node, scope, ctxt, stream)
    }

    fn evaluate_value(
        &mut self,
        node: &Node,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        match node {
            Node::FileAst(n) => self.handle_file_ast(n, scope, stream),
            Node::Decl(n) => self.handle_decl(n, scope, ctxt, stream),
            Node::TypeDecl(n) => self.eval_expr(&n.type_node, scope, ctxt, stream),
            Node::Struct(n) => self.handle_struct(n, scope, stream),
            Node::IdentifierType(n) => {
                Ok(Value::Constructor(types::resolve(&n.names, scope, &n.coord)?))
            }
            Node::Typedef(n) => self.handle_typedef(n, scope),
            Node::Constant(n) => self.handle_constant(n),
            Node::BinaryOp(n) => self.handle_binary_op(n, scope, ctxt, stream),
            Node::UnaryOp(n) => self.handle_unary_op(n, scope, ctxt, stream),
            Node::Assignment(n) => self.handle_assignment(n, scope, ctxt, stream),
            Node::Id(n) => self.handle_id(n, scope),
            Node::FuncDef(n) => self.handle_func_def(n, scope, ctxt, stream),
            Node::FuncDecl(n) => self.handle_func_decl(n, scope, ctxt, stream),
            Node::FuncCall(n) => self.handle_func_call(n, scope, ctxt, stream),
            Node::ParamList(n) => self.handle_param_list(n, scope, ctxt, stream),
            Node::ExprList(n) => self.handle_expr_list(n, scope, ctxt, stream),
            Node::ArrayDecl(n) => self.handle_array_decl(n, scope, ctxt, stream),
            Node::Compound(_) | Node::Return(_) => {
                unreachable!("Compound/Return are handled directly by evaluate()")
            }
        }
    }

    fn checked_push(&self, scope: &ScopeStack, coord: &Coord) -> InterpResult<()> {
        if scope.depth() + 1 > self.limits.max_scope_depth {
            return Err(InterpError::LimitExceeded(
                coord.clone(),
                format!(
                    "scope depth would exceed the configured limit of {}",
                    self.limits.max_scope_depth
                ),
            ));
        }
        scope.push();
        Ok(())
    }

    fn handle_file_ast(
        &mut self,
        node: &FileAst,
        scope: &mut ScopeStack,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let root = self.dom.new_struct("");
        for child in &node.children {
            match self.evaluate(child, scope, Some(root), stream)? {
                Outcome::Completed(_) => {}
                Outcome::Returned(_) => unreachable!(
                    "a `return` escaped to the top level — programmer bug, see spec §7"
                ),
            }
        }
        Ok(Value::Field(root))
    }

    /// Struct bodies get their own scope frame, symmetrically pushed and
    /// popped. The original interpreter pushes here and never pops,
    /// relying on the surrounding evaluation to eventually unwind; the spec
    /// explicitly allows a symmetric push/pop as long as invariant 3
    /// (non-empty, depth-1-at-rest stack) holds, which this satisfies more
    /// robustly — declaring many structs (e.g. an array of structs) no
    /// longer leaks a frame per instance.
    fn handle_struct(
        &mut self,
        node: &StructNode,
        scope: &mut ScopeStack,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let struct_id = self.dom.insert_ephemeral(FieldValue::Struct { children: vec![] });
        self.checked_push(scope, &node.coord)?;
        let result = (|| {
            for decl in &node.decls {
                self.eval_expr(decl, scope, Some(struct_id), stream)?;
            }
            Ok(())
        })();
        scope.pop();
        result?;
        Ok(Value::Field(struct_id))
    }

    fn handle_compound(
        &mut self,
        node: &Compound,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Outcome> {
        self.checked_push(scope, &node.coord)?;
        let result = (|| {
            let mut last = Value::Void;
            for child in &node.children {
                match self.evaluate(child, scope, ctxt, stream)? {
                    Outcome::Completed(v) => last = v,
                    Outcome::Returned(v) => return Ok(Outcome::Returned(v)),
                }
            }
            Ok(Outcome::Completed(last))
        })();
        scope.pop();
        result
    }

    fn handle_return(
        &mut self,
        node: &ReturnStmt,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Outcome> {
        let value = match &node.expr {
            Some(e) => self.eval_expr(e, scope, ctxt, stream)?,
            None => Value::Void,
        };
        Ok(Outcome::Returned(value))
    }

    fn handle_typedef(&mut self, node: &Typedef, scope: &mut ScopeStack) -> InterpResult<Value> {
        let names = extract_identifier_names(&node.type_node, &node.coord)?;
        log::debug!("{:?}: typedef {} -> {:?}", node.coord, node.name, names);
        scope.add_type(node.name.clone(), names);
        Ok(Value::Void)
    }

    fn handle_constant(&mut self, node: &Constant) -> InterpResult<Value> {
        let value = match node.kind.as_str() {
            "int" | "long" => FieldValue::Int {
                signed: true,
                width: crate::field::IntWidth::Int,
                value: parse_int_literal(&node.value),
            },
            "float" => FieldValue::Float(node.value.parse().unwrap_or(0.0)),
            "double" => FieldValue::Double(node.value.parse().unwrap_or(0.0)),
            "char" => {
                let inner = node.value.trim_matches('\'');
                FieldValue::Char(inner.chars().next().map(|c| c as u8).unwrap_or(0))
            }
            "string" => FieldValue::Str {
                value: node.value.trim_matches('"').to_owned(),
                kind: crate::field::StrKind::ZeroTerminated,
            },
            other => {
                log::error!("{:?}: unsupported constant kind '{}'", node.coord, other);
                return Err(InterpError::UnsupportedConstantType(
                    node.coord.clone(),
                    other.to_owned(),
                ));
            }
        };
        Ok(Value::Field(self.dom.insert_ephemeral(value)))
    }

    fn handle_id(&mut self, node: &Id, scope: &ScopeStack) -> InterpResult<Value> {
        match scope.get_id(&node.name) {
            Some(LocalValue::Field(id)) => Ok(Value::Field(id)),
            Some(LocalValue::Function(f)) => Ok(Value::Function(f)),
            None => {
                log::error!("{:?}: unresolved identifier '{}'", node.coord, node.name);
                Err(InterpError::UnresolvedID(node.coord.clone(), node.name.clone()))
            }
        }
    }

    fn value_to_scalar(&self, value: &Value) -> Scalar {
        match value {
            Value::Field(id) => self.dom.value(*id).to_scalar(),
            // A well-formed AST never evaluates BinaryOp/UnaryOp/Assignment
            // operands to anything but a field; anything else is a
            // malformed-tree invariant violation, not a user-facing error.
            other => unreachable!("expected a scalar-bearing field, got {other:?}"),
        }
    }

    fn wrap_scalar(&mut self, scalar: Scalar) -> FieldId {
        let value = match scalar {
            Scalar::Int(v) => FieldValue::Int {
                signed: true,
                width: crate::field::IntWidth::Int,
                value: v,
            },
            Scalar::UInt(v) => FieldValue::Int {
                signed: false,
                width: crate::field::IntWidth::Int,
                value: v as i64,
            },
            Scalar::Float(v) => FieldValue::Float(v),
            Scalar::Double(v) => FieldValue::Double(v),
            Scalar::Char(v) => FieldValue::Char(v),
            Scalar::Str(s) => FieldValue::Str {
                value: s,
                kind: crate::field::StrKind::ZeroTerminated,
            },
        };
        self.dom.insert_ephemeral(value)
    }

    fn handle_binary_op(
        &mut self,
        node: &BinaryOp,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let lhs = self.eval_expr(&node.left, scope, ctxt, stream)?;
        let rhs = self.eval_expr(&node.right, scope, ctxt, stream)?;
        let lhs = self.value_to_scalar(&lhs);
        let rhs = self.value_to_scalar(&rhs);
        let result = apply_binary(&node.op, lhs, rhs, &node.coord)?;
        Ok(Value::Field(self.wrap_scalar(result)))
    }

    fn handle_unary_op(
        &mut self,
        node: &UnaryOp,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let operand = self.eval_expr(&node.expr, scope, ctxt, stream)?;
        let Value::Field(field_id) = operand else {
            unreachable!("unary operand did not evaluate to a field");
        };

        match node.op.as_str() {
            "p++" | "p--" => {
                let before = self.dom.value(field_id).to_scalar();
                let step = if node.op == "p++" { 1 } else { -1 };
                let after = apply_binary("+", before.clone(), Scalar::Int(step), &node.coord)?;
                self.dom.set_scalar(field_id, after);
                Ok(Value::Field(self.wrap_scalar(before)))
            }
            "~" => {
                let value = self.dom.value(field_id).to_scalar();
                let result = Scalar::Int(!value.as_i64());
                Ok(Value::Field(self.wrap_scalar(result)))
            }
            "!" => {
                let value = self.dom.value(field_id).to_scalar();
                Ok(Value::Field(self.wrap_scalar(Scalar::bool(!value.truthy()))))
            }
            other => {
                log::error!("{:?}: unsupported unary operator '{}'", node.coord, other);
                Err(InterpError::UnsupportedUnaryOperator(
                    node.coord.clone(),
                    other.to_owned(),
                ))
            }
        }
    }

    fn handle_assignment(
        &mut self,
        node: &Assignment,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let lvalue = self.eval_expr(&node.lvalue, scope, ctxt, stream)?;
        let Value::Field(field_id) = lvalue else {
            log::error!("{:?}: assignment target is not an addressable field", node.coord);
            return Err(InterpError::UnresolvedID(
                node.coord.clone(),
                "<non-addressable lvalue>".into(),
            ));
        };
        let rvalue = self.eval_expr(&node.rvalue, scope, ctxt, stream)?;
        let scalar = self.value_to_scalar(&rvalue);
        self.dom.set_scalar(field_id, scalar);
        Ok(Value::Field(field_id))
    }

    /// Evaluation order mirrors the original exactly: `local` takes
    /// priority over everything else (including a function-valued type
    /// expression, which the `local` branch can't actually do anything
    /// useful with), then a function value binds by name, then a
    /// parameter declaration collects its `(name, constructor)` pair,
    /// and only then does a plain declaration parse from the stream
    /// (SPEC_FULL.md §B.1).
    fn handle_decl(
        &mut self,
        node: &Decl,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let type_value = self.eval_expr(&node.type_node, scope, ctxt, stream)?;
        let is_local = node.is_local();
        let is_func_param = node.is_func_param.get();

        match type_value {
            other if is_local => {
                let field_id = match other {
                    Value::Constructor(ctor) => self.instantiate(&ctor, None, &node.coord)?,
                    Value::Field(id) => id,
                    _ => {
                        log::error!(
                            "{:?}: 'local' declaration '{}' did not resolve to a type",
                            node.coord,
                            node.name
                        );
                        return Err(InterpError::UnresolvedType(
                            node.coord.clone(),
                            node.name.clone(),
                            String::new(),
                        ));
                    }
                };
                self.dom.rename(field_id, node.name.clone());
                scope.add_local(node.name.clone(), LocalValue::Field(field_id));
                if let Some(init) = &node.init {
                    let init_value = self.eval_expr(init, scope, ctxt, stream)?;
                    let scalar = self.value_to_scalar(&init_value);
                    self.dom.set_scalar(field_id, scalar);
                }
                Ok(Value::Field(field_id))
            }
            Value::Function(FunctionHandle::User(func)) => {
                func.set_name(node.name.clone());
                log::debug!("{:?}: bound function '{}'", node.coord, node.name);
                scope.add_local(
                    node.name.clone(),
                    LocalValue::Function(FunctionHandle::User(func.clone())),
                );
                Ok(Value::Function(FunctionHandle::User(func)))
            }
            Value::Constructor(ctor) if is_func_param => {
                Ok(Value::FuncParam(node.name.clone(), ctor))
            }
            _other if is_func_param => Err(InterpError::UnresolvedType(
                node.coord.clone(),
                node.name.clone(),
                String::new(),
            )),
            other => {
                let field_id = match other {
                    Value::Field(id) => id,
                    Value::Constructor(ctor) => {
                        self.instantiate(&ctor, Some(stream), &node.coord)?
                    }
                    _ => {
                        log::error!(
                            "{:?}: declaration '{}' did not resolve to a field",
                            node.coord,
                            node.name
                        );
                        return Err(InterpError::UnresolvedID(
                            node.coord.clone(),
                            node.name.clone(),
                        ));
                    }
                };
                self.dom.rename(field_id, node.name.clone());
                scope.add_var(node.name.clone(), field_id);
                if let Some(ctxt) = ctxt {
                    self.dom.add_child(ctxt, node.name.clone(), field_id);
                }
                Ok(Value::Field(field_id))
            }
        }
    }

    fn instantiate(
        &mut self,
        ctor: &FieldConstructor,
        stream: Option<&mut dyn ByteStream>,
        coord: &Coord,
    ) -> InterpResult<FieldId> {
        ctor.instantiate(&mut self.dom, stream, coord)
    }

    /// Produces an unbound array *constructor*, never an instantiated
    /// field — mirroring `handle_struct`'s refusal to do its own scope/ctxt
    /// binding. Whether this array ends up touching the stream at all is
    /// the enclosing `Decl`'s call, exactly as for a scalar type: the
    /// `local`/var binding and the `instantiate(..., None | Some(stream))`
    /// choice all happen once, uniformly, in `handle_decl`.
    fn handle_array_decl(
        &mut self,
        node: &ArrayDecl,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let dim_value = self.eval_expr(&node.dim, scope, ctxt, stream)?;
        let n = self.value_to_scalar(&dim_value).as_usize();

        if n > self.limits.max_array_len {
            log::error!("{:?}: array length {} exceeds the configured limit", node.coord, n);
            return Err(InterpError::LimitExceeded(
                node.coord.clone(),
                format!(
                    "array length {n} exceeds the configured limit of {}",
                    self.limits.max_array_len
                ),
            ));
        }

        let elem_value = self.eval_expr(&node.type_node, scope, ctxt, stream)?;
        let element = match elem_value {
            Value::Constructor(c) => c,
            _ => {
                return Err(InterpError::UnresolvedType(
                    node.coord.clone(),
                    "array element type".into(),
                    String::new(),
                ))
            }
        };

        Ok(Value::Constructor(FieldConstructor::Array {
            element: Box::new(element),
            count: n,
        }))
    }

    fn handle_func_decl(
        &mut self,
        node: &FuncDecl,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        if let Node::ParamList(pl) = node.args.as_ref() {
            for param in &pl.params {
                if let Node::Decl(d) = param {
                    d.is_func_param.set(true);
                }
            }
        }

        let params = match self.eval_expr(&node.args, scope, ctxt, stream)? {
            Value::ParamList(p) => p,
            _ => unreachable!("ParamList node must evaluate to Value::ParamList"),
        };

        let return_ctor = match self.eval_expr(&node.return_type, scope, ctxt, stream)? {
            Value::Constructor(c) => c,
            _ => {
                return Err(InterpError::UnresolvedType(
                    node.coord.clone(),
                    "return type".into(),
                    String::new(),
                ))
            }
        };

        Ok(Value::Function(FunctionValue::new(
            return_ctor,
            params,
            scope.clone(),
        )))
    }

    fn handle_func_def(
        &mut self,
        node: &FuncDef,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let decl_value = self.eval_expr(&node.decl, scope, ctxt, stream)?;
        let Value::Function(FunctionHandle::User(func)) = decl_value else {
            return Err(InterpError::UnresolvedID(
                node.coord.clone(),
                "function definition did not bind a function value".into(),
            ));
        };
        func.set_body((*node.body).clone());
        Ok(Value::Function(FunctionHandle::User(func)))
    }

    fn handle_param_list(
        &mut self,
        node: &ParamList,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let mut params = Vec::with_capacity(node.params.len());
        for p in &node.params {
            match self.eval_expr(p, scope, ctxt, stream)? {
                Value::FuncParam(name, ctor) => params.push((name, ctor)),
                _ => {
                    return Err(InterpError::UnresolvedType(
                        node.coord.clone(),
                        "parameter".into(),
                        String::new(),
                    ))
                }
            }
        }
        Ok(Value::ParamList(params))
    }

    fn handle_expr_list(
        &mut self,
        node: &ExprList,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let mut exprs = Vec::with_capacity(node.exprs.len());
        for e in &node.exprs {
            exprs.push(self.eval_expr(e, scope, ctxt, stream)?);
        }
        Ok(Value::Exprs(exprs))
    }

    fn handle_func_call(
        &mut self,
        node: &FuncCall,
        scope: &mut ScopeStack,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
    ) -> InterpResult<Value> {
        let args = match self.eval_expr(&node.args, scope, ctxt, stream)? {
            Value::Exprs(v) => v,
            other => vec![other],
        };
        let callee = self.eval_expr(&node.name, scope, ctxt, stream)?;
        let Value::Function(handle) = callee else {
            log::error!("{:?}: call target did not resolve to a function", node.coord);
            return Err(InterpError::UnresolvedID(
                node.coord.clone(),
                "<callee>".into(),
            ));
        };
        log::debug!("{:?}: calling '{}' with {} arg(s)", node.coord, handle.name(), args.len());
        self.call_function(&handle, args, ctxt, scope, stream, &node.coord)
    }

    pub fn call_function(
        &mut self,
        handle: &FunctionHandle,
        args: Vec<Value>,
        ctxt: Option<FieldId>,
        scope: &mut ScopeStack,
        stream: &mut dyn ByteStream,
        coord: &Coord,
    ) -> InterpResult<Value> {
        match handle {
            FunctionHandle::User(func) => self.call_user_function(func, args, ctxt, stream, coord),
            FunctionHandle::Native(native) => {
                (native.callable)(&args, ctxt, scope, stream, self, coord)
            }
        }
    }

    fn call_user_function(
        &mut self,
        func: &FunctionValue,
        args: Vec<Value>,
        ctxt: Option<FieldId>,
        stream: &mut dyn ByteStream,
        coord: &Coord,
    ) -> InterpResult<Value> {
        let mut call_scope = func.captured_scope();
        self.checked_push(&call_scope, coord)?;

        let bind_result = (|| {
            for ((name, ctor), arg) in func.params().into_iter().zip(args) {
                let scalar = self.value_to_scalar(&arg);
                let field_id = self.instantiate(&ctor, None, coord)?;
                self.dom.set_scalar(field_id, scalar);
                self.dom.rename(field_id, name.clone());
                call_scope.add_local(name, LocalValue::Field(field_id));
            }
            Ok(())
        })();

        let outcome = bind_result.and_then(|()| self.evaluate(&func.body(), &mut call_scope, ctxt, stream));
        call_scope.pop();

        match outcome? {
            Outcome::Returned(v) => Ok(v),
            Outcome::Completed(_) => Ok(Value::Field(self.wrap_scalar(Scalar::Int(0)))),
        }
    }
}

fn extract_identifier_names(node: &Node, coord: &Coord) -> InterpResult<Vec<String>> {
    match node {
        Node::TypeDecl(td) => extract_identifier_names(&td.type_node, coord),
        Node::IdentifierType(it) => Ok(it.names.clone()),
        other => {
            log::error!("{:?}: unsupported AST node kind '{}' inside typedef", coord, other.kind_name());
            Err(InterpError::UnsupportedASTNode(
                coord.clone(),
                other.kind_name().to_owned(),
            ))
        }
    }
}

fn parse_int_literal(text: &str) -> i64 {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).unwrap_or(0)
    } else {
        text.parse().unwrap_or(0)
    }
}

/// Applies a binary operator to two scalars (spec §4.C). Comparisons
/// produce `Scalar::Int(0|1)` since the data model has no boolean family.
/// Division and modulo by zero default to `0` rather than raising — not
/// part of the original's closed error set, and crashing an embedding
/// host over a malformed template expression is worse than a defined
/// zero result (see DESIGN.md's Open Question resolution).
pub fn apply_binary(op: &str, lhs: Scalar, rhs: Scalar, coord: &Coord) -> InterpResult<Scalar> {
    if let (Scalar::Str(a), Scalar::Str(b)) = (&lhs, &rhs) {
        return match op {
            "+" => Ok(Scalar::Str(format!("{a}{b}"))),
            "==" => Ok(Scalar::bool(a == b)),
            "!=" => Ok(Scalar::bool(a != b)),
            ">" => Ok(Scalar::bool(a > b)),
            "<" => Ok(Scalar::bool(a < b)),
            ">=" => Ok(Scalar::bool(a >= b)),
            "<=" => Ok(Scalar::bool(a <= b)),
            _ => Err(InterpError::UnsupportedBinaryOperator(coord.clone(), op.to_owned())),
        };
    }

    if lhs.is_float() || rhs.is_float() {
        let a = lhs.as_f64();
        let b = rhs.as_f64();
        return match op {
            "+" => Ok(Scalar::Double(a + b)),
            "-" => Ok(Scalar::Double(a - b)),
            "*" => Ok(Scalar::Double(a * b)),
            "/" => Ok(Scalar::Double(a / b)),
            ">" => Ok(Scalar::bool(a > b)),
            "<" => Ok(Scalar::bool(a < b)),
            ">=" => Ok(Scalar::bool(a >= b)),
            "<=" => Ok(Scalar::bool(a <= b)),
            "==" => Ok(Scalar::bool(a == b)),
            "!=" => Ok(Scalar::bool(a != b)),
            _ => Err(InterpError::UnsupportedBinaryOperator(coord.clone(), op.to_owned())),
        };
    }

    let a = lhs.as_i64() as i128;
    let b = rhs.as_i64() as i128;
    let unsigned = lhs.is_unsigned() || rhs.is_unsigned();

    let result = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => {
            if b == 0 {
                log::warn!("{:?}: integer division by zero, defaulting to 0", coord);
                0
            } else {
                a / b
            }
        }
        "%" => {
            if b == 0 {
                log::warn!("{:?}: integer modulo by zero, defaulting to 0", coord);
                0
            } else {
                a % b
            }
        }
        "|" => a | b,
        "^" => a ^ b,
        "&" => a & b,
        ">" => return Ok(Scalar::bool(a > b)),
        "<" => return Ok(Scalar::bool(a < b)),
        ">=" => return Ok(Scalar::bool(a >= b)),
        "<=" => return Ok(Scalar::bool(a <= b)),
        "==" => return Ok(Scalar::bool(a == b)),
        "!=" => return Ok(Scalar::bool(a != b)),
        _ => {
            log::error!("{:?}: unsupported binary operator '{}'", coord, op);
            return Err(InterpError::UnsupportedBinaryOperator(coord.clone(), op.to_owned()));
        }
    };

    if unsigned {
        Ok(Scalar::UInt(result as u64))
    } else {
        Ok(Scalar::Int(result as i64))
    }
}
