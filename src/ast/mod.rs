//! Abstract syntax tree for proglet programs.
//!
//! Nodes are pure data: parsing builds them, evaluation only reads them. The
//! single exception is [`Fun`], which caches the closure produced by its first
//! evaluation (see `interpreter::eval`).

use std::cell::OnceCell;
use std::rc::Rc;

use lachs::Span;

use crate::interpreter::Closure;

/// A complete program: the expression behind the `prog` keyword.
#[derive(Debug, Clone)]
pub struct Program {
    pub body: Expression,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub enum Expression {
    Const(Const),
    Variable(Variable),
    BinaryOp(BinaryOp),
    Let(Let),
    If(If),
    Fun(Fun),
    Call(Call),
}

impl Expression {
    pub fn pos(&self) -> Span {
        match self {
            Expression::Const(c) => c.position.clone(),
            Expression::Variable(v) => v.position.clone(),
            Expression::BinaryOp(b) => b.position.clone(),
            Expression::Let(l) => l.position.clone(),
            Expression::If(i) => i.position.clone(),
            Expression::Fun(f) => f.position.clone(),
            Expression::Call(c) => c.position.clone(),
        }
    }
}

/// Literal constants: integers and booleans share one node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Int(i64),
    Bool(bool),
}

#[derive(Debug, Clone)]
pub struct Const {
    pub value: Constant,
    pub position: Span,
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub position: Span,
}

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Gt,
    Lt,
}

#[derive(Debug, Clone)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub position: Span,
}

/// One `name = expr` entry inside a `let` block.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: Variable,
    pub value: Expression,
}

/// `let decl (";" decl)* in body end` — declarations bind sequentially.
#[derive(Debug, Clone)]
pub struct Let {
    pub decls: Vec<Declaration>,
    pub body: Box<Expression>,
    pub position: Span,
}

/// `if cond then expr (else expr)? fi` — the else branch is optional.
#[derive(Debug, Clone)]
pub struct If {
    pub condition: Box<Expression>,
    pub then_branch: Box<Expression>,
    pub else_branch: Option<Box<Expression>>,
    pub position: Span,
}

/// `fun a, b => body end`. Evaluating the node for the first time captures the
/// environment in effect at that moment; later evaluations return the cached
/// closure unchanged.
#[derive(Debug, Clone)]
pub struct Fun {
    pub params: Vec<Variable>,
    pub body: Rc<Expression>,
    pub position: Span,
    pub(crate) captured: OnceCell<Closure>,
}

impl Fun {
    pub fn new(params: Vec<Variable>, body: Expression, position: Span) -> Self {
        Self {
            params,
            body: Rc::new(body),
            position,
            captured: OnceCell::new(),
        }
    }
}

/// `call f(args…)` — the callee is either a variable or an inline `fun`.
#[derive(Debug, Clone)]
pub struct Call {
    pub callee: Box<Expression>,
    pub args: Vec<Expression>,
    pub position: Span,
}
