//! Tree-walking evaluation.
//!
//! `eval` is total: semantic anomalies (unbound names, type mismatches,
//! division by zero, wrong arity, overflow) never raise, they yield
//! [`Value::Undefined`]. The only raised failures in the whole pipeline are
//! lex and parse errors, which abort before evaluation begins.

use std::rc::Rc;

use crate::ast::{BinOpKind, BinaryOp, Call, Constant, Expression, Fun, If, Let, Program};

use super::env::Environment;
use super::value::{Closure, Value};

impl Program {
    /// Evaluate the program body under a fresh, empty environment.
    pub fn run(&self) -> Value {
        self.body.eval(&Environment::new())
    }
}

impl Expression {
    pub fn eval(&self, env: &Environment) -> Value {
        match self {
            Expression::Const(c) => match c.value {
                Constant::Int(i) => Value::Int(i),
                Constant::Bool(b) => Value::Bool(b),
            },
            Expression::Variable(var) => env.lookup(&var.name).unwrap_or(Value::Undefined),
            Expression::BinaryOp(op) => op.eval(env),
            Expression::Let(le) => le.eval(env),
            Expression::If(cond) => cond.eval(env),
            Expression::Fun(fun) => Value::Closure(fun.capture(env)),
            Expression::Call(call) => call.eval(env),
        }
    }
}

impl BinaryOp {
    fn eval(&self, env: &Environment) -> Value {
        // Undefined short-circuits before the right operand is evaluated.
        let left = self.left.eval(env);
        if matches!(left, Value::Undefined) {
            return Value::Undefined;
        }
        let right = self.right.eval(env);
        if matches!(right, Value::Undefined) {
            return Value::Undefined;
        }
        apply_operator(self.op, left, right)
    }
}

fn apply_operator(op: BinOpKind, left: Value, right: Value) -> Value {
    use BinOpKind::*;

    match (op, left, right) {
        (Add, Value::Int(l), Value::Int(r)) => l.checked_add(r).map_or(Value::Undefined, Value::Int),
        (Sub, Value::Int(l), Value::Int(r)) => l.checked_sub(r).map_or(Value::Undefined, Value::Int),
        (Mul, Value::Int(l), Value::Int(r)) => l.checked_mul(r).map_or(Value::Undefined, Value::Int),
        (Div, Value::Int(l), Value::Int(r)) => floor_div(l, r),
        (Eq, Value::Int(l), Value::Int(r)) => Value::Bool(l == r),
        (Gt, Value::Int(l), Value::Int(r)) => Value::Bool(l > r),
        (Lt, Value::Int(l), Value::Int(r)) => Value::Bool(l < r),
        (Eq, Value::Bool(l), Value::Bool(r)) => Value::Bool(l == r),
        (Gt, Value::Bool(l), Value::Bool(r)) => Value::Bool(l & !r),
        (Lt, Value::Bool(l), Value::Bool(r)) => Value::Bool(!l & r),
        // Mixed operand types and closures have no defined operations.
        _ => Value::Undefined,
    }
}

/// Division rounds toward negative infinity, so `-7/2` is `-4`. The checked
/// ops cover division by zero and i64::MIN / -1 alike; when they succeed the
/// quotient only needs an adjustment if the remainder is nonzero and its sign
/// differs from the divisor's.
fn floor_div(l: i64, r: i64) -> Value {
    match (l.checked_div(r), l.checked_rem(r)) {
        (Some(q), Some(rem)) if rem != 0 && (rem < 0) != (r < 0) => Value::Int(q - 1),
        (Some(q), _) => Value::Int(q),
        _ => Value::Undefined,
    }
}

impl Let {
    fn eval(&self, env: &Environment) -> Value {
        // Each declaration sees the bindings made before it; the extension is
        // discarded when the block finishes.
        let inner = env.extend();
        for decl in &self.decls {
            let value = decl.value.eval(&inner);
            inner.bind(decl.name.name.clone(), value);
        }
        self.body.eval(&inner)
    }
}

impl If {
    fn eval(&self, env: &Environment) -> Value {
        match self.condition.eval(env) {
            Value::Bool(true) => self.then_branch.eval(env),
            Value::Bool(false) => match &self.else_branch {
                Some(else_branch) => else_branch.eval(env),
                None => Value::Undefined,
            },
            _ => Value::Undefined,
        }
    }
}

impl Fun {
    /// Produce this node's closure, capturing the current environment on the
    /// first evaluation only. The captured snapshot is shared, not copied:
    /// a `let` that binds this closure keeps extending the same snapshot, so
    /// the closure can resolve its own name and its siblings at call time.
    pub(crate) fn capture(&self, env: &Environment) -> Closure {
        self.captured
            .get_or_init(|| Closure {
                params: Rc::new(self.params.clone()),
                body: Rc::clone(&self.body),
                env: env.clone(),
            })
            .clone()
    }
}

impl Call {
    fn eval(&self, env: &Environment) -> Value {
        let Value::Closure(closure) = self.callee.eval(env) else {
            return Value::Undefined;
        };
        if self.args.len() != closure.params.len() {
            return Value::Undefined;
        }

        // Arguments are evaluated eagerly in the caller's environment, then
        // bound into a copy-extension of the closure's captured environment.
        let frame = closure.env.extend();
        for (param, arg) in closure.params.iter().zip(&self.args) {
            let value = arg.eval(env);
            frame.bind(param.name.clone(), value);
        }
        closure.body.eval(&frame)
    }
}
