use std::fmt;
use std::rc::Rc;

use crate::ast::{Expression, Variable};

use super::env::Environment;

/// Runtime value representation.
///
/// `Undefined` is a value, not an error: unbound names, type mismatches,
/// division by zero and arity mismatches all produce it, and every operation
/// consuming it produces it again.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Closure(Closure),
    Undefined,
}

/// A function value: parameter list, body, and the environment captured when
/// the `fun` node was first evaluated.
#[derive(Clone)]
pub struct Closure {
    pub params: Rc<Vec<Variable>>,
    pub body: Rc<Expression>,
    pub env: Environment,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Closures are equal only if they came from the same `fun` node.
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(&a.body, &b.body),
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();
        write!(f, "Closure({})", params.join(", "))
    }
}
