use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::value::Value;

/// A snapshot mapping variable names to values.
///
/// Cloning an `Environment` shares the snapshot; [`Environment::extend`]
/// copies it into a fresh one. A `let` block or a call frame works on its own
/// extension, so enclosing scopes never observe its bindings — while a closure
/// that cloned the snapshot during a declaration still sees bindings added to
/// it later in the same block. That sharing is what lets
/// `let fac=fun a => … call fac(a-1) … end in call fac(4) end` recurse.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: Rc<RefCell<HashMap<String, Value>>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a name in this snapshot.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.borrow().get(name).cloned()
    }

    /// Add a binding to this snapshot, overriding any previous one.
    pub fn bind(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Copy this snapshot into a fresh one. Bindings added to the extension
    /// are invisible to holders of the original.
    pub fn extend(&self) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(self.bindings.borrow().clone())),
        }
    }
}

// Recursive closures alias their defining environment, so dumping values here
// would never terminate. Binding names are enough for diagnostics.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.borrow();
        let mut names: Vec<&str> = bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_tuple("Environment").field(&names).finish()
    }
}
