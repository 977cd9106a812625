mod env;
mod eval;
mod value;

pub use env::Environment;
pub use value::{Closure, Value};

use crate::ast::Program;

/// Run a parsed program and return its result value.
pub fn run(program: &Program) -> Value {
    program.run()
}
