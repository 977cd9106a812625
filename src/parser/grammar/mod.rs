//! Grammar for the proglet language
//!
//! ```text
//! prog  := "prog" expr
//! expr  := atom (operator atom)*
//! atom  := let | if | fun | call | true | false | number | variable
//! let   := "let" decl (";" decl)* "in" expr "end"
//! decl  := ident "=" expr
//! if    := "if" expr "then" expr ("else" expr)? "fi"
//! fun   := "fun" ident ("," ident)* "=>" expr "end"
//! call  := "call" (fun | variable) "(" expr ("," expr)* ")"
//! operator := "+" | "-" | "*" | "/" | "=" | "<" | ">"
//! ```
//!
//! Rule actions build AST nodes directly; nothing semantic (unbound names,
//! arities) is checked at parse time.

mod expression;
mod literal;

pub use expression::expression;

use crate::ast::Program;

use super::combinators::{BoxedParser, expect_prog};
use super::state::{ParseError, ParseState, Parser};

/// prog := "prog" expr
pub fn program() -> BoxedParser<Program> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_prog().parse(state)?.pos();
        let body = expression().parse(state)?;
        let position = start.merge(&body.pos());
        Ok(Program { body, position })
    })
}

/// Parse a complete token stream into a program.
///
/// Fails if the stream does not match the grammar or is not fully consumed,
/// reporting the error that got furthest into the stream.
pub fn parse(state: &mut ParseState) -> Result<Program, ParseError> {
    let program = match program().parse(state) {
        Ok(program) => program,
        Err(err) => {
            return Err(state.furthest_error().cloned().unwrap_or(err));
        }
    };

    if state.has_next() {
        let err = match state.furthest_error() {
            Some(furthest) => furthest.clone(),
            None => state.error_here("unexpected trailing input"),
        };
        return Err(err);
    }

    Ok(program)
}
