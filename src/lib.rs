//! # proglet — a tiny expression language
//!
//! proglet is a small expression-oriented language with integers, booleans,
//! sequential `let` bindings, first-class functions with lexical closures,
//! and a deliberately precedence-free operator grammar.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream          (lexer, via lachs)
//!     ↓
//! [Parser] → AST (ast::Program)   (parser, combinator-based)
//!     ↓
//! [Evaluator] → interpreter::Value
//! ```
//!
//! ## Key design decisions
//!
//! - **One flat operator level**: `expr := atom (operator atom)*` folds
//!   left-to-right, so `1+2*3` is `(1+2)*3`. Arithmetic and comparison
//!   operators share the single level; this is part of the language, not a
//!   parsing accident.
//! - **Undefined as a value**: evaluation is total. Unbound variables, type
//!   mismatches, division by zero and arity mismatches all produce
//!   `Value::Undefined`, which infects every computation that consumes it.
//!   Only lexing and parsing can fail.
//! - **Capture-once closures**: a `fun` node captures its environment the
//!   first time it is evaluated and hands out the same closure afterwards.
//!   Because the captured snapshot is the one a `let` block keeps extending,
//!   functions can call themselves and their sibling declarations.
//!
//! ## Example program
//!
//! ```text
//! prog
//!     let fac=fun a => if a>0 then a*call fac(a-1) else 1 fi end
//!     in call fac(4)
//! end
//! ```
//!
//! evaluates to `24`.
//!
//! ## Getting started
//!
//! Use [`parse_source`] to obtain an [`ast::Program`] and
//! [`interpreter::run`] to evaluate it, or [`evaluate`] to do both.

pub mod ast;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;

use ast::Program;
use interpreter::Value;
use lexer::Token;
use parser::ParseState;

/// Lex and parse a source string into a program.
pub fn parse_source(source: &str) -> anyhow::Result<Program> {
    let tokens = Token::lex(source)?;
    let mut state = ParseState::new(tokens);
    Ok(parser::parse(&mut state)?)
}

/// Lex, parse and evaluate a source string under an empty environment.
pub fn evaluate(source: &str) -> anyhow::Result<Value> {
    Ok(parse_source(source)?.run())
}
