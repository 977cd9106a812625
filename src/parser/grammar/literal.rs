//! Leaf parsers: identifiers, numbers, booleans

use crate::ast::{Const, Constant, Variable};
use crate::lexer::Token;
use crate::parser::combinators::BoxedParser;
use crate::parser::state::{ParseError, ParseState};

/// Parse an identifier into a [`Variable`] node
pub fn ident() -> BoxedParser<Variable> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(_)) => {
            if let Some(Token::Ident(id)) = state.advance() {
                Ok(Variable {
                    name: id.value,
                    position: id.position,
                })
            } else {
                unreachable!()
            }
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("identifier")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("identifier");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a number literal. The lexer only admits `0|[1-9][0-9]*`, but a
/// literal can still exceed i64; that is a parse error, not a panic.
pub fn number() -> BoxedParser<Const> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Number(_)) => {
            if let Some(Token::Number(num)) = state.advance() {
                match num.value.parse::<i64>() {
                    Ok(value) => Ok(Const {
                        value: Constant::Int(value),
                        position: num.position,
                    }),
                    Err(_) => {
                        let err = ParseError::new("number literal out of range")
                            .found(format!("number '{}'", num.value))
                            .at(num.position);
                        state.record_error(err.clone());
                        Err(err)
                    }
                }
            } else {
                unreachable!()
            }
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("number")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("number");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// Parse a boolean literal
pub fn boolean() -> BoxedParser<Const> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::True(_)) => {
            if let Some(Token::True(t)) = state.advance() {
                Ok(Const {
                    value: Constant::Bool(true),
                    position: t.position,
                })
            } else {
                unreachable!()
            }
        }
        Some(Token::False(_)) => {
            if let Some(Token::False(f)) = state.advance() {
                Ok(Const {
                    value: Constant::Bool(false),
                    position: f.position,
                })
            } else {
                unreachable!()
            }
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("boolean")
                .found(tok.describe())
                .at(tok.pos());
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("boolean");
            state.record_error(err.clone());
            Err(err)
        }
    })
}
