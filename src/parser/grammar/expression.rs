//! Expression rules for the proglet grammar

use crate::ast::{BinOpKind, BinaryOp, Call, Declaration, Expression, Fun, If, Let};

use crate::parser::combinators::{
    BoxedParser, expect_arrow, expect_call, expect_comma, expect_else, expect_end, expect_equals,
    expect_fi, expect_fun, expect_greater_than, expect_if, expect_in, expect_less_than, expect_let,
    expect_lparen, expect_minus, expect_plus, expect_rparen, expect_semicolon, expect_slash,
    expect_star, expect_then, many, optional, separated,
};
use crate::parser::state::{ParseState, Parser};

use super::literal::{boolean, ident, number};

/// expr := atom (operator atom)*
///
/// A single flat, left-associative level: `1+2*3` folds to `(1+2)*3`. There
/// is deliberately no precedence between arithmetic and comparison operators;
/// preserving this quirk of the grammar bit-for-bit is part of the contract.
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        ((atom() + many(operator() + atom())) >> fold_operators).parse(state)
    })
}

fn fold_operators((first, rest): (Expression, Vec<(BinOpKind, Expression)>)) -> Expression {
    rest.into_iter().fold(first, |left, (op, right)| {
        let position = left.pos().merge(&right.pos());
        Expression::BinaryOp(BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            position,
        })
    })
}

/// operator := "+" | "-" | "*" | "/" | "=" | "<" | ">"
fn operator() -> BoxedParser<BinOpKind> {
    (expect_plus() >> |_| BinOpKind::Add)
        | (expect_minus() >> |_| BinOpKind::Sub)
        | (expect_star() >> |_| BinOpKind::Mul)
        | (expect_slash() >> |_| BinOpKind::Div)
        | (expect_equals() >> |_| BinOpKind::Eq)
        | (expect_less_than() >> |_| BinOpKind::Lt)
        | (expect_greater_than() >> |_| BinOpKind::Gt)
}

/// atom := let | if | fun | call | true | false | number | variable
///
/// Ordered alternation; every alternative starts with a distinct token, so
/// the first match commits.
fn atom() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        (let_expr()
            | if_expr()
            | fun_expr()
            | call_expr()
            | (boolean() >> Expression::Const)
            | (number() >> Expression::Const)
            | (ident() >> Expression::Variable))
            .parse(state)
    })
}

/// let := "let" decl (";" decl)* "in" expr "end"
fn let_expr() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_let().parse(state)?.pos();
        let decls = separated(declaration(), expect_semicolon()).parse(state)?;
        expect_in().parse(state)?;
        let body = expression().parse(state)?;
        let end = expect_end().parse(state)?.pos();
        Ok(Expression::Let(Let {
            decls,
            body: Box::new(body),
            position: start.merge(&end),
        }))
    })
}

/// decl := ident "=" expr
fn declaration() -> BoxedParser<Declaration> {
    BoxedParser::new(move |state: &mut ParseState| {
        let (name, value) =
            ((ident().label("declaration name") - expect_equals()) + expression()).parse(state)?;
        Ok(Declaration { name, value })
    })
}

/// if := "if" expr "then" expr ("else" expr)? "fi"
fn if_expr() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_if().parse(state)?.pos();
        let condition = expression().parse(state)?;
        expect_then().parse(state)?;
        let then_branch = expression().parse(state)?;
        let else_branch = optional(expect_else() * expression()).parse(state)?;
        let end = expect_fi().parse(state)?.pos();
        Ok(Expression::If(If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            position: start.merge(&end),
        }))
    })
}

/// fun := "fun" ident ("," ident)* "=>" expr "end"
fn fun_expr() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_fun().parse(state)?.pos();
        let params = separated(ident().label("parameter name"), expect_comma()).parse(state)?;
        expect_arrow().parse(state)?;
        let body = expression().parse(state)?;
        let end = expect_end().parse(state)?.pos();
        Ok(Expression::Fun(Fun::new(params, body, start.merge(&end))))
    })
}

/// call := "call" (fun | variable) "(" expr ("," expr)* ")"
fn call_expr() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = expect_call().parse(state)?.pos();
        let callee = (fun_expr() | (ident() >> Expression::Variable)).parse(state)?;
        expect_lparen().parse(state)?;
        let args = separated(expression(), expect_comma()).parse(state)?;
        let end = expect_rparen().parse(state)?.pos();
        Ok(Expression::Call(Call {
            callee: Box::new(callee),
            args,
            position: start.merge(&end),
        }))
    })
}
