//! Structural rendering of the AST and of runtime values.
//!
//! Every node prints as its constructor name followed by its ordered
//! children, e.g. `Mul(Add(Const(1),Const(2)),Const(3))`. The rendering is
//! deterministic and is what the parser tests assert against.

use std::fmt::{self, Display};

use crate::ast::{
    BinOpKind, BinaryOp, Call, Const, Constant, Expression, Fun, If, Let, Program, Variable,
};
use crate::interpreter::Value;

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prog({})", self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Const(c) => c.fmt(f),
            Expression::Variable(v) => v.fmt(f),
            Expression::BinaryOp(b) => b.fmt(f),
            Expression::Let(l) => l.fmt(f),
            Expression::If(i) => i.fmt(f),
            Expression::Fun(fun) => fun.fmt(f),
            Expression::Call(c) => c.fmt(f),
        }
    }
}

impl Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Constant::Int(i) => write!(f, "Const({i})"),
            Constant::Bool(b) => write!(f, "Const({b})"),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({})", self.name)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.op {
            BinOpKind::Add => "Add",
            BinOpKind::Sub => "Sub",
            BinOpKind::Mul => "Mul",
            BinOpKind::Div => "Div",
            BinOpKind::Eq => "Eq",
            BinOpKind::Gt => "Gt",
            BinOpKind::Lt => "Lt",
        };
        write!(f, "{name}({},{})", self.left, self.right)
    }
}

impl Display for Let {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Let([")?;
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({},{})", decl.name.name, decl.value)?;
        }
        write!(f, "],{})", self.body)
    }
}

impl Display for If {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.else_branch {
            Some(else_branch) => write!(
                f,
                "If({},{},{})",
                self.condition, self.then_branch, else_branch
            ),
            None => write!(f, "If({},{})", self.condition, self.then_branch),
        }
    }
}

impl Display for Fun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fun([")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", param.name)?;
        }
        write!(f, "],{})", self.body)
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Call({},[", self.callee)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, "])")
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Closure(_) => write!(f, "<fun>"),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}
