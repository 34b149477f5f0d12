use std::rc::Rc;

use crate::prelude::*;

#[derive(Debug)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
    Grouping {
        expr: Box<Expr>,
    },
    Literal {
        value: Object,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Variable {
        name: Token,
    },
    Assignment {
        name: Token,
        value: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    // The `a, b` operator: evaluate and discard the left, yield the right.
    Comma {
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number_literal(v: f64) -> Expr {
        Expr::Literal {
            value: Object::Number(v),
        }
    }
}

#[derive(Debug)]
pub enum Stmt {
    Break {
        token: Token,
    },
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
    Print {
        expr: Expr,
    },
    Expression {
        expr: Expr,
    },
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block {
        statements: Vec<Stmt>,
    },
    // The body is shared so that a function object can keep it alive past
    // the declaration without a deep clone.
    Function {
        name: Token,
        params: Vec<Token>,
        body: Vec<Rc<Stmt>>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

impl AsRef<Stmt> for Stmt {
    fn as_ref(&self) -> &Stmt {
        self
    }
}
