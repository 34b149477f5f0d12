use crate::object::Object;
use crate::token::Token;
use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub enum RuntimeError {
    InvalidOperand { operator: Token, msg: String },
    UndefinedVariable { name: Token, msg: String },
    UninitializedVariable { name: Token },
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::InvalidOperand { operator, msg } => {
                write!(f, "[line {}] {}", operator.line, msg)
            }
            RuntimeError::UndefinedVariable { name, msg } => {
                write!(f, "[line {}] {}", name.line, msg)
            }
            RuntimeError::UninitializedVariable { name } => {
                write!(
                    f,
                    "[line {}] Variable must be initialized before use.",
                    name.line
                )
            }
        }
    }
}

/// Outcome of executing a single statement. `Break` and `Return` travel as
/// ordinary values until the nearest enclosing loop or call consumes them;
/// every caller of `execute` has to check which one it got.
#[derive(Debug, PartialEq)]
pub enum ControlFlow {
    Normal,
    Break,
    Return(Object),
}
