use crate::prelude::*;

/// Renders an expression tree in a lisp-ish prefix form. Handy when poking
/// at parser output in tests.
pub struct AstPrinter;

impl AstPrinter {
    pub fn to_string(expr: &Expr) -> String {
        match expr {
            Expr::Binary { left, operator, right } => {
                format!(
                    "({} {} {})",
                    operator.lexeme,
                    Self::to_string(left),
                    Self::to_string(right)
                )
            }
            Expr::Grouping { expr } => format!("(group {})", Self::to_string(expr)),
            Expr::Literal { value } => format!("{value}"),
            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::to_string(right))
            }
            Expr::Variable { name } => name.lexeme.clone(),
            Expr::Assignment { name, value } => {
                format!("(= {} {})", name.lexeme, Self::to_string(value))
            }
            Expr::Logical { left, operator, right } => {
                format!(
                    "({} {} {})",
                    operator.lexeme,
                    Self::to_string(left),
                    Self::to_string(right)
                )
            }
            Expr::Call { callee, paren: _, arguments } => {
                let args = arguments
                    .iter()
                    .map(Self::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("(call {} {})", Self::to_string(callee), args)
            }
            Expr::Ternary { condition, then_branch, else_branch } => {
                format!(
                    "(? {} {} {})",
                    Self::to_string(condition),
                    Self::to_string(then_branch),
                    Self::to_string(else_branch)
                )
            }
            Expr::Comma { left, right } => {
                format!("(, {} {})", Self::to_string(left), Self::to_string(right))
            }
        }
    }
}
