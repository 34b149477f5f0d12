use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use crate::prelude::*;

/// A user-defined function. Immutable once created; the closure field is the
/// environment that was active at the `fun` declaration, so the function
/// keeps that whole chain alive for as long as it is reachable.
#[derive(Debug, Clone)]
pub struct LoxFunction {
    name: Token,
    params: Vec<Token>,
    body: Vec<Rc<Stmt>>,
    closure: Rc<RefCell<Environment>>,
}

impl LoxFunction {
    pub fn new(
        name: Token,
        params: Vec<Token>,
        body: &[Rc<Stmt>],
        closure: Rc<RefCell<Environment>>,
    ) -> Self {
        Self {
            name,
            params,
            body: body.to_vec(),
            closure,
        }
    }
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        self.params.len()
    }

    fn call(
        &self,
        interpret: &mut Interpreter,
        arguments: Vec<Object>,
    ) -> Result<Object, RuntimeError> {
        // The call frame hangs off the closure environment, not the caller's.
        let environment = Environment::new()
            .with_enclosing(self.closure.clone())
            .as_shared();

        {
            let mut env_borrow = environment.borrow_mut();
            for (arg, param) in arguments.into_iter().zip(&self.params) {
                env_borrow.define(param.lexeme.as_str(), arg);
            }
        }

        match interpret.execute_block(&self.body, environment)? {
            ControlFlow::Return(value) => Ok(value),
            // Falling off the end of the body yields nil. The parser keeps
            // 'break' from ever crossing a function boundary.
            _ => Ok(Object::Nil),
        }
    }
}

impl Display for LoxFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<fn {}>", self.name.lexeme)
    }
}
