#![allow(clippy::new_without_default)]

mod ast;
mod environment;
mod error;
mod func;
mod interpreter;
mod native;
mod object;
mod parser;
mod printer;
mod scanner;
mod token;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::environment::Environment;
    pub use crate::error::*;
    pub use crate::func::*;
    pub use crate::interpreter::*;
    pub use crate::object::*;
    pub use crate::parser::*;
    pub use crate::printer::*;
    pub use crate::scanner::*;
    pub use crate::token::*;
    pub use crate::Shared;
}

use std::cell::RefCell;
use std::rc::Rc;

use prelude::{Interpreter, Parser, RuntimeError, Scanner, TokenType};

pub type Shared<T> = Rc<RefCell<T>>;
pub type SharedErrorReporter = Shared<ErrorReporter>;

pub struct Lox {
    interpreter: Interpreter,
    error_reporter: SharedErrorReporter,
}

impl Lox {
    pub fn new() -> Self {
        let error_reporter = Rc::new(RefCell::new(ErrorReporter::default()));

        Self {
            interpreter: Interpreter::new().with_error_reporting(error_reporter.clone()),
            error_reporter,
        }
    }

    pub fn run_file(&mut self, filename: &str) -> Result<(), anyhow::Error> {
        let content = std::fs::read_to_string(filename)?;
        self.run(content.as_ref())
    }

    pub fn run(&mut self, input: &str) -> Result<(), anyhow::Error> {
        let mut scanner = Scanner::new(input);

        let tokens = match scanner.scan_tokens() {
            Ok(tokens) => tokens,
            Err(errors) => {
                self.print_scanner_errors(errors);
                return Ok(());
            }
        };

        let mut parser = Parser::new(tokens);
        let statements = match parser.parse() {
            Ok(stmts) => stmts,
            Err(errors) => {
                self.print_parser_errors(errors);
                return Ok(());
            }
        };

        if self.error_reporter.borrow().had_error {
            return Ok(());
        }

        self.interpreter.interpret(&statements);

        Ok(())
    }

    pub fn had_error(&self) -> bool {
        self.error_reporter.borrow().had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.error_reporter.borrow().had_runtime_error
    }

    fn print_scanner_errors(&mut self, errors: Vec<scanner::ScannerError>) {
        let mut reporter = self.error_reporter.borrow_mut();
        errors.iter().for_each(|e| reporter.error(e.line, &e.message));
    }

    fn print_parser_errors(&mut self, errors: Vec<parser::ParserError>) {
        let mut reporter = self.error_reporter.borrow_mut();

        for e in errors {
            if e.token.token_type == TokenType::EOF {
                reporter.report(e.token.line, "at end", &e.message);
            } else {
                reporter.report(e.token.line, &format!("at '{}'", e.token.lexeme), &e.message);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ErrorReporter {
    pub had_error: bool,
    pub had_runtime_error: bool,
}

impl ErrorReporter {
    pub fn error(&mut self, line: i32, message: &str) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: i32, location: &str, message: &str) {
        if location.is_empty() {
            eprintln!("[line {line}] Error: {message}");
        } else {
            eprintln!("[line {line}] Error {location}: {message}");
        }

        self.had_error = true;
    }

    pub fn runtime_error(&mut self, e: &RuntimeError) {
        eprintln!("{e}");
        self.had_runtime_error = true;
    }
}
