use std::cell::RefCell;
use std::rc::Rc;

use crate::prelude::*;
use crate::SharedErrorReporter;

type EvalResult = Result<Object, RuntimeError>;
type ExecResult = Result<ControlFlow, RuntimeError>;

pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    error_reporter: Option<SharedErrorReporter>,
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Environment::new().as_shared();
        let environment = globals.clone();

        globals
            .borrow_mut()
            .define("clock", Object::Callable(crate::native::clock()));

        Self {
            globals,
            environment,
            error_reporter: None,
        }
    }

    pub fn with_error_reporting(self, error_reporter: SharedErrorReporter) -> Self {
        Self {
            error_reporter: Some(error_reporter),
            ..self
        }
    }
}

impl Interpreter {
    pub fn evaluate_expr(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { expr: inner } => self.evaluate_expr(inner.as_ref()),
            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),
            Expr::Variable { name } => {
                let value = self.environment.borrow().get(name)?;
                if let Object::Uninitialized = value {
                    return Err(RuntimeError::UninitializedVariable { name: name.clone() });
                }
                Ok(value)
            }
            Expr::Assignment { name, value } => {
                let value = self.evaluate_expr(value.as_ref())?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_val = self.evaluate_expr(left)?;

                // Short-circuit hands back the original operand, not a
                // normalized boolean.
                if operator.token_type == TokenType::Or {
                    if self.is_truthy(&left_val) {
                        return Ok(left_val);
                    }
                } else {
                    // TokenType::And
                    if !self.is_truthy(&left_val) {
                        return Ok(left_val);
                    }
                }

                self.evaluate_expr(right)
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.evaluate_expr(condition)?;
                if self.is_truthy(&condition) {
                    self.evaluate_expr(then_branch)
                } else {
                    self.evaluate_expr(else_branch)
                }
            }
            Expr::Comma { left, right } => {
                // Evaluate and discard
                self.evaluate_expr(left)?;
                self.evaluate_expr(right)
            }
            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee = self.evaluate_expr(callee)?;

                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.evaluate_expr(arg)?);
                }

                let Object::Callable(function) = callee else {
                    return Err(RuntimeError::InvalidOperand {
                        operator: paren.clone(),
                        msg: "Can only call functions and classes.".to_owned(),
                    });
                };

                if args.len() != function.arity() {
                    return Err(RuntimeError::InvalidOperand {
                        operator: paren.clone(),
                        msg: format!(
                            "Expected {} arguments but got {}.",
                            function.arity(),
                            args.len()
                        ),
                    });
                }

                function.call(self, args)
            }
        }
    }

    // Everything except nil and false counts as true, including 0 and "".
    fn is_truthy(&self, value: &Object) -> bool {
        !matches!(value, Object::Nil | Object::Boolean(false))
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> EvalResult {
        let value = self.evaluate_expr(right)?;
        match operator.token_type {
            TokenType::Minus => {
                if let Object::Number(n) = value {
                    Ok(Object::Number(-n))
                } else {
                    Err(RuntimeError::InvalidOperand {
                        operator: operator.clone(),
                        msg: "Operand must be a number.".to_owned(),
                    })
                }
            }
            TokenType::Bang => Ok(Object::Boolean(!self.is_truthy(&value))),

            // Unreachable code. We don't have any unary expression except the ones above.
            _ => Ok(Object::Nil),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> EvalResult {
        let left_value = self.evaluate_expr(left)?;
        let right_value = self.evaluate_expr(right)?;

        match operator.token_type {
            TokenType::Plus => match (&left_value, &right_value) {
                (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
                (Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
                // A number next to a string is stringified first, in its
                // display form ('1', not '1.0').
                (Object::Number(_), Object::String(_))
                | (Object::String(_), Object::Number(_)) => {
                    Ok(Object::String(format!("{left_value}{right_value}")))
                }
                _ => Err(RuntimeError::InvalidOperand {
                    operator: operator.clone(),
                    msg: "Operands must be numbers or strings.".to_owned(),
                }),
            },
            TokenType::Minus => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Number(l - r)),
            TokenType::Star => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Number(l * r)),
            TokenType::Slash => {
                let (l, r) = self.check_number_operands(operator, &left_value, &right_value)?;
                if r != 0.0 {
                    Ok(Object::Number(l / r))
                } else if l == 0.0 {
                    // 0/0 is indeterminate, not an error
                    Ok(Object::Number(f64::NAN))
                } else {
                    Err(RuntimeError::InvalidOperand {
                        operator: operator.clone(),
                        msg: "Cannot divide by 0".to_owned(),
                    })
                }
            }
            TokenType::Greater => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l > r)),
            TokenType::GreaterEqual => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l >= r)),
            TokenType::Less => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l < r)),
            TokenType::LessEqual => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l <= r)),

            TokenType::EqualEqual => Ok(Object::Boolean(left_value == right_value)),
            TokenType::BangEqual => Ok(Object::Boolean(left_value != right_value)),

            // Unreachable code
            _ => Ok(Object::Nil),
        }
    }

    fn check_number_operands(
        &self,
        operator: &Token,
        left: &Object,
        right: &Object,
    ) -> Result<(f64, f64), RuntimeError> {
        if let (Some(l), Some(r)) = (left.number(), right.number()) {
            Ok((l, r))
        } else {
            Err(RuntimeError::InvalidOperand {
                operator: operator.clone(),
                msg: "Operands must be numbers.".to_owned(),
            })
        }
    }
}

impl Interpreter {
    /// Runs a program. The first runtime error is reported and aborts the
    /// remaining statements; whatever was already printed stands.
    pub fn interpret(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            if let Err(e) = self.execute(stmt) {
                self.runtime_error(e);
                return;
            }
        }
    }

    pub fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        match stmt {
            Stmt::Expression { expr } => {
                self.evaluate_expr(expr)?;
            }
            Stmt::Print { expr } => {
                let value = self.evaluate_expr(expr)?;
                println!("{value}");
            }
            Stmt::Var { name, initializer } => {
                let value = if let Some(expr) = initializer {
                    self.evaluate_expr(expr)?
                } else {
                    Object::Uninitialized
                };

                self.environment.borrow_mut().define(&name.lexeme, value);
            }
            Stmt::Block { statements } => {
                // Create a new environment for executing the block
                let new_env = Environment::new()
                    .with_enclosing(self.environment.clone())
                    .as_shared();

                return self.execute_block(statements, new_env);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition_result = self.evaluate_expr(condition)?;

                if self.is_truthy(&condition_result) {
                    return self.execute(then_branch.as_ref());
                } else if let Some(stmt) = else_branch {
                    return self.execute(stmt.as_ref());
                }
            }
            Stmt::While { condition, body } => loop {
                let value = self.evaluate_expr(condition)?;
                if !self.is_truthy(&value) {
                    break;
                }

                match self.execute(body)? {
                    // A break lands here and goes no further.
                    ControlFlow::Break => break,
                    flow @ ControlFlow::Return(_) => return Ok(flow),
                    ControlFlow::Normal => {}
                }
            },
            Stmt::Break { token: _ } => return Ok(ControlFlow::Break),
            Stmt::Return { keyword: _, value } => {
                let value = if let Some(expr) = value {
                    self.evaluate_expr(expr)?
                } else {
                    Object::Nil
                };

                return Ok(ControlFlow::Return(value));
            }
            Stmt::Function { name, params, body } => {
                // self.environment is the active environment at the point of
                // declaration, NOT at the call. For inner functions it is the
                // parent function's call frame.
                let env = self.environment.clone();
                let function = LoxFunction::new(name.clone(), params.to_vec(), body, env);
                self.environment
                    .borrow_mut()
                    .define(&name.lexeme, Object::Callable(Rc::new(function)));
            }
        };

        Ok(ControlFlow::Normal)
    }

    /// Swaps in `environment`, runs the statements, and puts the previous
    /// frame back no matter how the block ends: normal completion, a
    /// break/return transfer, or a runtime error.
    pub fn execute_block<I, R>(
        &mut self,
        statements: I,
        environment: Rc<RefCell<Environment>>,
    ) -> ExecResult
    where
        I: IntoIterator<Item = R>,
        R: AsRef<Stmt>,
    {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(ControlFlow::Normal);
        for s in statements {
            result = self.execute(s.as_ref());
            if !matches!(result, Ok(ControlFlow::Normal)) {
                break;
            }
        }

        self.environment = previous;
        result
    }

    fn runtime_error(&self, e: RuntimeError) {
        if let Some(reporter) = self.error_reporter.as_ref() {
            reporter.borrow_mut().runtime_error(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(source: &str) -> Vec<Stmt> {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens().expect("failed to scan the source");
        Parser::new(tokens).parse().expect("failed to parse the source")
    }

    fn make_expression(source: &str) -> Expr {
        let stmt = parse_source(source).pop().expect("no statement was created");

        match stmt {
            Stmt::Expression { expr } => expr,
            other => panic!("statement is not an expression: {:?}", other),
        }
    }

    /// Executes `source`, then evaluates `expr_source` in the same
    /// interpreter so tests can look at the resulting bindings.
    fn run_then_eval(source: &str, expr_source: &str) -> EvalResult {
        let mut ipr = Interpreter::new();
        for stmt in parse_source(source) {
            ipr.execute(&stmt).expect("program failed");
        }
        ipr.evaluate_expr(&make_expression(expr_source))
    }

    macro_rules! assert_literal {
        ($source:literal, $expected:expr, $lit_type:path) => {
            let mut ipr = Interpreter::new();
            let expr = make_expression($source);
            let res = ipr.evaluate_expr(&expr);
            assert!(res.is_ok());
            assert_eq!(res.unwrap(), $lit_type($expected));
        };
    }

    macro_rules! assert_number {
        ($source:literal, $expected:expr) => {
            assert_literal!($source, $expected, Object::Number);
        };
    }

    macro_rules! assert_string {
        ($source:literal, $expected:expr) => {
            assert_literal!($source, $expected, Object::String);
        };
    }

    macro_rules! assert_boolean {
        ($source:literal, $expected:expr) => {
            assert_literal!($source, $expected, Object::Boolean);
        };
    }

    macro_rules! assert_invalid_operand {
        ($source:literal, $msg:literal) => {
            let mut ipr = Interpreter::new();
            let expr = make_expression($source);
            match ipr.evaluate_expr(&expr) {
                Err(RuntimeError::InvalidOperand { msg, .. }) => assert_eq!(msg, $msg),
                other => panic!("expected an operand error, got {:?}", other),
            }
        };
    }

    #[test]
    fn unary_minus() {
        assert_number!("-3.14;", -3.14);
    }

    #[test]
    fn unary_minus_requires_a_number() {
        assert_invalid_operand!("-\"abc\";", "Operand must be a number.");
    }

    #[test]
    fn unary_bang() {
        assert_boolean!("!true;", false);
        assert_boolean!("!false;", true);
        assert_boolean!("!nil;", true);
        assert_boolean!("!0;", false);
        assert_boolean!("!\"\";", false);
    }

    #[test]
    fn binary_plus_numbers() {
        assert_number!("10 + 20;", 30.0);
    }

    #[test]
    fn binary_plus_strings() {
        assert_string!(r#" "Hello " + "World!"; "#, "Hello World!".to_string());
    }

    #[test]
    fn binary_plus_mixes_numbers_into_strings() {
        assert_string!(r#" "abc" + 1; "#, "abc1".to_string());
        assert_string!(r#" 1 + "abc"; "#, "1abc".to_string());
        assert_string!(r#" "pi is " + 3.14; "#, "pi is 3.14".to_string());
    }

    #[test]
    fn binary_plus_rejects_other_mixes() {
        assert_invalid_operand!("1 + nil;", "Operands must be numbers or strings.");
        assert_invalid_operand!("\"a\" + true;", "Operands must be numbers or strings.");
    }

    #[test]
    fn binary_minus() {
        assert_number!("10 - 20;", -10.0);
    }

    #[test]
    fn binary_star() {
        assert_number!("10 * 20;", 200.0);
    }

    #[test]
    fn binary_slash() {
        assert_number!("10 / 20;", 0.5);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_invalid_operand!("5 / 0;", "Cannot divide by 0");
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let mut ipr = Interpreter::new();
        let expr = make_expression("0 / 0;");
        match ipr.evaluate_expr(&expr) {
            Ok(Object::Number(n)) => assert!(n.is_nan()),
            other => panic!("expected NaN, got {:?}", other),
        }
    }

    #[test]
    fn comparison_requires_numbers() {
        assert_invalid_operand!("1 < \"two\";", "Operands must be numbers.");
    }

    #[test]
    fn precedence_and_associativity() {
        assert_number!("1 + 2 * 3;", 7.0);
        assert_number!("2 - 3 - 4;", -5.0);
        assert_number!("(1 + 2) * 3;", 9.0);
    }

    #[test]
    fn binary_comparisons() {
        assert_boolean!("10 > 20;", false);
        assert_boolean!("20 >= 10;", true);
        assert_boolean!("10 < 20;", true);
        assert_boolean!("20 <= 10;", false);
    }

    #[test]
    fn equality() {
        assert_boolean!("10 == 10;", true);
        assert_boolean!("10 != 20;", true);
        assert_boolean!("nil == nil;", true);
        assert_boolean!("nil == false;", false);
        assert_boolean!("\"a\" == \"a\";", true);
        assert_boolean!("1 == \"1\";", false);
    }

    #[test]
    fn logical_operators_return_the_operand() {
        assert_string!("nil or \"yes\";", "yes".to_string());
        assert_number!("1 or 2;", 1.0);
        assert_number!("1 and 2;", 2.0);
        let mut ipr = Interpreter::new();
        let expr = make_expression("false and 1;");
        assert_eq!(ipr.evaluate_expr(&expr).unwrap(), Object::Boolean(false));
        let expr = make_expression("nil and 1;");
        assert_eq!(ipr.evaluate_expr(&expr).unwrap(), Object::Nil);
    }

    #[test]
    fn logical_operators_short_circuit() {
        // The right leg would blow up with an undefined variable if reached.
        assert_number!("1 or undefined_thing;", 1.0);
        let mut ipr = Interpreter::new();
        let expr = make_expression("false and undefined_thing;");
        assert!(ipr.evaluate_expr(&expr).is_ok());
    }

    #[test]
    fn ternary_picks_one_branch() {
        assert_number!("true ? 1 : 2;", 1.0);
        assert_number!("false ? 1 : 2;", 2.0);
        assert_number!("true ? 1 : false ? 2 : 3;", 1.0);
        assert_number!("false ? 1 : false ? 2 : 3;", 3.0);
    }

    #[test]
    fn comma_yields_the_right_value() {
        assert_number!("1, 2;", 2.0);
        assert_number!("1, 2, 3;", 3.0);
    }

    #[test]
    fn comma_evaluates_the_left_side() {
        let res = run_then_eval("var a = 1; a = 2, 3;", "a;");
        assert_eq!(res.unwrap(), Object::Number(2.0));
    }

    #[test]
    fn assignment_returns_the_value_and_chains() {
        let res = run_then_eval("var a; var b; var c = a = b = 5;", "c;");
        assert_eq!(res.unwrap(), Object::Number(5.0));
    }

    #[test]
    fn block_scoping_restores_the_outer_frame() {
        let res = run_then_eval("var a = 10; { var a = 20; a = 25; }", "a;");
        assert_eq!(res.unwrap(), Object::Number(10.0));
    }

    #[test]
    fn blocks_can_write_outer_variables() {
        let res = run_then_eval("var a = 10; { a = 20; }", "a;");
        assert_eq!(res.unwrap(), Object::Number(20.0));
    }

    #[test]
    fn uninitialized_variables_cannot_be_read() {
        let res = run_then_eval("var x;", "x;");
        assert!(matches!(
            res,
            Err(RuntimeError::UninitializedVariable { .. })
        ));
    }

    #[test]
    fn uninitialized_variables_can_be_assigned_first() {
        let res = run_then_eval("var x; x = 1;", "x;");
        assert_eq!(res.unwrap(), Object::Number(1.0));
    }

    #[test]
    fn undefined_variables_are_errors() {
        let mut ipr = Interpreter::new();
        let expr = make_expression("missing;");
        assert!(matches!(
            ipr.evaluate_expr(&expr),
            Err(RuntimeError::UndefinedVariable { .. })
        ));
    }

    #[test]
    fn while_loops_run_to_completion() {
        let res = run_then_eval(
            "var i = 0; var sum = 0; while (i < 5) { sum = sum + i; i = i + 1; }",
            "sum;",
        );
        assert_eq!(res.unwrap(), Object::Number(10.0));
    }

    #[test]
    fn break_exits_only_the_innermost_loop() {
        let res = run_then_eval(
            r#"
            var outer = 0;
            var inner = 0;
            for (var i = 0; i < 3; i = i + 1) {
                outer = outer + 1;
                while (true) {
                    inner = inner + 1;
                    break;
                }
            }
            "#,
            "outer + inner;",
        );
        assert_eq!(res.unwrap(), Object::Number(6.0));
    }

    #[test]
    fn break_skips_the_rest_of_the_body() {
        let res = run_then_eval(
            "var i = 0; while (true) { if (i == 3) break; i = i + 1; }",
            "i;",
        );
        assert_eq!(res.unwrap(), Object::Number(3.0));
    }

    #[test]
    fn break_unwinds_nested_blocks() {
        let res = run_then_eval(
            r#"
            var reached = false;
            while (true) {
                { { break; } }
                reached = true;
            }
            "#,
            "reached;",
        );
        assert_eq!(res.unwrap(), Object::Boolean(false));
    }

    #[test]
    fn for_desugaring_matches_a_hand_written_while() {
        let desugared = run_then_eval(
            "var sum = 0; for (var i = 0; i < 3; i = i + 1) sum = sum + i;",
            "sum;",
        );
        let by_hand = run_then_eval(
            "var sum = 0; { var i = 0; while (i < 3) { sum = sum + i; i = i + 1; } }",
            "sum;",
        );
        assert_eq!(desugared.unwrap(), by_hand.unwrap());
    }

    #[test]
    fn functions_return_values() {
        let res = run_then_eval("fun add(a, b) { return a + b; }", "add(1, 2);");
        assert_eq!(res.unwrap(), Object::Number(3.0));
    }

    #[test]
    fn functions_without_return_yield_nil() {
        let res = run_then_eval("fun noop() { 1 + 1; }", "noop();");
        assert_eq!(res.unwrap(), Object::Nil);
    }

    #[test]
    fn return_unwinds_out_of_loops() {
        let res = run_then_eval(
            "fun first() { for (var i = 0; ; i = i + 1) { if (i >= 2) return i; } }",
            "first();",
        );
        assert_eq!(res.unwrap(), Object::Number(2.0));
    }

    #[test]
    fn recursion_sees_the_function_name() {
        let res = run_then_eval(
            "fun fib(n) { if (n < 2) return n; return fib(n - 2) + fib(n - 1); }",
            "fib(10);",
        );
        assert_eq!(res.unwrap(), Object::Number(55.0));
    }

    #[test]
    fn closures_capture_the_declaration_environment() {
        let res = run_then_eval(
            r#"
            fun make_counter() {
                var count = 0;
                fun next() {
                    count = count + 1;
                    return count;
                }
                return next;
            }
            var counter = make_counter();
            counter();
            var second = counter();
            "#,
            "second;",
        );
        assert_eq!(res.unwrap(), Object::Number(2.0));
    }

    #[test]
    fn two_closures_share_one_binding() {
        // Both functions close over the same 'shared' frame, so one sees
        // the other's writes.
        let res = run_then_eval(
            r#"
            var get;
            var bump;
            {
                var shared = 0;
                fun getter() { return shared; }
                fun bumper() { shared = shared + 1; }
                get = getter;
                bump = bumper;
            }
            bump();
            bump();
            "#,
            "get();",
        );
        assert_eq!(res.unwrap(), Object::Number(2.0));
    }

    #[test]
    fn loop_closures_share_the_loop_variable() {
        // The 'for' desugaring declares i once, so every closure created in
        // the body sees the final value. That is the specified behavior,
        // not an accident.
        let res = run_then_eval(
            r#"
            var f;
            for (var i = 0; i < 3; i = i + 1) {
                if (i == 0) {
                    fun get_i() { return i; }
                    f = get_i;
                }
            }
            "#,
            "f();",
        );
        assert_eq!(res.unwrap(), Object::Number(3.0));
    }

    #[test]
    fn functions_are_first_class_values() {
        let res = run_then_eval(
            r#"
            fun twice(f, x) { return f(f(x)); }
            fun inc(n) { return n + 1; }
            var r = twice(inc, 5);
            "#,
            "r;",
        );
        assert_eq!(res.unwrap(), Object::Number(7.0));
    }

    #[test]
    fn a_function_equals_itself() {
        let res = run_then_eval("fun f() {} fun g() {}", "f == f;");
        assert_eq!(res.unwrap(), Object::Boolean(true));

        let res = run_then_eval("fun f() {} fun g() {}", "f == g;");
        assert_eq!(res.unwrap(), Object::Boolean(false));
    }

    #[test]
    fn calling_a_non_callable_is_an_error() {
        assert_invalid_operand!("\"not a fn\"(1);", "Can only call functions and classes.");
    }

    #[test]
    fn arity_mismatch_names_both_counts() {
        let mut ipr = Interpreter::new();
        for stmt in parse_source("fun f(a) { return a; }") {
            ipr.execute(&stmt).unwrap();
        }
        let expr = make_expression("f(1, 2);");
        match ipr.evaluate_expr(&expr) {
            Err(RuntimeError::InvalidOperand { msg, .. }) => {
                assert_eq!(msg, "Expected 1 arguments but got 2.");
            }
            other => panic!("expected an arity error, got {:?}", other),
        }
    }

    #[test]
    fn clock_is_predefined() {
        let mut ipr = Interpreter::new();
        let expr = make_expression("clock();");
        match ipr.evaluate_expr(&expr) {
            Ok(Object::Number(n)) => assert!(n > 0.0),
            other => panic!("clock() should return a number, got {:?}", other),
        }
    }

    #[test]
    fn arguments_evaluate_left_to_right() {
        let res = run_then_eval(
            r#"
            var log = "";
            fun note(tag, value) { log = log + tag; return value; }
            fun pair(a, b) { return a + b; }
            var r = pair(note("a", 1), note("b", 2));
            "#,
            "log;",
        );
        assert_eq!(res.unwrap(), Object::String("ab".to_owned()));
    }

    #[test]
    fn runtime_error_aborts_following_statements() {
        let mut ipr = Interpreter::new();
        let statements = parse_source("var a = 1; a = a + nil; a = 99;");
        ipr.interpret(&statements);

        // The failing statement stopped the run before 'a = 99'.
        let res = ipr.evaluate_expr(&make_expression("a;"));
        assert_eq!(res.unwrap(), Object::Number(1.0));
    }
}
