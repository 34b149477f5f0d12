use std::rc::Rc;

use crate::prelude::*;

#[derive(Debug)]
pub struct ParserError {
    pub token: Token,
    pub message: String,
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    errors: Vec<ParserError>,
    // 'break' is only valid while this is > 0
    loop_depth: u32,
    // same idea for 'return'
    fun_depth: u32,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
            loop_depth: 0,
            fun_depth: 0,
        }
    }

    /// Parses the whole token stream. Errors don't stop the parse: after each
    /// one we synchronize to the next statement boundary and keep going, so a
    /// single run can surface several of them.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, Vec<ParserError>> {
        let mut statements = vec![];
        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        if self.errors.is_empty() {
            Ok(statements)
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }

    fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_tt(&[TokenType::Var]) {
            self.var_declaration()
        } else if self.match_tt(&[TokenType::Fun]) {
            self.function("function")
        } else {
            self.statement()
        };

        if result.is_none() {
            self.synchronize();
            return None;
        }

        result
    }

    fn var_declaration(&mut self) -> Option<Stmt> {
        let name = self.consume(TokenType::Identifier, "Expect variable name")?;

        let initializer = if self.match_tt(&[TokenType::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenType::Semicolon,
            "Expect ';' after variable declaration",
        )?;

        Some(Stmt::Var { name, initializer })
    }

    fn function(&mut self, kind: &str) -> Option<Stmt> {
        let name = self.consume(
            TokenType::Identifier,
            format!("Expect {} name", kind).as_str(),
        )?;

        self.consume(
            TokenType::LeftParen,
            format!("Expect '(' after {} name", kind).as_str(),
        )?;

        let mut parameters = vec![];
        if !self.check(&TokenType::RightParen) {
            loop {
                if parameters.len() >= 255 {
                    self.error(self.peek().clone(), "Can't have more than 255 parameters.");
                }

                parameters.push(self.consume(TokenType::Identifier, "Expect parameter name")?);
                if !self.match_tt(&[TokenType::Comma]) {
                    break;
                }
            }
        }

        self.consume(TokenType::RightParen, "Expect ')' after parameters")?;
        self.consume(
            TokenType::LeftBrace,
            format!("Expect '{{' before {} body", kind).as_str(),
        )?;

        // A function body is a fresh context: 'break' can't jump out of it,
        // but 'return' becomes legal.
        let enclosing_loop_depth = std::mem::replace(&mut self.loop_depth, 0);
        self.fun_depth += 1;
        let body = self.block();
        self.fun_depth -= 1;
        self.loop_depth = enclosing_loop_depth;

        let body = body?.into_iter().map(Rc::new).collect::<Vec<_>>();

        Some(Stmt::Function {
            name,
            params: parameters,
            body,
        })
    }

    fn statement(&mut self) -> Option<Stmt> {
        if self.match_tt(&[TokenType::If]) {
            self.if_statement()
        } else if self.match_tt(&[TokenType::While]) {
            self.while_statement()
        } else if self.match_tt(&[TokenType::For]) {
            self.for_statement()
        } else if self.match_tt(&[TokenType::Print]) {
            self.print_statement()
        } else if self.match_tt(&[TokenType::Return]) {
            self.return_statement()
        } else if self.match_tt(&[TokenType::Break]) {
            self.break_statement()
        } else if self.match_tt(&[TokenType::LeftBrace]) {
            Some(Stmt::Block {
                statements: self.block()?,
            })
        } else {
            self.expression_statement()
        }
    }

    fn if_statement(&mut self) -> Option<Stmt> {
        self.consume(TokenType::LeftParen, "Expect '(' after 'if'")?;
        let condition = self.expression()?;
        self.consume(TokenType::RightParen, "Expect ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_tt(&[TokenType::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Some(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Option<Stmt> {
        self.consume(TokenType::LeftParen, "Expect '(' after 'while'")?;
        let condition = self.expression()?;
        self.consume(TokenType::RightParen, "Expect ')' after while condition")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;

        Some(Stmt::While {
            condition,
            body: Box::new(body?),
        })
    }

    /// 'for' has no AST node of its own; it rewrites into the equivalent
    /// 'while' inside a block:
    ///
    ///   for (init; cond; incr) body
    ///     => { init; while (cond) { body; incr; } }
    ///
    /// A missing condition becomes literal 'true', and the outer block is
    /// only added when there is an initializer.
    fn for_statement(&mut self) -> Option<Stmt> {
        self.consume(TokenType::LeftParen, "Expect '(' after 'for'")?;

        let initializer = if self.match_tt(&[TokenType::Semicolon]) {
            None
        } else if self.match_tt(&[TokenType::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(&TokenType::Semicolon) {
            self.expression()?
        } else {
            Expr::Literal {
                value: Object::Boolean(true),
            }
        };
        self.consume(TokenType::Semicolon, "Expect ';' after 'for' condition")?;

        let increment = if !self.check(&TokenType::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenType::RightParen, "Expect ')' after 'for' clauses")?;

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        let mut body = body?;

        if let Some(increment) = increment {
            body = Stmt::Block {
                statements: vec![body, Stmt::Expression { expr: increment }],
            };
        }

        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block {
                statements: vec![initializer, body],
            };
        }

        Some(body)
    }

    fn print_statement(&mut self) -> Option<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenType::Semicolon, "Expect ';' after value")?;
        Some(Stmt::Print { expr })
    }

    fn return_statement(&mut self) -> Option<Stmt> {
        let keyword = self.previous();
        if self.fun_depth == 0 {
            self.error(keyword.clone(), "Can't return from top-level code.");
        }

        let value = if !self.check(&TokenType::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::Semicolon, "Expect ';' after 'return'")?;
        Some(Stmt::Return { keyword, value })
    }

    fn break_statement(&mut self) -> Option<Stmt> {
        let token = self.previous();
        if self.loop_depth == 0 {
            self.error(token.clone(), "Must be inside a loop to use 'break'.");
        }

        self.consume(TokenType::Semicolon, "Expect ';' after 'break'")?;
        Some(Stmt::Break { token })
    }

    fn block(&mut self) -> Option<Vec<Stmt>> {
        let mut statements = vec![];

        while !self.check(&TokenType::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }

        self.consume(TokenType::RightBrace, "Expect '}' after block")?;
        Some(statements)
    }

    fn expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenType::Semicolon, "Expect ';' after expression")?;
        Some(Stmt::Expression { expr })
    }

    fn expression(&mut self) -> Option<Expr> {
        self.comma()
    }

    fn comma(&mut self) -> Option<Expr> {
        let mut expr = self.assignment()?;

        while self.match_tt(&[TokenType::Comma]) {
            let right = self.assignment()?;
            expr = Expr::Comma {
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Some(expr)
    }

    fn assignment(&mut self) -> Option<Expr> {
        let expr = self.conditional()?;

        if self.match_tt(&[TokenType::Equal]) {
            let equals = self.previous();
            let value = self.assignment()?;
            if let Expr::Variable { name } = expr {
                return Some(Expr::Assignment {
                    name,
                    value: Box::new(value),
                });
            }

            self.error(equals, "Invalid assignment target");
        }

        Some(expr)
    }

    // Right-associative: the else leg recurses back into conditional, so
    // 'a ? b : c ? d : e' groups as 'a ? b : (c ? d : e)'.
    fn conditional(&mut self) -> Option<Expr> {
        let expr = self.or()?;

        if self.match_tt(&[TokenType::Question]) {
            let then_branch = self.or()?;
            self.consume(TokenType::Colon, "Expect ':' in conditional expression")?;
            let else_branch = self.conditional()?;
            return Some(Expr::Ternary {
                condition: Box::new(expr),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            });
        }

        Some(expr)
    }

    fn or(&mut self) -> Option<Expr> {
        let mut expr = self.and()?;

        while self.match_tt(&[TokenType::Or]) {
            let operator = self.previous();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Some(expr)
    }

    fn and(&mut self) -> Option<Expr> {
        let mut expr = self.equality()?;

        while self.match_tt(&[TokenType::And]) {
            let operator = self.previous();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Some(expr)
    }

    fn equality(&mut self) -> Option<Expr> {
        let mut expr = self.comparison()?;

        while self.match_tt(&[TokenType::BangEqual, TokenType::EqualEqual]) {
            let operator: Token = self.previous();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Some(expr)
    }

    fn comparison(&mut self) -> Option<Expr> {
        let mut expr = self.term()?;

        while self.match_tt(&[
            TokenType::GreaterEqual,
            TokenType::Greater,
            TokenType::LessEqual,
            TokenType::Less,
        ]) {
            let operator: Token = self.previous();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Some(expr)
    }

    fn term(&mut self) -> Option<Expr> {
        let mut expr = self.factor()?;

        while self.match_tt(&[TokenType::Minus, TokenType::Plus]) {
            let operator: Token = self.previous();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Some(expr)
    }

    fn factor(&mut self) -> Option<Expr> {
        let mut expr = self.unary()?;

        while self.match_tt(&[TokenType::Slash, TokenType::Star]) {
            let operator: Token = self.previous();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Some(expr)
    }

    fn unary(&mut self) -> Option<Expr> {
        if self.match_tt(&[TokenType::Bang, TokenType::Minus]) {
            let operator = self.previous();
            let right = self.unary()?;
            return Some(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.call()
    }

    fn call(&mut self) -> Option<Expr> {
        let mut expr = self.primary()?;

        loop {
            if self.match_tt(&[TokenType::LeftParen]) {
                expr = self.finish_call(expr)?;
            } else {
                break;
            }
        }

        Some(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Option<Expr> {
        let mut arguments = vec![];

        if !self.check(&TokenType::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    // Just report the error, but don't return None yet
                    self.error(self.peek().clone(), "Can't have more than 255 arguments.");
                }

                // One level below the comma operator, otherwise 'f(1, 2)'
                // would parse as a single comma expression argument.
                arguments.push(self.assignment()?);

                if !self.match_tt(&[TokenType::Comma]) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenType::RightParen, "Expect ')' after arguments")?;
        Some(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> Option<Expr> {
        if self.match_tt(&[TokenType::False]) {
            return Some(Expr::Literal {
                value: Object::Boolean(false),
            });
        }
        if self.match_tt(&[TokenType::True]) {
            return Some(Expr::Literal {
                value: Object::Boolean(true),
            });
        }
        if self.match_tt(&[TokenType::Nil]) {
            return Some(Expr::Literal { value: Object::Nil });
        }
        if self.match_tt(&[TokenType::Number, TokenType::StringLiteral]) {
            return Some(Expr::Literal {
                value: self
                    .previous()
                    .literal
                    .expect("expecting a number or string here"),
            });
        }
        if self.match_tt(&[TokenType::Identifier]) {
            return Some(Expr::Variable {
                name: self.previous(),
            });
        }
        if self.match_tt(&[TokenType::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenType::RightParen, "Expect ')' after expression.")?;
            return Some(Expr::Grouping {
                expr: Box::new(expr),
            });
        }

        // Error productions: a binary operator with nothing on its left.
        // Report it, then still parse the right-hand operand so the parser
        // stays aligned with the token stream, and discard the construct.
        if self.match_tt(&[TokenType::BangEqual, TokenType::EqualEqual]) {
            self.error(self.previous(), "Missing left-hand operand.");
            let _ = self.equality();
            return None;
        }
        if self.match_tt(&[
            TokenType::Greater,
            TokenType::GreaterEqual,
            TokenType::Less,
            TokenType::LessEqual,
        ]) {
            self.error(self.previous(), "Missing left-hand operand.");
            let _ = self.comparison();
            return None;
        }
        if self.match_tt(&[TokenType::Plus]) {
            self.error(self.previous(), "Missing left-hand operand.");
            let _ = self.term();
            return None;
        }
        if self.match_tt(&[TokenType::Slash, TokenType::Star]) {
            self.error(self.previous(), "Missing left-hand operand.");
            let _ = self.factor();
            return None;
        }

        self.error(self.peek().clone(), "Expect expression.");
        None
    }

    /// Return the next token if its `token_type` matches the given type as input.
    /// Otherwise, record the error message and return `None`.
    fn consume(&mut self, token_type: TokenType, message: &str) -> Option<Token> {
        if self.check(&token_type) {
            return Some(self.advance());
        }

        self.error(self.peek().clone(), message);
        None
    }

    fn error(&mut self, token: Token, message: &str) {
        self.errors.push(ParserError {
            token,
            message: message.to_owned(),
        });
    }

    fn match_tt(&mut self, types: &[TokenType]) -> bool {
        for tt in types {
            if self.check(tt) {
                self.advance();
                return true;
            }
        }

        false
    }

    /// Check to see if the next token's type matches the given `token_type`.
    fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().token_type == *token_type
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::EOF
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).expect("ran out of tokens")
    }

    fn previous(&self) -> Token {
        self.tokens
            .get(self.current - 1)
            .expect("no previous token")
            .clone()
    }

    fn synchronize(&mut self) {
        self.advance();

        // Move and discard tokens until we find a statement boundary
        while !self.is_at_end() {
            if self.previous().token_type == TokenType::Semicolon {
                return;
            }

            match self.peek().token_type {
                TokenType::Fun
                | TokenType::Var
                | TokenType::For
                | TokenType::If
                | TokenType::While
                | TokenType::Print
                | TokenType::Return
                | TokenType::Break => return,
                _ => {}
            }

            self.advance();
        }
    }
}
