use tracing::debug;

use crate::{Ast, BinaryOp, OpTable, Span, UnaryOp, DEFAULT_TABLE};

use super::{
    check_height, close_group, missing_operand, unexpected_input, Cursor, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_HEIGHT,
};

/// Recursive descent parser with the precedence levels written out as
/// grammar rules:
///
/// ```text
/// E : T [ ('+'|'-') T ]*
/// T : F [ ('*'|'/') F ]*
/// F : ('-'|'+') F | P
/// P : G [ '^' F ]
/// G : ( '(' E ')' | NUMBER ) [ '!' ]
/// ```
pub struct RecursiveParser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
    max_height: usize,
}

impl<'a> RecursiveParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Parse the whole input as exactly one expression.
    pub fn parse(mut self) -> crate::Result<Ast> {
        debug!(input = self.cursor.rest(), "recursive descent parse");
        let ast = self.expression()?;
        self.cursor.skip_whitespace();
        if let Some(e) = unexpected_input(&self.cursor, &DEFAULT_TABLE, ast.span) {
            debug!(error = %e, "parse failed");
            return Err(e);
        }
        Ok(ast)
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> crate::Result<T>) -> crate::Result<T> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(crate::Error::NestingTooDeep(Span::pos(self.cursor.col())));
        }
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn table(&self) -> &OpTable<'static> {
        &DEFAULT_TABLE
    }

    fn expression(&mut self) -> crate::Result<Ast> {
        let mut lhs = self.term()?;
        loop {
            self.cursor.skip_whitespace();
            let typ = match self.cursor.peek() {
                Some('+') => BinaryOp::Add,
                Some('-') => BinaryOp::Sub,
                _ => break,
            };
            let op_span = Span::pos(self.cursor.col());
            self.cursor.next();
            let rhs = self.term()?;
            lhs = check_height(Ast::binary(typ, lhs, rhs), op_span, self.max_height)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> crate::Result<Ast> {
        let mut lhs = self.factor()?;
        loop {
            self.cursor.skip_whitespace();
            let typ = match self.cursor.peek() {
                Some('*') => BinaryOp::Mul,
                Some('/') => BinaryOp::Div,
                _ => break,
            };
            let op_span = Span::pos(self.cursor.col());
            self.cursor.next();
            let rhs = self.factor()?;
            lhs = check_height(Ast::binary(typ, lhs, rhs), op_span, self.max_height)?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> crate::Result<Ast> {
        self.cursor.skip_whitespace();
        let typ = match self.cursor.peek() {
            Some('+') => UnaryOp::Identity,
            Some('-') => UnaryOp::Negate,
            _ => return self.power(),
        };
        let op_span = Span::pos(self.cursor.col());
        self.cursor.next();

        let val = self.nested(Self::factor)?;
        let span = Span::across(op_span, val.span);
        check_height(Ast::unary(typ, val, span), op_span, self.max_height)
    }

    fn power(&mut self) -> crate::Result<Ast> {
        let lhs = self.group()?;
        self.cursor.skip_whitespace();
        let Some(op_span) = self.cursor.next_if('^') else {
            return Ok(lhs);
        };

        let rhs = self.nested(Self::factor)?;
        check_height(Ast::binary(BinaryOp::Pow, lhs, rhs), op_span, self.max_height)
    }

    fn group(&mut self) -> crate::Result<Ast> {
        self.cursor.skip_whitespace();
        let ast = if let Some((val, span)) = self.cursor.eat_num()? {
            Ast::num(val, span)
        } else if let Some(open) = self.cursor.next_if('(') {
            let mut ast = self.nested(Self::expression)?;
            self.cursor.skip_whitespace();
            let close = close_group(&self.cursor, self.table(), open, ast.span)?;
            self.cursor.next();
            ast.span = Span::across(open, close);
            ast
        } else {
            return Err(missing_operand(&self.cursor, self.table()));
        };

        self.cursor.skip_whitespace();
        match self.cursor.next_if('!') {
            Some(op_span) => {
                let span = Span::across(ast.span, op_span);
                let ast = Ast::unary(UnaryOp::Factorial, ast, span);
                check_height(ast, op_span, self.max_height)
            }
            None => Ok(ast),
        }
    }
}
