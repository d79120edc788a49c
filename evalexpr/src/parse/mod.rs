use strum_macros::{Display, EnumString};
use tracing::{debug, trace};

use crate::{Ast, Fixity, OpKind, OpTable, Span, DEFAULT_TABLE, MAX_PREC, MIN_PREC};

pub(crate) use cursor::*;
pub use recursive::*;

mod cursor;
mod recursive;

/// How many nested operands a parser descends into before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tallest tree a parser builds before giving up. Evaluating, printing and
/// dropping a tree recurse once per level, so this also bounds their stack
/// use. Flat chains like `1 + 1 + 1` grow one level per operator.
pub const DEFAULT_MAX_HEIGHT: usize = 1024;

/// Parse a complete expression with the precedence climbing parser and the
/// default operator table.
pub fn parse(input: &str) -> crate::Result<Ast> {
    Parser::new(input).parse()
}

/// Selects which parser turns text into an [`Ast`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Frontend {
    #[default]
    Climbing,
    Recursive,
}

impl Frontend {
    pub fn parse(self, input: &str) -> crate::Result<Ast> {
        match self {
            Self::Climbing => Parser::new(input).parse(),
            Self::Recursive => RecursiveParser::new(input).parse(),
        }
    }
}

/// Table driven precedence climbing parser.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    table: OpTable<'a>,
    depth: usize,
    max_depth: usize,
    max_height: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_table(input, DEFAULT_TABLE)
    }

    pub fn with_table(input: &'a str, table: OpTable<'a>) -> Self {
        Self {
            cursor: Cursor::new(input),
            table,
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
        debug!(input = self.cursor.rest(), "climbing parse");
        let res = self.climb(MIN_PREC).and_then(|ast| {
            self.cursor.skip_whitespace();
            match unexpected_input(&self.cursor, &self.table, ast.span) {
                Some(e) => Err(e),
                None => Ok(ast),
            }
        });

        match &res {
            Ok(ast) => debug!(%ast, "parsed"),
            Err(e) => debug!(error = %e, "parse failed"),
        }
        res
    }

    fn climb(&mut self, min_prec: i32) -> crate::Result<Ast> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(crate::Error::NestingTooDeep(Span::pos(self.cursor.col())));
        }
        let res = self.climb_inner(min_prec);
        self.depth -= 1;
        res
    }

    fn climb_inner(&mut self, min_prec: i32) -> crate::Result<Ast> {
        let mut lhs = self.parse_operand()?;
        let mut ceiling = MAX_PREC;

        loop {
            self.cursor.skip_whitespace();
            let Some(op) = self.table.longest_trailing_match(self.cursor.rest()) else {
                break;
            };
            if op.prec < min_prec || op.prec > ceiling {
                break;
            }

            let op_span = self.cursor.eat_str(op.symbol);
            trace!(symbol = op.symbol, prec = op.prec, min_prec, ceiling, "absorb");

            let ast = match op.kind {
                OpKind::Infix(typ) => {
                    let rhs = self.climb(op.right_bp())?;
                    Ast::binary(typ, lhs, rhs)
                }
                OpKind::Postfix(typ) => {
                    let span = Span::across(lhs.span, op_span);
                    Ast::unary(typ, lhs, span)
                }
                // never matched after an operand
                OpKind::Prefix(_) => break,
            };
            lhs = check_height(ast, op_span, self.max_height)?;
            ceiling = op.next_min_prec();
        }

        Ok(lhs)
    }

    fn parse_operand(&mut self) -> crate::Result<Ast> {
        self.cursor.skip_whitespace();

        let prefix = self.table.longest_prefix_match(self.cursor.rest(), Fixity::Prefix);
        if let Some(op) = prefix {
            if let OpKind::Prefix(typ) = op.kind {
                let op_span = self.cursor.eat_str(op.symbol);
                let val = self.climb(op.next_min_prec())?;
                let span = Span::across(op_span, val.span);
                return check_height(Ast::unary(typ, val, span), op_span, self.max_height);
            }
        }

        if let Some((val, span)) = self.cursor.eat_num()? {
            return Ok(Ast::num(val, span));
        }

        if let Some(open) = self.cursor.next_if('(') {
            let mut ast = self.climb(MIN_PREC)?;
            self.cursor.skip_whitespace();
            let close = close_group(&self.cursor, &self.table, open, ast.span)?;
            self.cursor.next();
            ast.span = Span::across(open, close);
            return Ok(ast);
        }

        Err(missing_operand(&self.cursor, &self.table))
    }
}

/// Fail if `ast` grew taller than `max_height`, blaming the operator at `op`.
pub(crate) fn check_height(ast: Ast, op: Span, max_height: usize) -> crate::Result<Ast> {
    if ast.height() > max_height {
        trace!(height = ast.height(), max_height, "tree too tall");
        return Err(crate::Error::NestingTooDeep(op));
    }
    Ok(ast)
}

/// Check that the cursor sits on the `)` closing the group opened at `open`.
pub(crate) fn close_group(
    cursor: &Cursor,
    table: &OpTable,
    open: Span,
    inner: Span,
) -> crate::Result<Span> {
    match cursor.peek() {
        Some(')') => Ok(Span::pos(cursor.col())),
        None => Err(crate::Error::MissingClosingParenthesis(open)),
        Some(_) => Err(unexpected_input(cursor, table, inner)
            .unwrap_or(crate::Error::MissingClosingParenthesis(open))),
    }
}

/// The error for a position where an operand was expected.
pub(crate) fn missing_operand(cursor: &Cursor, table: &OpTable) -> crate::Error {
    let col = cursor.col();
    match cursor.peek() {
        None => crate::Error::MissingOperand(Span::pos(col)),
        Some(')') => crate::Error::UnexpectedParenthesis(Span::pos(col)),
        Some(c) => match table.longest_any_match(cursor.rest()) {
            Some(op) => {
                let end = col + op.symbol.chars().count();
                crate::Error::UnexpectedOperator(Span::of(col, end))
            }
            None => crate::Error::InvalidCharacter(c, Span::pos(col)),
        },
    }
}

/// The error for input remaining after the complete operand at `prev`, or
/// `None` if the input is exhausted.
pub(crate) fn unexpected_input(
    cursor: &Cursor,
    table: &OpTable,
    prev: Span,
) -> Option<crate::Error> {
    let col = cursor.col();
    let c = cursor.peek()?;
    let err = match c {
        ')' => crate::Error::UnexpectedParenthesis(Span::pos(col)),
        '(' | '0'..='9' => crate::Error::MissingOperator(Span::between(prev, Span::pos(col))),
        _ => match table.longest_any_match(cursor.rest()) {
            Some(op) => {
                let end = col + op.symbol.chars().count();
                crate::Error::UnexpectedOperator(Span::of(col, end))
            }
            None => crate::Error::InvalidCharacter(c, Span::pos(col)),
        },
    };
    Some(err)
}
