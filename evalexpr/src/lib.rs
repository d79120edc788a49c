//! Integer arithmetic expressions: a table driven precedence climbing parser,
//! a recursive descent parser for comparison, and a tree walking evaluator.

pub use ast::*;
pub use display::*;
pub use error::*;
pub use op::*;
pub use parse::*;
pub use span::*;
pub use style::*;

mod ast;
mod display;
mod error;
mod eval;
mod op;
mod parse;
mod span;
mod style;

/// Parse `input` with the precedence climbing parser and evaluate it.
pub fn eval(input: &str) -> crate::Result<i64> {
    eval_with(Frontend::Climbing, input)
}

pub fn eval_with(frontend: Frontend, input: &str) -> crate::Result<i64> {
    let ast = frontend.parse(input)?;
    let val = ast.eval();
    destroy(Some(ast));
    val
}
