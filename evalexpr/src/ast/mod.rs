use std::fmt;

use strum_macros::Display;

use crate::Span;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ast {
    pub typ: AstT,
    pub span: Span,
    height: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstT {
    Num(i64),
    Unary(UnaryOp, Box<Ast>),
    Binary(BinaryOp, Box<Ast>, Box<Ast>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum UnaryOp {
    #[strum(serialize = "+")]
    Identity,
    #[strum(serialize = "-")]
    Negate,
    #[strum(serialize = "!")]
    Factorial,
}

impl UnaryOp {
    pub const fn is_postfix(&self) -> bool {
        matches!(self, Self::Factorial)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "^")]
    Pow,
}

impl Ast {
    pub fn new(typ: AstT, span: Span) -> Self {
        let height = match &typ {
            AstT::Num(_) => 1,
            AstT::Unary(_, a) => a.height + 1,
            AstT::Binary(_, a, b) => usize::max(a.height, b.height) + 1,
        };
        Self { typ, span, height }
    }

    pub const fn num(val: i64, span: Span) -> Self {
        Self {
            typ: AstT::Num(val),
            span,
            height: 1,
        }
    }

    pub fn unary(op: UnaryOp, operand: Ast, span: Span) -> Self {
        Self::new(AstT::Unary(op, Box::new(operand)), span)
    }

    pub fn binary(op: BinaryOp, lhs: Ast, rhs: Ast) -> Self {
        let span = Span::across(lhs.span, rhs.span);
        Self::new(AstT::Binary(op, Box::new(lhs), Box::new(rhs)), span)
    }

    /// Number of nodes on the longest path from this node to a leaf, computed
    /// when the node was built. Walking the tree recursively takes this many
    /// stack frames.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Release this tree post-order, calling `on_release` with the span of
    /// every node after its children were released and before the node
    /// itself is freed. Returns the number of released nodes.
    pub fn destroy_with(self, on_release: &mut impl FnMut(Span)) -> usize {
        let Ast { typ, span, .. } = self;
        let released = match typ {
            AstT::Num(_) => 0,
            AstT::Unary(_, a) => (*a).destroy_with(on_release),
            AstT::Binary(_, a, b) => {
                (*a).destroy_with(on_release) + (*b).destroy_with(on_release)
            }
        };
        on_release(span);
        released + 1
    }
}

/// Release a tree, children before parents. A no-op on an absent tree.
pub fn destroy(ast: Option<Ast>) -> usize {
    match ast {
        Some(a) => a.destroy_with(&mut |_| ()),
        None => 0,
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.typ {
            AstT::Num(n) => write!(f, "{n}"),
            AstT::Unary(op, a) if op.is_postfix() => write!(f, "({a}{op})"),
            AstT::Unary(op, a) => write!(f, "({op}{a})"),
            AstT::Binary(op, a, b) => write!(f, "({a} {op} {b})"),
        }
    }
}
