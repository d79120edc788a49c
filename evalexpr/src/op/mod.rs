use crate::{BinaryOp, UnaryOp};


/// Precedence passed to the outermost climb, lower than any operator.
pub const MIN_PREC: i32 = 0;
pub const MAX_PREC: i32 = i32::MAX;

static OPERATORS: [OpDesc; 8] = [
    OpDesc::new("+", OpKind::Infix(BinaryOp::Add), 1, Assoc::Left),
    OpDesc::new("-", OpKind::Infix(BinaryOp::Sub), 1, Assoc::Left),
    OpDesc::new("*", OpKind::Infix(BinaryOp::Mul), 2, Assoc::Left),
    OpDesc::new("/", OpKind::Infix(BinaryOp::Div), 2, Assoc::Left),
    OpDesc::new("+", OpKind::Prefix(UnaryOp::Identity), 3, Assoc::Left),
    OpDesc::new("-", OpKind::Prefix(UnaryOp::Negate), 3, Assoc::Left),
    OpDesc::new("^", OpKind::Infix(BinaryOp::Pow), 4, Assoc::Right),
    OpDesc::new("!", OpKind::Postfix(UnaryOp::Factorial), 5, Assoc::None),
];

/// The arithmetic operators, initialized at compile time and never mutated.
pub static DEFAULT_TABLE: OpTable<'static> = OpTable::new(&OPERATORS);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
    None,
}

/// The semantic kind of an operator, which also fixes where it is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Prefix(UnaryOp),
    Infix(BinaryOp),
    Postfix(UnaryOp),
}

impl OpKind {
    pub const fn fixity(&self) -> Fixity {
        match self {
            Self::Prefix(_) => Fixity::Prefix,
            Self::Infix(_) => Fixity::Infix,
            Self::Postfix(_) => Fixity::Postfix,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpDesc {
    pub symbol: &'static str,
    pub kind: OpKind,
    /// Higher binds tighter.
    pub prec: i32,
    pub assoc: Assoc,
}

impl OpDesc {
    pub const fn new(symbol: &'static str, kind: OpKind, prec: i32, assoc: Assoc) -> Self {
        Self {
            symbol,
            kind,
            prec,
            assoc,
        }
    }

    pub const fn fixity(&self) -> Fixity {
        self.kind.fixity()
    }

    /// Minimum precedence for the right operand of an infix operator.
    ///
    /// A right associative operator lets operators of its own precedence
    /// into its right operand, a left associative one doesn't.
    pub const fn right_bp(&self) -> i32 {
        match self.assoc {
            Assoc::Right => self.prec,
            Assoc::Left | Assoc::None => self.prec + 1,
        }
    }

    /// Highest precedence the next operator at the same level may have after
    /// this one was absorbed. Also the minimum precedence of a prefix
    /// operator's operand.
    pub const fn next_min_prec(&self) -> i32 {
        match self.assoc {
            Assoc::Left => self.prec,
            Assoc::Right | Assoc::None => self.prec - 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OpTable<'a> {
    ops: &'a [OpDesc],
}

impl<'a> OpTable<'a> {
    pub const fn new(ops: &'a [OpDesc]) -> Self {
        Self { ops }
    }

    pub const fn ops(&self) -> &'a [OpDesc] {
        self.ops
    }

    /// The operator of the given fixity with the longest symbol that `text`
    /// starts with. On equal length the earlier entry wins.
    pub fn longest_prefix_match(&self, text: &str, fixity: Fixity) -> Option<&'a OpDesc> {
        self.longest_match(text, |f| f == fixity)
    }

    /// Like [`Self::longest_prefix_match`] across infix and postfix
    /// operators, which are the ones that may follow a complete operand.
    pub fn longest_trailing_match(&self, text: &str) -> Option<&'a OpDesc> {
        self.longest_match(text, |f| f != Fixity::Prefix)
    }

    /// Like [`Self::longest_prefix_match`] across all fixities.
    pub fn longest_any_match(&self, text: &str) -> Option<&'a OpDesc> {
        self.longest_match(text, |_| true)
    }

    fn longest_match(&self, text: &str, accept: impl Fn(Fixity) -> bool) -> Option<&'a OpDesc> {
        let mut best: Option<&'a OpDesc> = None;
        for op in self.ops.iter().filter(|o| accept(o.fixity())) {
            if op.symbol.is_empty() || !text.starts_with(op.symbol) {
                continue;
            }
            if best.map_or(true, |b| op.symbol.len() > b.symbol.len()) {
                best = Some(op);
            }
        }
        best
    }
}
