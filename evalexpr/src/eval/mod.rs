use tracing::trace;

use crate::{Ast, AstT, BinaryOp, Span, UnaryOp};

#[cfg(test)]
mod test;

impl Ast {
    /// Evaluate the tree with checked 64 bit integer arithmetic.
    pub fn eval(&self) -> crate::Result<i64> {
        let s = self.span;
        match &self.typ {
            AstT::Num(n) => Ok(*n),
            AstT::Unary(op, a) => {
                let n = a.eval()?;
                match op {
                    UnaryOp::Identity => Ok(n),
                    UnaryOp::Negate => n.checked_neg().ok_or(overflow(s)),
                    UnaryOp::Factorial => factorial(n, s),
                }
            }
            AstT::Binary(op, a, b) => {
                let n1 = a.eval()?;
                let n2 = b.eval()?;
                match op {
                    BinaryOp::Add => n1.checked_add(n2).ok_or(overflow(s)),
                    BinaryOp::Sub => n1.checked_sub(n2).ok_or(overflow(s)),
                    BinaryOp::Mul => n1.checked_mul(n2).ok_or(overflow(s)),
                    BinaryOp::Div => {
                        if n2 == 0 {
                            trace!(?s, "division by zero");
                            return Err(crate::Error::DivideByZero(a.span, b.span));
                        }
                        n1.checked_div(n2).ok_or(overflow(s))
                    }
                    BinaryOp::Pow => {
                        if n2 < 0 {
                            trace!(?s, exp = n2, "negative exponent");
                            return Err(crate::Error::NegativeExponent(b.span));
                        }
                        pow(n1, n2).ok_or(overflow(s))
                    }
                }
            }
        }
    }
}

fn overflow(span: Span) -> crate::Error {
    crate::Error::Overflow(span)
}

/// Exponentiation by repeated squaring, `exp` must not be negative.
fn pow(base: i64, exp: i64) -> Option<i64> {
    if exp == 0 {
        return Some(1);
    }

    // only square when the square is used, it may overflow otherwise
    let half = match exp / 2 {
        0 => 1,
        e => pow(base.checked_mul(base)?, e)?,
    };
    if exp % 2 == 1 {
        half.checked_mul(base)
    } else {
        Some(half)
    }
}

fn factorial(n: i64, span: Span) -> crate::Result<i64> {
    if n < 0 {
        trace!(?span, n, "negative factorial");
        return Err(crate::Error::NegativeFactorial(span));
    }

    let mut f: i64 = 1;
    for i in 2..=n {
        f = f.checked_mul(i).ok_or(overflow(span))?;
    }
    Ok(f)
}
