use crate::{LRed, Span, UserFacing};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Missing an operand")]
    MissingOperand(Span),
    #[error("Missing an operator")]
    MissingOperator(Span),
    /// Span of the opening parenthesis.
    #[error("Missing a closing parenthesis")]
    MissingClosingParenthesis(Span),
    #[error("Found an unexpected parenthesis")]
    UnexpectedParenthesis(Span),
    #[error("Found an unexpected operator")]
    UnexpectedOperator(Span),
    #[error("Found an invalid character `{0}`")]
    InvalidCharacter(char, Span),
    #[error("Integer literal does not fit into 64 bits")]
    LiteralOverflow(Span),
    #[error("Expression is nested too deeply")]
    NestingTooDeep(Span),
    #[error("Attempted to divide by 0")]
    DivideByZero(Span, Span),
    #[error("Integer overflow")]
    Overflow(Span),
    #[error("Attempted to calculate the factorial of a negative number")]
    NegativeFactorial(Span),
    #[error("Attempted to raise a number to a negative power")]
    NegativeExponent(Span),
}

impl Error {
    /// Whether the input could not be parsed, as opposed to an arithmetic
    /// fault during evaluation of a well formed expression.
    pub const fn is_parse_failure(&self) -> bool {
        match self {
            Self::MissingOperand(_)
            | Self::MissingOperator(_)
            | Self::MissingClosingParenthesis(_)
            | Self::UnexpectedParenthesis(_)
            | Self::UnexpectedOperator(_)
            | Self::InvalidCharacter(..)
            | Self::LiteralOverflow(_)
            | Self::NestingTooDeep(_) => true,
            Self::DivideByZero(..)
            | Self::Overflow(_)
            | Self::NegativeFactorial(_)
            | Self::NegativeExponent(_) => false,
        }
    }
}

impl UserFacing<LRed> for Error {
    fn description(&self) -> String {
        self.to_string()
    }

    fn spans(&self) -> Vec<Span> {
        match self {
            Self::MissingOperand(s) => vec![*s],
            Self::MissingOperator(s) => vec![*s],
            Self::MissingClosingParenthesis(s) => vec![*s],
            Self::UnexpectedParenthesis(s) => vec![*s],
            Self::UnexpectedOperator(s) => vec![*s],
            Self::InvalidCharacter(_, s) => vec![*s],
            Self::LiteralOverflow(s) => vec![*s],
            Self::NestingTooDeep(s) => vec![*s],
            Self::DivideByZero(a, b) => vec![*a, *b],
            Self::Overflow(s) => vec![*s],
            Self::NegativeFactorial(s) => vec![*s],
            Self::NegativeExponent(s) => vec![*s],
        }
    }
}
