use crate::Span;

/// Position inside the input, tracked both in bytes for slicing and in
/// characters for spans.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    byte: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            byte: 0,
            col: 0,
        }
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.byte..]
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.col += 1;
        Some(c)
    }

    pub fn next_if(&mut self, expected: char) -> Option<Span> {
        if self.peek() == Some(expected) {
            let start = self.col;
            self.next();
            return Some(Span::of(start, self.col));
        }
        None
    }

    /// Consume `symbol`, which the caller matched against [`Self::rest`].
    pub fn eat_str(&mut self, symbol: &str) -> Span {
        debug_assert!(self.rest().starts_with(symbol));
        let start = self.col;
        self.byte += symbol.len();
        self.col += symbol.chars().count();
        Span::of(start, self.col)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.next();
        }
    }

    /// Greedily consume a run of decimal digits.
    pub fn eat_num(&mut self) -> crate::Result<Option<(i64, Span)>> {
        let start = self.col;
        let mut val: Option<i64> = Some(0);
        let mut any = false;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            self.next();
            any = true;
            val = val
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(i64::from(d)));
        }

        if !any {
            return Ok(None);
        }

        let span = Span::of(start, self.col);
        match val {
            Some(v) => Ok(Some((v, span))),
            None => Err(crate::Error::LiteralOverflow(span)),
        }
    }
}
