/// A range of character columns inside the input line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// inclusive
    pub start: usize,
    /// exclusive
    pub end: usize,
}

impl Span {
    pub const fn of(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn pos(col: usize) -> Self {
        Self::of(col, col + 1)
    }

    pub const fn across(a: Self, b: Self) -> Self {
        Self::of(a.start, b.end)
    }

    /// The gap between `a` and `b`, at least one column wide.
    pub fn between(a: Self, b: Self) -> Self {
        Self::of(a.end, usize::max(a.end + 1, b.start))
    }

    pub(crate) const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
