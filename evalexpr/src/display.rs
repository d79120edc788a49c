use std::cmp::min;
use std::fmt;
use std::fmt::Write;
use std::marker::PhantomData;

use unicode_width::UnicodeWidthChar;

use crate::{Color, LBlue, Span, ANSI_ESC};

/// Something that is reported to the user by marking parts of the input.
pub trait UserFacing<C: Color>: Sized + fmt::Debug {
    fn description(&self) -> String;
    fn spans(&self) -> Vec<Span>;

    fn display<'a>(&'a self, input: &'a str) -> DisplayUserFacing<'a, Self, C> {
        DisplayUserFacing {
            input,
            error: self,
            c: PhantomData::<C>,
        }
    }
}

pub struct DisplayUserFacing<'a, U: UserFacing<C>, C: Color> {
    input: &'a str,
    error: &'a U,
    c: PhantomData<C>,
}

impl<U: UserFacing<C>, C: Color> fmt::Display for DisplayUserFacing<'_, U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut spans = self.error.spans();
        spans.sort_by_key(|s| s.start);
        let lines = span_lines(self.input);

        for (nr, (ls, l)) in lines.iter().enumerate() {
            let intersecting: Vec<_> = spans
                .iter()
                .filter(|s| s.intersects(ls))
                .map(|s| {
                    let ms = s.start.saturating_sub(ls.start);
                    let me = min(s.end.saturating_sub(ls.start), ls.len());
                    Span::of(ms, me)
                })
                .collect();

            if !intersecting.is_empty() {
                mark_spans::<C>(f, nr + 1, l, &intersecting)?;
            }
        }

        write!(
            f,
            "   {blue}│{esc} {col}{desc}{esc}",
            desc = self.error.description(),
            col = C::bold(),
            blue = LBlue::bold(),
            esc = ANSI_ESC,
        )?;
        Ok(())
    }
}

fn mark_spans<C: Color>(
    f: &mut fmt::Formatter<'_>,
    line_nr: usize,
    line: &str,
    spans: &[Span],
) -> fmt::Result {
    write!(
        f,
        "{blue}{nr:02} │{esc} {ln}\n   {blue}│{esc} ",
        nr = line_nr,
        ln = line,
        blue = LBlue::bold(),
        esc = ANSI_ESC,
    )?;

    let mut chars = line.chars();
    let mut pos = 0;

    for s in spans {
        // columns past the line end are rendered one cell wide
        let mut offset = 0;
        while pos < s.start {
            offset += chars.next().map_or(1, |c| c.width().unwrap_or(0));
            pos += 1;
        }

        let mut width = 0;
        while pos < s.end {
            width += chars.next().map_or(1, |c| c.width().unwrap_or(0));
            pos += 1;
        }
        if width == 0 {
            width = 1;
        }

        for _ in 0..offset {
            f.write_char(' ')?;
        }
        write!(f, "{}", C::bold())?;
        for _ in 0..width {
            f.write_char('^')?;
        }
        f.write_str(ANSI_ESC)?;
    }

    f.write_char('\n')?;

    Ok(())
}

/// Split the input into lines, each paired with the columns it covers
/// including its terminator. A trailing `\r` is not part of the line text.
fn span_lines(input: &str) -> Vec<(Span, &str)> {
    let mut start = 0;
    input
        .split('\n')
        .map(|l| {
            let cols = l.chars().count() + 1;
            let span = Span::of(start, start + cols);
            start += cols;
            (span, l.strip_suffix('\r').unwrap_or(l))
        })
        .collect()
}
