use std::fmt;

pub const ANSI_ESC: &str = "\x1B[0m";

#[macro_export]
macro_rules! bprint {
    ($col:ty, $pat:expr $(,$args:expr),*) => {{
        print!("{}", <$col as $crate::Color>::bold());
        print!($pat, $($args,)*);
        print!("{}", $crate::ANSI_ESC);
    }}
}

pub trait Color: Sized {
    fn color_code() -> u8;

    fn bold() -> WriteAnsi {
        WriteAnsi {
            bold: true,
            color: Self::color_code(),
        }
    }
}

pub struct WriteAnsi {
    bold: bool,
    color: u8,
}

impl fmt::Display for WriteAnsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1B[")?;
        if self.bold {
            f.write_str("1;")?;
        }
        write!(f, "{}", self.color)?;
        f.write_str("m")?;
        Ok(())
    }
}

pub struct LRed;
impl Color for LRed {
    fn color_code() -> u8 {
        91
    }
}

pub struct LBlue;
impl Color for LBlue {
    fn color_code() -> u8 {
        94
    }
}
