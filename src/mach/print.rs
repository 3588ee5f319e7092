use super::{Cell, UCell};
use std::fmt::Write;

/// Print format in the low bits, with modifier flags in the top two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOption(pub u8);

impl PrintOption {
    pub const NEWLINE: PrintOption = PrintOption(0);
    pub const SIGNED: PrintOption = PrintOption(1);
    pub const UNSIGNED: PrintOption = PrintOption(2);
    pub const HEX: PrintOption = PrintOption(3);
    pub const HEX2: PrintOption = PrintOption(4);
    pub const STR: PrintOption = PrintOption(5);
    pub const STR_P: PrintOption = PrintOption(6);
    pub const CHAR: PrintOption = PrintOption(7);
    /// Do not print the leading `+` or `$`.
    pub const NO_LEAD: PrintOption = PrintOption(0x40);
    /// Do not print the trailing space.
    pub const NO_SEP: PrintOption = PrintOption(0x80);

    fn format(self) -> u8 {
        self.0 & !(Self::NO_LEAD.0 | Self::NO_SEP.0)
    }
    fn has(self, flag: PrintOption) -> bool {
        self.0 & flag.0 != 0
    }
    pub fn is_string(self) -> bool {
        let format = self.format();
        format == Self::STR.0 || format == Self::STR_P.0
    }
}

impl std::ops::BitOr for PrintOption {
    type Output = PrintOption;
    fn bitor(self, rhs: PrintOption) -> PrintOption {
        PrintOption(self.0 | rhs.0)
    }
}

/// Writes `x` formatted by `opt`. String formats print `string` instead of
/// `x`, resolved by the caller. Unknown formats print nothing.
///
/// Output is text, so string and char bytes above 0x7f are written as the
/// Latin-1 character of the same value, which takes two bytes of UTF-8.
pub fn print(out: &mut dyn Write, opt: PrintOption, x: Cell, string: &[u8]) -> std::fmt::Result {
    let lead = !opt.has(PrintOption::NO_LEAD);
    match opt.format() {
        0 => return out.write_char('\n'),
        1 => write!(out, "{}", x)?,
        2 => {
            if lead {
                out.write_char('+')?;
            }
            write!(out, "{}", x as UCell)?
        }
        3 => {
            if lead {
                out.write_char('$')?;
            }
            let width = std::mem::size_of::<UCell>() * 2;
            write!(out, "{:0w$X}", x as UCell, w = width)?
        }
        4 => {
            if lead {
                out.write_char('$')?;
            }
            write!(out, "{:02X}", x as UCell & 0xff)?
        }
        5 | 6 => {
            for &b in string {
                out.write_char(char::from(b))?;
            }
        }
        7 => out.write_char(char::from(x as u8))?,
        _ => return Ok(()),
    }
    if !opt.has(PrintOption::NO_SEP) {
        out.write_char(' ')?;
    }
    Ok(())
}
