use super::{Cell, Machine, PrintOption, Result};
use crate::lang::{hash, Column};

/// `.` ( d -- ) Pop and print as signed decimal.
const DOT: u16 = hash(b".");
/// `U.` ( u -- ) Pop and print as unsigned decimal with a leading `+`.
const U_DOT: u16 = hash(b"U.");
/// `$.` ( u -- ) Pop and print as hex with a leading `$`.
const HEX_DOT: u16 = hash(b"$.");
/// `."` ( s -- ) Pop and print a string.
const STRING_DOT: u16 = hash(b".\"");
/// `DEPTH` ( -- u ) Push the stack depth.
const DEPTH: u16 = hash(b"DEPTH");
/// `CLEAR` ( ... -- ) Empty the stack.
const CLEAR: u16 = hash(b"CLEAR");
/// `DROP` ( x -- ) Remove the top item.
const DROP: u16 = hash(b"DROP");
/// `HASH` ( s -- u ) Replace a string with its hash.
const HASH: u16 = hash(b"HASH");

pub fn execute(m: &mut Machine<'_>, word: &Column) -> Result<bool> {
    match m.hash(word) {
        DOT => {
            let x = m.pop()?;
            m.print(PrintOption::SIGNED, x)?;
        }
        U_DOT => {
            let x = m.pop()?;
            m.print(PrintOption::UNSIGNED, x)?;
        }
        HEX_DOT => {
            let x = m.pop()?;
            m.print(PrintOption::HEX, x)?;
        }
        STRING_DOT => {
            let x = m.pop()?;
            m.print(PrintOption::STR, x)?;
        }
        DEPTH => {
            let depth = m.depth() as Cell;
            m.push(depth)?;
        }
        CLEAR => m.stack().clear(),
        DROP => {
            m.pop()?;
        }
        HASH => {
            let addr = *m.tos()?;
            let h = hash(m.string(addr)?);
            *m.tos()? = h as Cell;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
