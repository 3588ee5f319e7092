use super::{Cell, Commands, Machine, PrintOption, Result, UCell};
use crate::error;
use crate::lang::{hash, Column, Error};
use std::convert::TryFrom;

const ADD: u16 = hash(b"+");
const SUB: u16 = hash(b"-");
const MUL: u16 = hash(b"*");
const DIV: u16 = hash(b"/");
const U_DIV: u16 = hash(b"U/");
const RSHIFT: u16 = hash(b"RSHIFT");
const NEGATE: u16 = hash(b"NEGATE");
const COMMENT: u16 = hash(b"#");
const RAISE: u16 = hash(b"RAISE");
const EXIT: u16 = hash(b"EXIT");
const PICK: u16 = hash(b"PICK");
const OVER: u16 = hash(b"OVER");
const PRINT: u16 = hash(b"PRINT");

/// ## Example commands
///
/// Arithmetic, comments and a few stack words, enough to try the console
/// out. Arithmetic wraps.
///
/// | Word     | Stack             | Action                            |
/// |----------|-------------------|-----------------------------------|
/// | `+`      | x1 x2 -- x3       | x3 = x1 + x2                      |
/// | `-`      | x1 x2 -- x3       | x3 = x1 - x2                      |
/// | `*`      | d1 d2 -- d3       | d3 = d1 * d2                      |
/// | `/`      | d1 d2 -- d3       | signed divide                     |
/// | `U/`     | u1 u2 -- u3       | unsigned divide                   |
/// | `RSHIFT` | u1 n -- u2        | logical shift right               |
/// | `NEGATE` | d1 -- d2          | d2 = -d1                          |
/// | `#`      | --                | ignore the rest of the line       |
/// | `RAISE`  | i --              | raise `i` as a status code        |
/// | `EXIT`   | --                | raise `ErrorCode::User`           |
/// | `PICK`   | u -- x            | copy the item `u` below `u`       |
/// | `OVER`   | x1 x2 -- x1 x2 x1 | copy the second item              |
/// | `PRINT`  | x opt --          | print `x` with print option `opt` |
#[derive(Debug, Default, Clone, Copy)]
pub struct Example;

fn binop(m: &mut Machine<'_>, op: fn(Cell, Cell) -> Cell) -> Result<()> {
    let rhs = m.pop()?;
    let tos = m.tos()?;
    *tos = op(*tos, rhs);
    Ok(())
}

fn u_binop(m: &mut Machine<'_>, op: fn(UCell, UCell) -> Result<UCell>) -> Result<()> {
    let rhs = m.pop()? as UCell;
    let tos = m.tos()?;
    *tos = op(*tos as UCell, rhs)? as Cell;
    Ok(())
}

impl Commands for Example {
    fn execute(&self, m: &mut Machine<'_>, word: &Column) -> Result<bool> {
        match m.hash(word) {
            ADD => binop(m, Cell::wrapping_add)?,
            SUB => binop(m, Cell::wrapping_sub)?,
            MUL => binop(m, Cell::wrapping_mul)?,
            DIV => {
                let rhs = m.pop()?;
                if rhs == 0 {
                    return Err(error!(DivideByZero));
                }
                let tos = m.tos()?;
                *tos = tos.wrapping_div(rhs);
            }
            U_DIV => u_binop(m, |lhs, rhs| {
                lhs.checked_div(rhs).ok_or_else(|| error!(DivideByZero))
            })?,
            RSHIFT => u_binop(m, |lhs, rhs| {
                Ok(u32::try_from(rhs)
                    .ok()
                    .and_then(|n| lhs.checked_shr(n))
                    .unwrap_or(0))
            })?,
            NEGATE => {
                let tos = m.tos()?;
                *tos = tos.wrapping_neg();
            }
            COMMENT => return Err(error!(IgnoreToEol)),
            RAISE => {
                let code = m.pop()?;
                return Err(Error::from_code(code as i8));
            }
            EXIT => return Err(error!(User)),
            PICK => {
                let index = usize::try_from(*m.tos()?)
                    .map_err(|_| error!(IndexOutOfRange))?
                    .saturating_add(1);
                let x = m.stack().pick(index)?;
                *m.tos()? = x;
            }
            OVER => {
                let x = *m.nos()?;
                m.push(x)?;
            }
            PRINT => {
                let opt = m.pop()? as u8;
                let x = m.pop()?;
                m.print(PrintOption(opt), x)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
