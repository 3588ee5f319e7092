use super::print::{self, PrintOption};
use super::{Cell, Result, Stack};
use crate::error;
use crate::lang::{hash, Column};
use std::convert::TryFrom;

/// ## What a recognizer sees
///
/// A `Machine` lives for a single word. It lends out the data stack, the
/// output and the line being processed, which string words are decoded into.
/// String cells are byte offsets into this line.
pub struct Machine<'a> {
    stack: &'a mut Stack,
    out: &'a mut dyn std::fmt::Write,
    line: &'a mut [u8],
}

impl<'a> Machine<'a> {
    pub fn new(stack: &'a mut Stack, out: &'a mut dyn std::fmt::Write, line: &'a mut [u8]) -> Machine<'a> {
        Machine { stack, out, line }
    }

    pub fn stack(&mut self) -> &mut Stack {
        self.stack
    }

    pub fn push(&mut self, x: Cell) -> Result<()> {
        self.stack.push(x)
    }

    pub fn pop(&mut self) -> Result<Cell> {
        self.stack.pop()
    }

    pub fn tos(&mut self) -> Result<&mut Cell> {
        self.stack.tos()
    }

    pub fn nos(&mut self) -> Result<&mut Cell> {
        self.stack.nos()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn word(&self, word: &Column) -> &[u8] {
        &self.line[word.clone()]
    }

    pub fn word_mut(&mut self, word: &Column) -> &mut [u8] {
        &mut self.line[word.clone()]
    }

    pub fn hash(&self, word: &Column) -> u16 {
        hash(self.word(word))
    }

    /// The NUL terminated string at line offset `addr`.
    pub fn string(&self, addr: Cell) -> Result<&[u8]> {
        string_at(self.line, addr)
    }

    /// The counted string at line offset `addr`, as left by a `&` word.
    pub fn counted(&self, addr: Cell) -> Result<&[u8]> {
        let start = match usize::try_from(addr) {
            Ok(start) if start < self.line.len() => start,
            _ => return Err(error!(IndexOutOfRange)),
        };
        let end = start + 1 + self.line[start] as usize;
        if end > self.line.len() {
            return Err(error!(IndexOutOfRange));
        }
        Ok(&self.line[start + 1..end])
    }

    pub fn print(&mut self, opt: PrintOption, x: Cell) -> Result<()> {
        let string = if opt.is_string() {
            string_at(self.line, x)?
        } else {
            &[]
        };
        print::print(self.out, opt, x, string).map_err(|_| error!(NoCheese; "output failed"))
    }
}

fn string_at(line: &[u8], addr: Cell) -> Result<&[u8]> {
    let start = match usize::try_from(addr) {
        Ok(start) if start < line.len() => start,
        _ => return Err(error!(IndexOutOfRange)),
    };
    let tail = &line[start..];
    let len = tail.iter().position(|&c| c == 0).unwrap_or(tail.len());
    Ok(&tail[..len])
}
