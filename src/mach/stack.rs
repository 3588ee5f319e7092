use super::{Cell, Result, STACK_MAX};
use crate::error;
use crate::lang::Error;

/// ## Fixed capacity data stack
///
/// Grows down from the top of its storage. Nothing is ever overwritten or
/// wrapped: every violation is an error.
pub struct Stack {
    cells: [Cell; STACK_MAX],
    capacity: usize,
    sp: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &self.cells[self.sp..self.capacity])
    }
}

impl Stack {
    pub fn new(capacity: usize) -> Stack {
        let capacity = capacity.max(1).min(STACK_MAX);
        Stack {
            cells: [0; STACK_MAX],
            capacity,
            sp: capacity,
        }
    }
    fn overflow_error(&self) -> Error {
        error!(StackOverflow)
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn verify_can_pop(&self, n: usize) -> Result<()> {
        if self.len() < n {
            Err(self.underflow_error())
        } else {
            Ok(())
        }
    }
    pub fn verify_can_push(&self, n: usize) -> Result<()> {
        if self.sp < n {
            Err(self.overflow_error())
        } else {
            Ok(())
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.capacity - self.sp
    }
    pub fn is_empty(&self) -> bool {
        self.sp == self.capacity
    }
    pub fn is_full(&self) -> bool {
        self.sp == 0
    }
    pub fn clear(&mut self) {
        self.sp = self.capacity;
    }
    pub fn push(&mut self, val: Cell) -> Result<()> {
        self.verify_can_push(1)?;
        self.sp -= 1;
        self.cells[self.sp] = val;
        Ok(())
    }
    pub fn pop(&mut self) -> Result<Cell> {
        self.verify_can_pop(1)?;
        self.sp += 1;
        Ok(self.cells[self.sp - 1])
    }
    pub fn tos(&mut self) -> Result<&mut Cell> {
        self.verify_can_pop(1)?;
        Ok(&mut self.cells[self.sp])
    }
    pub fn nos(&mut self) -> Result<&mut Cell> {
        self.verify_can_pop(2)?;
        Ok(&mut self.cells[self.sp + 1])
    }
    /// Item `index` down from the top, 0 is the top.
    pub fn peek(&self, index: usize) -> Result<Cell> {
        if index >= self.capacity {
            Err(error!(IndexOutOfRange))
        } else if index >= self.len() {
            Err(self.underflow_error())
        } else {
            Ok(self.cells[self.sp + index])
        }
    }
    /// As `peek`, but any index outside the current depth is out of range.
    pub fn pick(&self, index: usize) -> Result<Cell> {
        if index >= self.len() {
            Err(error!(IndexOutOfRange))
        } else {
            Ok(self.cells[self.sp + index])
        }
    }
    /// Top first.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells[self.sp..self.capacity].iter()
    }
}
