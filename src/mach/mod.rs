/*!
## Rust Machine Module

This Rust module is the console interpreter: the data stack, the chain of
recognizers each word is offered to, the builtin commands and the line
accept state machine.

*/

#[cfg(feature = "cell64")]
mod width {
    pub type Cell = i64;
    pub type UCell = u64;
}

#[cfg(all(feature = "cell32", not(feature = "cell64")))]
mod width {
    pub type Cell = i32;
    pub type UCell = u32;
}

#[cfg(not(any(feature = "cell32", feature = "cell64")))]
mod width {
    pub type Cell = i16;
    pub type UCell = u16;
}

/// The only value type. Strings are cells holding a byte offset into the line.
pub type Cell = width::Cell;
pub type UCell = width::UCell;

const _: () = assert!(std::mem::size_of::<Cell>() == std::mem::size_of::<UCell>());

pub type Result<T> = std::result::Result<T, crate::lang::Error>;

mod accept;
mod builtin;
mod config;
mod console;
mod example;
mod machine;
mod print;
mod recognize;
mod stack;

pub use accept::Accept;
pub use accept::Accepted;
pub use config::Config;
pub use config::{INPUT_MAX, STACK_MAX};
pub use console::Console;
pub use example::Example;
pub use machine::Machine;
pub use print::PrintOption;
pub use recognize::Commands;
pub use recognize::Recognizer;
pub use stack::Stack;

#[cfg(test)]
mod tests;
