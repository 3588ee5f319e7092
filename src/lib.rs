//! # FConsole
//!
//! A tiny FORTH-like command console for the serial port of a small device.
//!
//! A line is split into whitespace separated words. Each word is offered to
//! a chain of recognizers: numbers and strings push a cell onto the data
//! stack, command words run against it. Nothing is allocated once a
//! `Console` exists and the core only needs a `fmt::Write` to print to.
//!
//! ```
//! use fconsole::mach::Console;
//!
//! let mut console = Console::<String>::default();
//! let mut line = *b"1 2 + .";
//! console.process(&mut line).unwrap();
//! assert_eq!(console.output(), "3 ");
//! ```
//!
//! Running the executable gives an interactive console on the terminal.
//! ```text
//! > 1 2 + .
//! 3
//! > █
//! ```

pub mod lang;
pub mod mach;
pub mod term;

use mach::{Example, Recognizer};

/// Numbers, strings, the builtin commands and then the `Example` commands.
pub const DEFAULT_RECOGNIZERS: &[Recognizer] = &[
    Recognizer::Decimal,
    Recognizer::Hex,
    Recognizer::String,
    Recognizer::HexString,
    Recognizer::Builtin,
    Recognizer::User(&Example),
];
