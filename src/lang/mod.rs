/*!
# Rust Language Module

This Rust module holds the text level pieces of the console language:
status codes, the command name hash, number conversion, splitting a line
into words and decoding string words in place.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod hash;
mod number;
mod string;
mod token;

pub use error::describe;
pub use error::Error;
pub use error::ErrorCode;
pub use error::Status;
pub use hash::hash;
pub use number::{convert, convert_digit};
pub use string::{decode_hex, unescape};
pub use token::{is_whitespace, Words};
