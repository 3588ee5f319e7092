use super::{builtin, Cell, Machine, Result, UCell};
use crate::error;
use crate::lang::{convert, decode_hex, unescape, Column};

/// A set of commands offered every word that no earlier recognizer claimed.
/// Returns `Ok(true)` if the word was one of its commands.
pub trait Commands: Sync {
    fn execute(&self, machine: &mut Machine<'_>, word: &Column) -> Result<bool>;
}

/// ## Recognizer chain
///
/// Each word of a line is offered to the recognizers in order until one
/// claims it. Number and string recognizers must come before any that look
/// commands up by hash, since a number or string can hash to anything.
#[derive(Clone, Copy)]
pub enum Recognizer {
    /// `123`, `-123` signed, `+123` unsigned.
    Decimal,
    /// `$7fff`.
    Hex,
    /// `"text` pushes the offset of the decoded, NUL terminated text.
    String,
    /// `&1aff01` pushes the offset of a counted string.
    HexString,
    /// Printing and stack commands that are always wanted.
    Builtin,
    User(&'static dyn Commands),
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recognizer::Decimal => write!(f, "Decimal"),
            Recognizer::Hex => write!(f, "Hex"),
            Recognizer::String => write!(f, "String"),
            Recognizer::HexString => write!(f, "HexString"),
            Recognizer::Builtin => write!(f, "Builtin"),
            Recognizer::User(_) => write!(f, "User"),
        }
    }
}

impl Recognizer {
    pub fn recognize(&self, machine: &mut Machine<'_>, word: &Column) -> Result<bool> {
        match self {
            Recognizer::Decimal => decimal(machine, word),
            Recognizer::Hex => hex(machine, word),
            Recognizer::String => string(machine, word),
            Recognizer::HexString => hex_string(machine, word),
            Recognizer::Builtin => builtin::execute(machine, word),
            Recognizer::User(commands) => commands.execute(machine, word),
        }
    }
}

fn decimal(machine: &mut Machine<'_>, word: &Column) -> Result<bool> {
    let text = machine.word(word);
    let (sign, digits) = match text.first() {
        Some(&c) if c == b'-' || c == b'+' => (c, &text[1..]),
        _ => (b' ', text),
    };
    let result = match convert(10, digits)? {
        Some(result) => result,
        None => return Ok(false),
    };
    let value = match sign {
        b'+' => result as Cell,
        b'-' => {
            if result > Cell::MIN as UCell {
                return Err(error!(NumberOverflow));
            }
            (result as Cell).wrapping_neg()
        }
        _ => {
            if result > Cell::MAX as UCell {
                return Err(error!(NumberOverflow));
            }
            result as Cell
        }
    };
    machine.push(value)?;
    Ok(true)
}

fn hex(machine: &mut Machine<'_>, word: &Column) -> Result<bool> {
    let text = machine.word(word);
    if text.first() != Some(&b'$') {
        return Ok(false);
    }
    match convert(16, &text[1..])? {
        Some(result) => {
            machine.push(result as Cell)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn string(machine: &mut Machine<'_>, word: &Column) -> Result<bool> {
    if unescape(machine.word_mut(word)).is_none() {
        return Ok(false);
    }
    machine.push(word.start as Cell)?;
    Ok(true)
}

fn hex_string(machine: &mut Machine<'_>, word: &Column) -> Result<bool> {
    if decode_hex(machine.word_mut(word)).is_none() {
        return Ok(false);
    }
    machine.push(word.start as Cell)?;
    Ok(true)
}
