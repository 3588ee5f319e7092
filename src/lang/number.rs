use super::Error;
use crate::mach::UCell;

/// Value of a single digit in `[0-9a-zA-Z]`, up to 35.
pub fn convert_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        b'A'..=b'Z' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Two hex digits to a byte.
pub fn convert_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = convert_digit(hi).filter(|d| *d < 16)?;
    let lo = convert_digit(lo).filter(|d| *d < 16)?;
    Some(hi << 4 | lo)
}

/// ## Unsigned conversion in any base up to 36
///
/// `Ok(None)` when the word is empty or holds a digit that is not valid in
/// `base`. An accumulator that no longer fits a cell is `NumberOverflow`,
/// raised as soon as the offending digit is seen.
pub fn convert(base: u8, word: &[u8]) -> Result<Option<UCell>, Error> {
    debug_assert!(base >= 2 && base <= 36);
    if word.is_empty() {
        return Ok(None);
    }
    let mut number: UCell = 0;
    for &c in word {
        let digit = match convert_digit(c) {
            Some(digit) if digit < base => digit,
            _ => return Ok(None),
        };
        number = match number
            .checked_mul(UCell::from(base))
            .and_then(|n| n.checked_add(UCell::from(digit)))
        {
            Some(n) => n,
            None => return Err(error!(NumberOverflow)),
        };
    }
    Ok(Some(number))
}
