/*!
In-place decoders for string words. Both write their result back into the
word they were given, reading ahead of where they write.
*/

use super::number::convert_hex_pair;
use std::convert::TryFrom;

/// Decodes a `"` prefixed word over itself, starting at the quote, and
/// terminates the result with a NUL. Returns the decoded length, or `None`
/// if the word is not a string.
///
/// Escapes are `\n`, `\r` and `\` followed by two hex digits. Any other
/// escaped byte is copied as is. A lone `\` at the end of the word is dropped.
pub fn unescape(word: &mut [u8]) -> Option<usize> {
    if word.first() != Some(&b'"') {
        return None;
    }
    let mut rp = 1;
    let mut wp = 0;
    while rp < word.len() {
        if word[rp] != b'\\' {
            word[wp] = word[rp];
        } else {
            rp += 1;
            match word.get(rp).copied() {
                None => break,
                Some(b'n') => word[wp] = b'\n',
                Some(b'r') => word[wp] = b'\r',
                Some(c) => {
                    let pair = word.get(rp + 1).and_then(|&lo| convert_hex_pair(c, lo));
                    match pair {
                        Some(byte) => {
                            word[wp] = byte;
                            rp += 1;
                        }
                        None => word[wp] = c,
                    }
                }
            }
        }
        wp += 1;
        rp += 1;
    }
    word[wp] = 0;
    Some(wp)
}

/// Decodes a `&` prefixed word of hex digit pairs into a counted string.
/// The count is written over the `&` and the bytes follow it. Returns the
/// count, or `None` without touching the word if it is not a valid, non
/// empty hex string.
pub fn decode_hex(word: &mut [u8]) -> Option<u8> {
    let (lead, digits) = word.split_first_mut()?;
    if *lead != b'&' || digits.is_empty() || digits.len() % 2 != 0 {
        return None;
    }
    let len = u8::try_from(digits.len() / 2).ok()?;
    if digits
        .chunks(2)
        .any(|pair| convert_hex_pair(pair[0], pair[1]).is_none())
    {
        return None;
    }
    for i in 0..len as usize {
        if let Some(byte) = convert_hex_pair(digits[2 * i], digits[2 * i + 1]) {
            digits[i] = byte;
        }
    }
    *lead = len;
    Some(len)
}
