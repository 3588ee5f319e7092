const HASH_START: u16 = 5381;
const HASH_MULT: u16 = 33;

/// ## Command name hash
///
/// Command names are looked up by a 16 bit fingerprint rather than by name.
/// Lower case letters hash as upper case. Every byte is hashed, including
/// non-printable ones. Bytes above 0x7f are sign extended, as a signed `char`
/// would be, so the values match tables built for C targets.
pub const fn hash(word: &[u8]) -> u16 {
    let mut h = HASH_START;
    let mut i = 0;
    while i < word.len() {
        let mut c = word[i];
        if c >= b'a' && c <= b'z' {
            c -= b'a' - b'A';
        }
        h = h.wrapping_mul(HASH_MULT) ^ (c as i8 as i16 as u16);
        i += 1;
    }
    h
}
