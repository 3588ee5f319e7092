use super::Column;

pub fn is_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// The end of a line is the end of the buffer or the first NUL.
fn is_end(line: &[u8], pos: usize) -> bool {
    pos >= line.len() || line[pos] == 0
}

/// ## Whitespace delimited words
///
/// Splits a line in place. The delimiter following each word is overwritten
/// with a NUL so that the word is terminated inside the line buffer itself.
/// A line is never read past its first NUL.
#[derive(Debug, Default)]
pub struct Words {
    pos: usize,
}

impl Words {
    pub fn new() -> Words {
        Words { pos: 0 }
    }

    pub fn next_word(&mut self, line: &mut [u8]) -> Option<Column> {
        while !is_end(line, self.pos) && is_whitespace(line[self.pos]) {
            self.pos += 1;
        }
        if is_end(line, self.pos) {
            return None;
        }
        let start = self.pos;
        while !is_end(line, self.pos) && !is_whitespace(line[self.pos]) {
            self.pos += 1;
        }
        let word = start..self.pos;
        if !is_end(line, self.pos) {
            line[self.pos] = 0;
            self.pos += 1;
        }
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> (Vec<String>, Vec<u8>) {
        let mut line = s.as_bytes().to_vec();
        let mut words = Words::new();
        let mut v = vec![];
        while let Some(col) = words.next_word(&mut line) {
            v.push(String::from_utf8_lossy(&line[col]).to_string());
        }
        (v, line)
    }

    #[test]
    fn test_empty_lines() {
        assert!(words("").0.is_empty());
        assert!(words(" \t ").0.is_empty());
    }

    #[test]
    fn test_split() {
        assert_eq!(words("  1 2\tDROP ").0, vec!["1", "2", "DROP"]);
    }

    #[test]
    fn test_terminators_written() {
        let (_, line) = words("ab cd ef");
        assert_eq!(line, b"ab\0cd\0ef");
    }

    #[test]
    fn test_stops_at_nul() {
        assert_eq!(words("ab\0cd").0, vec!["ab"]);
    }
}
