use super::{Config, Result, INPUT_MAX};
use crate::error;
use crate::lang::{ErrorCode, Status};

/// What `Accept::accept` did with a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// Still reading the line.
    Pending,
    /// A newline ended the line, it is in `line()`.
    Done,
    /// The cancel character discarded the line.
    Cancelled,
}

impl Accepted {
    pub fn code(&self) -> Status {
        match self {
            Accepted::Pending => ErrorCode::AcceptPending as Status,
            Accepted::Done => 0,
            Accepted::Cancelled => ErrorCode::AcceptCancelled as Status,
        }
    }
}

/// ## Line accept state machine
///
/// Collects printable characters one at a time until the newline character.
/// Characters that do not fit are dropped and the line is flagged as
/// overflowed; the newline (or cancel) then reports `AcceptBufferOverflow`.
/// Other non-printable characters are ignored.
pub struct Accept {
    buf: [u8; INPUT_MAX + 1],
    capacity: usize,
    index: usize,
    len: usize,
    overflow: bool,
    newline: u8,
    cancel: Option<u8>,
}

impl std::fmt::Debug for Accept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Accept {{ {:?} }}", String::from_utf8_lossy(&self.buf[..self.index]))
    }
}

impl Default for Accept {
    fn default() -> Self {
        Accept::new(Config::default())
    }
}

impl Accept {
    pub fn new(config: Config) -> Accept {
        Accept {
            buf: [0; INPUT_MAX + 1],
            capacity: config.get_input_buffer_size(),
            index: 0,
            len: 0,
            overflow: false,
            newline: config.get_newline(),
            cancel: config.get_cancel(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget any partial line.
    pub fn clear(&mut self) {
        self.index = 0;
        self.overflow = false;
    }

    fn finish(&mut self) -> Result<()> {
        let overflow = self.overflow;
        self.clear();
        if overflow {
            Err(error!(AcceptBufferOverflow))
        } else {
            Ok(())
        }
    }

    pub fn accept(&mut self, c: u8) -> Result<Accepted> {
        if c == self.newline {
            self.buf[self.index] = 0;
            self.len = self.index;
            self.finish()?;
            Ok(Accepted::Done)
        } else if Some(c) == self.cancel {
            self.len = 0;
            self.buf[0] = 0;
            self.finish()?;
            Ok(Accepted::Cancelled)
        } else {
            if (b' '..0x7f).contains(&c) {
                if self.index < self.capacity {
                    self.buf[self.index] = c;
                    self.index += 1;
                } else {
                    self.overflow = true;
                }
            }
            Ok(Accepted::Pending)
        }
    }

    /// The last completed line, without its terminator. Only meaningful
    /// after `accept` has returned `Done` or an overflow, and until the
    /// next character is accepted.
    pub fn line(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn line_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Accepted::Pending.code(), -2);
        assert_eq!(Accepted::Done.code(), 0);
        assert_eq!(Accepted::Cancelled.code(), -3);
    }

    #[test]
    fn test_line_is_terminated_in_buffer() {
        let mut a = Accept::new(Config::default().newline(b'\n'));
        for &c in b"ab" {
            assert_eq!(a.accept(c), Ok(Accepted::Pending));
        }
        assert_eq!(a.accept(b'\n'), Ok(Accepted::Done));
        assert_eq!(a.buf[2], 0);
        assert_eq!(a.line(), b"ab");
    }
}
