use crate::lang::{hash, Column, Status};
use crate::mach::{Cell, Commands, Config, Console, Machine, Recognizer, Result};


fn console(recognizers: &'static [Recognizer]) -> Console<String> {
    Console::new(Config::default().stack_size(4), recognizers, String::new())
}

fn run(console: &mut Console<String>, line: &str) -> (String, Status) {
    let mut line = line.as_bytes().to_vec();
    let status = match console.process(&mut line) {
        Ok(()) => 0,
        Err(error) => error.code(),
    };
    (std::mem::take(console.output_mut()), status)
}

fn stack(console: &Console<String>) -> Vec<Cell> {
    console.stack().iter().copied().collect()
}

/// `LEN` ( s -- u ) length of a counted string.
/// `SUM` ( s -- u ) sum of the bytes of a counted string.
struct Counted;

const LEN: u16 = hash(b"LEN");
const SUM: u16 = hash(b"SUM");

impl Commands for Counted {
    fn execute(&self, m: &mut Machine<'_>, word: &Column) -> Result<bool> {
        match m.hash(word) {
            LEN => {
                let addr = *m.tos()?;
                let len = m.counted(addr)?.len();
                *m.tos()? = len as Cell;
            }
            SUM => {
                let addr = *m.tos()?;
                let sum: Cell = m.counted(addr)?.iter().map(|&b| b as Cell).sum();
                *m.tos()? = sum;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
