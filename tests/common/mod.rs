#![allow(dead_code)]
use fconsole::lang::Status;
use fconsole::mach::{Accept, Accepted, Cell, Config, Console};

pub fn config() -> Config {
    Config::default()
        .stack_size(4)
        .input_buffer_size(64)
        .newline(b'\n')
}

pub fn console() -> Console<String> {
    Console::new(config(), fconsole::DEFAULT_RECOGNIZERS, String::new())
}

/// Processes `line` and returns what was printed with the status.
pub fn exec(console: &mut Console<String>, line: &str) -> (String, Status) {
    let mut line = line.as_bytes().to_vec();
    let status = match console.process(&mut line) {
        Ok(()) => 0,
        Err(error) => error.code(),
    };
    (std::mem::take(console.output_mut()), status)
}

/// As `exec` but only the status.
pub fn status(console: &mut Console<String>, line: &str) -> Status {
    exec(console, line).1
}

/// Top first.
pub fn stack(console: &Console<String>) -> Vec<Cell> {
    console.stack().iter().copied().collect()
}

/// Feeds every byte and returns the status of the last one.
pub fn feed(accept: &mut Accept, input: &[u8]) -> Status {
    let mut status = Accepted::Pending.code();
    for &c in input {
        status = match accept.accept(c) {
            Ok(accepted) => accepted.code(),
            Err(error) => error.code(),
        };
    }
    status
}
