/// Largest data stack, in cells.
pub const STACK_MAX: usize = 32;

/// Largest input line, in bytes, not counting the terminator.
pub const INPUT_MAX: usize = 255;

/// ## Console configuration
///
/// Storage is always sized for the maximums above; the configuration only
/// limits how much of it is used. Out of range sizes are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    stack_size: usize,
    input_buffer_size: usize,
    newline: u8,
    cancel: Option<u8>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            stack_size: 8,
            input_buffer_size: 40,
            newline: b'\r',
            cancel: Some(0x18),
        }
    }
}

impl Config {
    pub fn stack_size(self, stack_size: usize) -> Config {
        Config {
            stack_size: stack_size.max(1).min(STACK_MAX),
            ..self
        }
    }

    pub fn input_buffer_size(self, input_buffer_size: usize) -> Config {
        Config {
            input_buffer_size: input_buffer_size.max(1).min(INPUT_MAX),
            ..self
        }
    }

    pub fn newline(self, newline: u8) -> Config {
        Config { newline, ..self }
    }

    pub fn cancel(self, cancel: Option<u8>) -> Config {
        Config { cancel, ..self }
    }

    pub fn get_stack_size(&self) -> usize {
        self.stack_size
    }

    pub fn get_input_buffer_size(&self) -> usize {
        self.input_buffer_size
    }

    pub fn get_newline(&self) -> u8 {
        self.newline
    }

    pub fn get_cancel(&self) -> Option<u8> {
        self.cancel
    }
}
