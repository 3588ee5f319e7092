use super::{Cell, Config, Machine, Recognizer, Result, Stack};
use crate::error;
use crate::lang::{Column, Words};

/// ## Console interpreter
///
/// Owns the data stack, the recognizer chain and the output. Lines are
/// processed word by word; the first error ends the line.
pub struct Console<W> {
    config: Config,
    stack: Stack,
    recognizers: &'static [Recognizer],
    out: W,
}

impl<W: std::fmt::Write + Default> Default for Console<W> {
    fn default() -> Self {
        Console::new(Config::default(), crate::DEFAULT_RECOGNIZERS, W::default())
    }
}

impl<W: std::fmt::Write> Console<W> {
    pub fn new(config: Config, recognizers: &'static [Recognizer], out: W) -> Console<W> {
        Console {
            config,
            stack: Stack::new(config.get_stack_size()),
            recognizers,
            out,
        }
    }

    /// Installs a new recognizer chain and empties the stack.
    pub fn init(&mut self, recognizers: &'static [Recognizer]) {
        self.recognizers = recognizers;
        self.reset();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Item `index` down from the top, 0 is the top.
    pub fn peek(&self, index: usize) -> Result<Cell> {
        self.stack.peek(index)
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Evaluates one line. The line is rewritten in place: words are NUL
    /// terminated and string words are decoded over themselves.
    ///
    /// Comment and accept signals end the line without an error. Errors and
    /// user status codes end it with the column of the word that raised.
    pub fn process(&mut self, line: &mut [u8]) -> Result<()> {
        let mut words = Words::new();
        while let Some(word) = words.next_word(line) {
            if let Err(error) = self.dispatch(line, &word) {
                if error.is_signal() {
                    return Ok(());
                }
                if error.column() == (0..0) {
                    return Err(error.in_column(&word));
                }
                return Err(error);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &mut [u8], word: &Column) -> Result<()> {
        let mut machine = Machine::new(&mut self.stack, &mut self.out, line);
        for recognizer in self.recognizers {
            if recognizer.recognize(&mut machine, word)? {
                return Ok(());
            }
        }
        Err(error!(UnknownCommand))
    }
}
