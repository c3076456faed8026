use std::{
    io::{BufRead, Write},
    time::Duration,
};

use crate::errors::{BudgetError, Result};

use super::console::{Console, MessageKind};

/// Plain console over arbitrary reader/writer pairs.
///
/// Used for script mode (stdin/stdout) and in tests. It never sleeps, never
/// clears and writes no colour codes.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, text: &str) {
        // Output failures are not recoverable here and must not abort a prompt loop.
        let _ = writeln!(self.output, "{text}");
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write_line(prompt);
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BudgetError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn emit(&mut self, _kind: MessageKind, message: &str) {
        self.write_line(message);
    }

    fn type_slowly(&mut self, text: &str) {
        let _ = write!(self.output, "{text}");
    }

    fn pause(&mut self, _duration: Duration) {}

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}
