use std::time::Duration;

use crate::errors::Result;

/// Message categories used to style console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Success,
    Warning,
    Section,
}

/// Line-oriented interaction surface used by the menus and the entry builder.
///
/// Every presentation effect (clearing, typewriter printing, timed pauses) goes
/// through this trait so the collection logic can run against a scripted
/// implementation in tests.
pub trait Console {
    /// Shows `prompt` and reads one line of input without its line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn emit(&mut self, kind: MessageKind, message: &str);

    /// Prints `text` one character at a time. `text` carries its own newlines.
    fn type_slowly(&mut self, text: &str);

    fn pause(&mut self, duration: Duration);

    fn clear(&mut self) -> Result<()>;

    fn say(&mut self, message: &str) {
        self.emit(MessageKind::Plain, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(MessageKind::Warning, message);
    }

    fn success(&mut self, message: &str) {
        self.emit(MessageKind::Success, message);
    }
}
