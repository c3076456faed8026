use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{cursor, terminal, ExecutableCommand};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::config::Config;
use crate::errors::{BudgetError, Result};

use super::console::{Console, MessageKind};
use super::output::styled;

const INPUT_MARKER: &str = "> ";

/// Interactive console: rustyline editing, coloured output, real delays and
/// screen clearing.
pub struct TerminalConsole {
    editor: DefaultEditor,
    typing_delay: Duration,
    clear_screen: bool,
}

impl TerminalConsole {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            typing_delay: config.typing_delay(),
            clear_screen: config.clear_screen,
        })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        println!("{}", styled(MessageKind::Plain, prompt));
        match self.editor.readline(INPUT_MARKER) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(BudgetError::InputClosed)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        println!("{}", styled(kind, message));
    }

    fn type_slowly(&mut self, text: &str) {
        let mut stdout = io::stdout();
        for ch in text.chars() {
            let _ = write!(stdout, "{ch}");
            let _ = stdout.flush();
            if !self.typing_delay.is_zero() {
                thread::sleep(self.typing_delay);
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn clear(&mut self) -> Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout.execute(terminal::Clear(terminal::ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}
