use colored::Colorize;

use super::console::MessageKind;

/// Applies the terminal colour scheme for `kind` to `message`.
pub fn styled(kind: MessageKind, message: &str) -> String {
    match kind {
        MessageKind::Plain => message.to_string(),
        MessageKind::Success => message.bright_green().to_string(),
        MessageKind::Warning => message.bright_yellow().to_string(),
        MessageKind::Section => message.bold().to_string(),
    }
}
