pub mod console;
pub mod menu;
pub mod output;
pub mod prompts;
mod shell;
pub mod stream;
pub mod terminal;

pub use console::{Console, MessageKind};
pub use menu::{MenuController, MenuState, Outcome, Step, SummaryView};
pub use shell::{init_workbook, CliMode, Shell};
pub use stream::StreamConsole;
pub use terminal::TerminalConsole;
