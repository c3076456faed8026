use std::{
    env,
    io::{self, BufReader},
    path::PathBuf,
};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::{Config, ConfigManager};
use crate::errors::{BudgetError, Result};
use crate::storage::JsonWorkbook;
use crate::utils::clock::SystemClock;

use super::console::Console;
use super::menu::MenuController;
use super::stream::StreamConsole;
use super::terminal::TerminalConsole;

pub const SCRIPT_ENV: &str = "BUDGET_CALCULATOR_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode reads plain lines from stdin with no delays or clearing.
    pub fn detect() -> Self {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// A started session: configuration loaded and workbook opened.
pub struct Shell {
    config: Config,
    workbook: JsonWorkbook,
    console: Box<dyn Console>,
}

impl Shell {
    /// Loads configuration and opens the workbook. Any failure here is a
    /// startup error; the menu never runs.
    pub fn start(manager: &ConfigManager, mode: CliMode) -> Result<Self> {
        let config = manager.load()?;
        let path = manager.workbook_path(&config);
        let workbook = JsonWorkbook::open(&path, &config.worksheet_names())?;
        tracing::info!(
            title = workbook.title(),
            path = %workbook.path().display(),
            ?mode,
            "session started"
        );

        let console: Box<dyn Console> = match mode {
            CliMode::Interactive => Box::new(TerminalConsole::new(&config)?),
            CliMode::Script => Box::new(StreamConsole::new(
                BufReader::new(io::stdin()),
                io::stdout(),
            )),
        };

        Ok(Self {
            config,
            workbook,
            console,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let clock = SystemClock;
        MenuController::new(self.console.as_mut(), &mut self.workbook, &clock)
            .with_confirmation_pause(self.config.confirmation_pause())
            .run()
    }
}

/// Creates the configured workbook with empty `income` and `expenses`
/// worksheets, asking before replacing an existing one in interactive mode.
pub fn init_workbook(manager: &ConfigManager, mode: CliMode, force: bool) -> Result<PathBuf> {
    let config = manager.load()?;
    let path = manager.workbook_path(&config);

    let overwrite = if path.exists() && !force {
        match mode {
            CliMode::Script => return Err(BudgetError::WorkbookExists(path)),
            CliMode::Interactive => {
                let replace = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!(
                        "A workbook already exists at {}. Replace it with an empty one?",
                        path.display()
                    ))
                    .default(false)
                    .interact()?;
                if !replace {
                    return Err(BudgetError::WorkbookExists(path));
                }
                true
            }
        }
    } else {
        force
    };

    JsonWorkbook::create(
        &path,
        &config.spreadsheet_title,
        &config.worksheet_names(),
        overwrite,
    )?;
    Ok(path)
}
