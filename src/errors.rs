use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type covering every failure that is not recovered by a reprompt.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("input stream closed")]
    InputClosed,
    #[error("workbook not found at {0} (run `budget_calculator init` to create it)")]
    WorkbookNotFound(PathBuf),
    #[error("workbook already exists at {0}")]
    WorkbookExists(PathBuf),
    #[error("worksheet `{0}` not found")]
    WorksheetNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
