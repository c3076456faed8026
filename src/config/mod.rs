use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BudgetError, Result},
    storage::WorksheetNames,
};

pub const HOME_ENV: &str = "BUDGET_CALCULATOR_HOME";
const DEFAULT_DIR_NAME: &str = ".budget_calculator";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_WORKBOOK_FILE: &str = "budget_calculator.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences loaded from `config.json` in the application home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workbook location; relative paths resolve against the application home.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook_path: Option<PathBuf>,
    pub spreadsheet_title: String,
    pub income_worksheet: String,
    pub expenses_worksheet: String,
    pub typing_delay_ms: u64,
    pub confirmation_pause_ms: u64,
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: None,
            spreadsheet_title: "budget_calculator".into(),
            income_worksheet: "income".into(),
            expenses_worksheet: "expenses".into(),
            typing_delay_ms: 100,
            confirmation_pause_ms: 3000,
            clear_screen: true,
        }
    }
}

impl Config {
    pub fn worksheet_names(&self) -> WorksheetNames {
        WorksheetNames {
            income: self.income_worksheet.clone(),
            expenses: self.expenses_worksheet.clone(),
        }
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn confirmation_pause(&self) -> Duration {
        Duration::from_millis(self.confirmation_pause_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.income_worksheet.trim().is_empty() || self.expenses_worksheet.trim().is_empty() {
            return Err(BudgetError::Config("worksheet names cannot be empty".into()));
        }
        if self.income_worksheet == self.expenses_worksheet {
            return Err(BudgetError::Config(format!(
                "income and expenses must use different worksheets (both are `{}`)",
                self.income_worksheet
            )));
        }
        Ok(())
    }
}

/// Locates, loads and saves [`Config`] inside the application home.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at `$BUDGET_CALCULATOR_HOME`, falling back to
    /// `~/.budget_calculator`.
    pub fn new() -> Self {
        Self::with_base_dir(Self::default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn default_base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        let config = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data).map_err(|err| {
                BudgetError::Config(format!("{} is invalid: {err}", path.display()))
            })?
        } else {
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        fs::create_dir_all(&self.base)?;
        let path = self.config_path();
        let tmp = path.with_extension(format!("json.{TMP_SUFFIX}"));
        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Absolute workbook location for `config`.
    pub fn workbook_path(&self, config: &Config) -> PathBuf {
        match &config.workbook_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.base.join(path),
            None => self.base.join(DEFAULT_WORKBOOK_FILE),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
