#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use budget_calculator::{domain::Table, storage::{JsonWorkbook, WorksheetNames}};
use tempfile::TempDir;

/// Isolated application home for one test.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.path().join("budget_calculator.json")
    }

    /// Binary preconfigured for script mode against this home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("budget_calculator").expect("binary built");
        cmd.env("BUDGET_CALCULATOR_HOME", self.path())
            .env("BUDGET_CALCULATOR_SCRIPT", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn init_workbook(&self) {
        self.command().arg("init").assert().success();
    }

    pub fn workbook(&self) -> JsonWorkbook {
        JsonWorkbook::open(&self.workbook_path(), &WorksheetNames::default())
            .expect("open workbook")
    }

    /// Data rows of `table` rendered as strings, header excluded.
    pub fn data_rows(&self, table: Table) -> Vec<Vec<String>> {
        self.workbook()
            .rows(table)
            .expect("worksheet present")
            .iter()
            .skip(1)
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

/// Joins scripted answers into stdin content.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
