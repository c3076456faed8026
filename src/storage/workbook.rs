use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    domain::Table,
    errors::{BudgetError, Result},
};

use super::{next_row_index, Cell, Row, RowStore, HEADER};

const TMP_SUFFIX: &str = "tmp";

/// Worksheet names backing the two logical tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetNames {
    pub income: String,
    pub expenses: String,
}

impl WorksheetNames {
    pub fn for_table(&self, table: Table) -> &str {
        match table {
            Table::Income => &self.income,
            Table::Expenses => &self.expenses,
        }
    }
}

impl Default for WorksheetNames {
    fn default() -> Self {
        Self {
            income: Table::Income.to_string(),
            expenses: Table::Expenses.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkbookData {
    title: String,
    worksheets: Vec<Worksheet>,
}

/// Spreadsheet-style workbook persisted as a single JSON document.
///
/// The workbook is read once when opened and every append is written back
/// through an atomic replace of the file.
#[derive(Debug)]
pub struct JsonWorkbook {
    path: PathBuf,
    names: WorksheetNames,
    data: WorkbookData,
}

impl JsonWorkbook {
    /// Creates a workbook with one worksheet per table, each holding the
    /// header row. Refuses to replace an existing file unless `overwrite`.
    pub fn create(
        path: &Path,
        title: &str,
        names: &WorksheetNames,
        overwrite: bool,
    ) -> Result<Self> {
        if path.exists() && !overwrite {
            return Err(BudgetError::WorkbookExists(path.to_path_buf()));
        }
        let header: Row = HEADER.iter().map(|label| Cell::from(*label)).collect();
        let worksheets = [Table::Income, Table::Expenses]
            .into_iter()
            .map(|table| Worksheet {
                name: names.for_table(table).to_string(),
                rows: vec![header.clone()],
            })
            .collect();

        let workbook = Self {
            path: path.to_path_buf(),
            names: names.clone(),
            data: WorkbookData {
                title: title.to_string(),
                worksheets,
            },
        };
        workbook.save()?;
        tracing::info!(path = %path.display(), "workbook created");
        Ok(workbook)
    }

    /// Opens an existing workbook and checks both worksheets are present.
    pub fn open(path: &Path, names: &WorksheetNames) -> Result<Self> {
        if !path.exists() {
            return Err(BudgetError::WorkbookNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let data: WorkbookData = serde_json::from_str(&raw)?;
        let workbook = Self {
            path: path.to_path_buf(),
            names: names.clone(),
            data,
        };
        for table in [Table::Income, Table::Expenses] {
            let rows = workbook.rows(table)?.len();
            tracing::info!(
                worksheet = names.for_table(table),
                rows,
                "worksheet loaded"
            );
        }
        Ok(workbook)
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All rows of `table`'s worksheet, header included.
    pub fn rows(&self, table: Table) -> Result<&[Row]> {
        let name = self.names.for_table(table);
        self.data
            .worksheets
            .iter()
            .find(|sheet| sheet.name == name)
            .map(|sheet| sheet.rows.as_slice())
            .ok_or_else(|| BudgetError::WorksheetNotFound(name.to_string()))
    }

    fn worksheet_mut(&mut self, table: Table) -> Result<&mut Worksheet> {
        let name = self.names.for_table(table);
        self.data
            .worksheets
            .iter_mut()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| BudgetError::WorksheetNotFound(name.to_string()))
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RowStore for JsonWorkbook {
    fn append_row(&mut self, table: Table, row: Row) -> Result<usize> {
        let sheet = self.worksheet_mut(table)?;
        let index = next_row_index(&sheet.rows);
        sheet.rows.insert(index, row);
        let worksheet = sheet.name.clone();
        self.save()?;
        tracing::info!(worksheet = %worksheet, row = index + 1, "row appended");
        Ok(index + 1)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
