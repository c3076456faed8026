use std::collections::HashMap;

use crate::{
    domain::Table,
    errors::{BudgetError, Result},
};

use super::{next_row_index, Row, RowStore};

/// Row store kept entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: HashMap<Table, Vec<Row>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose appends always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: HashMap::new(),
            failure: Some(message.into()),
        }
    }

    pub fn rows(&self, table: Table) -> &[Row] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or_default()
    }
}

impl RowStore for MemoryStore {
    fn append_row(&mut self, table: Table, row: Row) -> Result<usize> {
        if let Some(message) = &self.failure {
            return Err(BudgetError::Storage(message.clone()));
        }
        let rows = self.tables.entry(table).or_default();
        let index = next_row_index(rows);
        rows.insert(index, row);
        Ok(index + 1)
    }
}
