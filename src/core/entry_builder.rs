//! Interactive construction of a single income or expense entry.

use std::time::Duration;

use chrono::NaiveDate;

use crate::cli::console::Console;
use crate::cli::prompts;
use crate::core::category_registry::CategoryRegistry;
use crate::core::validator::DATE_FORMAT;
use crate::domain::{Entry, EntryKind, EXTRA_INCOME, MONTHLY_INCOME};
use crate::errors::Result;
use crate::storage::RowStore;

/// Walks the date, description/category and amount stages for one entry and
/// commits it to the row store.
pub struct EntryBuilder<'a> {
    console: &'a mut dyn Console,
    registry: &'a mut CategoryRegistry,
    today: NaiveDate,
    confirmation_pause: Duration,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        registry: &'a mut CategoryRegistry,
        today: NaiveDate,
    ) -> Self {
        Self {
            console,
            registry,
            today,
            confirmation_pause: Duration::ZERO,
        }
    }

    /// How long the confirmation stays on screen before it is cleared.
    pub fn with_confirmation_pause(mut self, pause: Duration) -> Self {
        self.confirmation_pause = pause;
        self
    }

    /// Collects an entry of `kind` and appends it to its table.
    pub fn run(mut self, kind: EntryKind, store: &mut dyn RowStore) -> Result<Entry> {
        let entry = self.collect(kind)?;
        self.commit(kind, &entry, store)?;
        Ok(entry)
    }

    /// Runs the input stages only. Expense categories are registered here, so
    /// a created category is known even if the commit later fails.
    pub fn collect(&mut self, kind: EntryKind) -> Result<Entry> {
        let date = self.collect_date()?;

        let (description, category) = match kind {
            EntryKind::PrimaryIncome => {
                self.console.say(MONTHLY_INCOME);
                (MONTHLY_INCOME.to_string(), MONTHLY_INCOME.to_string())
            }
            EntryKind::AdditionalIncome => {
                let description = prompts::prompt_description(self.console)?;
                (description, EXTRA_INCOME.to_string())
            }
            EntryKind::Expense => {
                let description = prompts::prompt_description(self.console)?;
                let category = self.registry.choose_or_create(self.console)?;
                self.register_category(&category);
                (description, category)
            }
        };

        let amount = prompts::prompt_amount(self.console)?;
        Ok(Entry::new(date, description, category, amount))
    }

    fn collect_date(&mut self) -> Result<NaiveDate> {
        self.console.say(&format!(
            "Today's date is {}.",
            self.today.format(DATE_FORMAT)
        ));
        self.console
            .say("Press Enter to choose today's date or Enter a different date:");
        prompts::prompt_date(self.console, self.today)
    }

    fn register_category(&mut self, category: &str) {
        if self.registry.add(category).added {
            self.console
                .success(&format!("Category '{category}' added successfully."));
        } else {
            self.console.say(&format!("Category: '{category}'"));
        }
    }

    /// Appends `entry`, confirms it to the user, then clears the display.
    pub fn commit(
        &mut self,
        kind: EntryKind,
        entry: &Entry,
        store: &mut dyn RowStore,
    ) -> Result<usize> {
        let table = kind.table();
        let row = store.append_entry(table, entry)?;
        tracing::info!(%kind, %table, row, amount = entry.amount, "entry recorded");

        if kind.is_expense() {
            self.console.type_slowly("Expense added successfully!\n");
            self.console.say(&format!(
                "You spent {:.2} on {}",
                entry.amount, entry.description
            ));
        } else {
            self.console.type_slowly("Income added successfully!\n");
            self.console
                .say(&format!("You added {:.2} to your Incomes", entry.amount));
        }

        self.console.pause(self.confirmation_pause);
        self.console.clear()?;
        Ok(row)
    }
}
