pub mod entry;

pub use entry::{Entry, EntryKind, Table, EXTRA_INCOME, MONTHLY_INCOME};
