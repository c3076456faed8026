pub mod category_registry;
pub mod entry_builder;
pub mod validator;

pub use category_registry::{AddResult, CategoryRegistry};
pub use entry_builder::EntryBuilder;
pub use validator::{DateInput, ValidationError};
