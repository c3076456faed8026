use crate::cli::console::Console;
use crate::cli::prompts::{self, CHOICE_PROMPT};
use crate::errors::Result;

/// Outcome of [`CategoryRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddResult {
    pub added: bool,
}

/// Expense categories known to the current session, in insertion order.
///
/// Categories live only as long as the session; nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct CategoryRegistry {
    categories: Vec<String>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `category` unless an identical name is already present.
    pub fn add(&mut self, category: &str) -> AddResult {
        if self.contains(category) {
            return AddResult { added: false };
        }
        self.categories.push(category.to_string());
        tracing::debug!(category, total = self.categories.len(), "category registered");
        AddResult { added: true }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|existing| existing == category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories paired with their 1-based menu numbers.
    pub fn list_numbered(&self) -> Vec<(usize, &str)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, name)| (index + 1, name.as_str()))
            .collect()
    }

    /// Menu number of the "Create a new category" option.
    pub fn create_option(&self) -> usize {
        self.categories.len() + 1
    }

    /// Lets the user pick an existing category or type a new name.
    ///
    /// A new name is returned without being registered; callers follow up
    /// with [`CategoryRegistry::add`].
    pub fn choose_or_create(&self, console: &mut dyn Console) -> Result<String> {
        console.say("Select category by number:");
        for (number, name) in self.list_numbered() {
            console.say(&format!("{number}. {name}"));
        }
        let create_option = self.create_option();
        console.say(&format!("{create_option}. Create a new category"));

        let valid_choices: Vec<u32> = (1..=create_option as u32).collect();
        let choice = prompts::parse_menu_choice(console, CHOICE_PROMPT, &valid_choices)? as usize;

        if choice == create_option {
            prompts::prompt_category_name(console)
        } else {
            Ok(self.categories[choice - 1].clone())
        }
    }
}
