//! Nested menu state machine driving a console session.

use std::time::Duration;

use crate::core::{CategoryRegistry, EntryBuilder};
use crate::domain::{Entry, EntryKind};
use crate::errors::Result;
use crate::storage::RowStore;
use crate::utils::clock::Clock;

use super::console::{Console, MessageKind};
use super::prompts::{self, CHOICE_PROMPT};

const WELCOME: &str = "Welcome to the Budget Calculator!\n\n";
const EXIT_PROMPT: &str = "Are you sure you want to exit? (y / n):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    IncomeSubmenu,
    ExpenseSubmenu,
    ViewSummarySubmenu,
    ExitConfirm,
    Terminated,
}

/// Reporting views reserved in the summary menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryView {
    ExpensesByMonth,
    ExpensesByCategory,
    WeeklyExpenses,
    MonthlySummary,
    YearlySummary,
}

impl SummaryView {
    pub fn label(self) -> &'static str {
        match self {
            SummaryView::ExpensesByMonth => "View all Expenses by Month",
            SummaryView::ExpensesByCategory => "View Monthly Expenses by Category",
            SummaryView::WeeklyExpenses => "View Weekly Expenses",
            SummaryView::MonthlySummary => "Monthly Summary",
            SummaryView::YearlySummary => "Yearly Summary",
        }
    }
}

/// What happened while handling one state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Navigated,
    EntryRecorded { kind: EntryKind, entry: Entry },
    NotImplemented(SummaryView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub next: MenuState,
    pub outcome: Outcome,
}

impl Step {
    fn to(next: MenuState) -> Self {
        Self {
            next,
            outcome: Outcome::Navigated,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Goto(MenuState),
    Record(EntryKind),
    Summary(SummaryView),
}

struct MenuOption {
    label: &'static str,
    action: Action,
}

const fn option(label: &'static str, action: Action) -> MenuOption {
    MenuOption { label, action }
}

const MAIN_OPTIONS: &[MenuOption] = &[
    option("Add an Income", Action::Goto(MenuState::IncomeSubmenu)),
    option("Add an Expense", Action::Goto(MenuState::ExpenseSubmenu)),
    option("View Summary", Action::Goto(MenuState::ViewSummarySubmenu)),
    option("Exit", Action::Goto(MenuState::ExitConfirm)),
];

const INCOME_OPTIONS: &[MenuOption] = &[
    option("Add Monthly Income", Action::Record(EntryKind::PrimaryIncome)),
    option(
        "Add Additional Income",
        Action::Record(EntryKind::AdditionalIncome),
    ),
    option("Back to Main Menu", Action::Goto(MenuState::MainMenu)),
];

const EXPENSE_OPTIONS: &[MenuOption] = &[
    option("Add Expense", Action::Record(EntryKind::Expense)),
    option("Back to Main Menu", Action::Goto(MenuState::MainMenu)),
];

const SUMMARY_OPTIONS: &[MenuOption] = &[
    option(
        "View all Expenses by Month",
        Action::Summary(SummaryView::ExpensesByMonth),
    ),
    option(
        "View Monthly Expenses by Category",
        Action::Summary(SummaryView::ExpensesByCategory),
    ),
    option(
        "View Weekly Expenses",
        Action::Summary(SummaryView::WeeklyExpenses),
    ),
    option(
        "Monthly Summary",
        Action::Summary(SummaryView::MonthlySummary),
    ),
    option("Yearly Summary", Action::Summary(SummaryView::YearlySummary)),
    option("Back to Main Menu", Action::Goto(MenuState::MainMenu)),
];

/// Owns the session state (category registry) and sequences the menus.
pub struct MenuController<'a> {
    console: &'a mut dyn Console,
    store: &'a mut dyn RowStore,
    clock: &'a dyn Clock,
    registry: CategoryRegistry,
    confirmation_pause: Duration,
}

impl<'a> MenuController<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        store: &'a mut dyn RowStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            console,
            store,
            clock,
            registry: CategoryRegistry::new(),
            confirmation_pause: Duration::ZERO,
        }
    }

    pub fn with_confirmation_pause(mut self, pause: Duration) -> Self {
        self.confirmation_pause = pause;
        self
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Runs from the main menu until the user confirms exit.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MainMenu;
        while state != MenuState::Terminated {
            let step = self.step(state)?;
            tracing::debug!(from = ?state, to = ?step.next, "menu transition");
            state = step.next;
        }
        Ok(())
    }

    /// Handles a single state and reports the next one.
    pub fn step(&mut self, state: MenuState) -> Result<Step> {
        match state {
            MenuState::MainMenu => {
                self.console.type_slowly(WELCOME);
                self.console
                    .emit(MessageKind::Section, "Please choose what you wish to do:");
                self.choose(MAIN_OPTIONS)
            }
            MenuState::IncomeSubmenu => self.choose(INCOME_OPTIONS),
            MenuState::ExpenseSubmenu => self.choose(EXPENSE_OPTIONS),
            MenuState::ViewSummarySubmenu => self.choose(SUMMARY_OPTIONS),
            MenuState::ExitConfirm => self.confirm_exit(),
            MenuState::Terminated => Ok(Step::to(MenuState::Terminated)),
        }
    }

    fn choose(&mut self, options: &[MenuOption]) -> Result<Step> {
        for (index, option) in options.iter().enumerate() {
            self.console.say(&format!("{}. {}", index + 1, option.label));
        }
        let valid_choices: Vec<u32> = (1..=options.len() as u32).collect();
        let choice = prompts::parse_menu_choice(self.console, CHOICE_PROMPT, &valid_choices)?;

        match options[choice as usize - 1].action {
            Action::Goto(next) => Ok(Step::to(next)),
            Action::Record(kind) => {
                let entry = EntryBuilder::new(self.console, &mut self.registry, self.clock.today())
                    .with_confirmation_pause(self.confirmation_pause)
                    .run(kind, self.store)?;
                Ok(Step {
                    next: MenuState::MainMenu,
                    outcome: Outcome::EntryRecorded { kind, entry },
                })
            }
            Action::Summary(view) => {
                self.console.emit(
                    MessageKind::Warning,
                    &format!("{} is not available yet.", view.label()),
                );
                Ok(Step {
                    next: MenuState::MainMenu,
                    outcome: Outcome::NotImplemented(view),
                })
            }
        }
    }

    fn confirm_exit(&mut self) -> Result<Step> {
        if prompts::confirm(self.console, EXIT_PROMPT)? {
            self.console.say("Exiting the Budget Calculator.");
            Ok(Step::to(MenuState::Terminated))
        } else {
            Ok(Step::to(MenuState::MainMenu))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;

    use super::*;
    use crate::cli::stream::StreamConsole;
    use crate::domain::Table;
    use crate::errors::BudgetError;
    use crate::storage::MemoryStore;
    use crate::utils::clock::FixedClock;

    type TestConsole = StreamConsole<Cursor<String>, Vec<u8>>;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn console(input: &str) -> TestConsole {
        StreamConsole::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn main_menu_routes_to_each_submenu() {
        let expected = [
            ("1\n", MenuState::IncomeSubmenu),
            ("2\n", MenuState::ExpenseSubmenu),
            ("3\n", MenuState::ViewSummarySubmenu),
            ("4\n", MenuState::ExitConfirm),
        ];
        for (input, state) in expected {
            let mut console = console(input);
            let mut store = MemoryStore::new();
            let clock = clock();
            let mut menu = MenuController::new(&mut console, &mut store, &clock);
            assert_eq!(menu.step(MenuState::MainMenu).unwrap(), Step::to(state));
        }
    }

    #[test]
    fn main_menu_rejects_choices_outside_its_range() {
        let mut console = console("0\n9\nexit\n4\n");
        let mut store = MemoryStore::new();
        let clock = clock();
        let step = MenuController::new(&mut console, &mut store, &clock)
            .step(MenuState::MainMenu)
            .unwrap();
        assert_eq!(step.next, MenuState::ExitConfirm);

        let text = output(console);
        assert!(text.starts_with("Welcome to the Budget Calculator!"));
        assert_eq!(
            text.matches("Please enter one of these numbers: [1, 2, 3, 4]")
                .count(),
            2
        );
        assert!(text.contains("Only numbers allowed"));
    }

    #[test]
    fn back_options_return_to_main_menu() {
        for (state, input) in [
            (MenuState::IncomeSubmenu, "3\n"),
            (MenuState::ExpenseSubmenu, "2\n"),
            (MenuState::ViewSummarySubmenu, "6\n"),
        ] {
            let mut console = console(input);
            let mut store = MemoryStore::new();
            let clock = clock();
            let step = MenuController::new(&mut console, &mut store, &clock)
                .step(state)
                .unwrap();
            assert_eq!(step, Step::to(MenuState::MainMenu));
        }
    }

    #[test]
    fn summary_views_are_reported_as_not_implemented() {
        let views = [
            SummaryView::ExpensesByMonth,
            SummaryView::ExpensesByCategory,
            SummaryView::WeeklyExpenses,
            SummaryView::MonthlySummary,
            SummaryView::YearlySummary,
        ];
        for (index, view) in views.into_iter().enumerate() {
            let mut console = console(&format!("{}\n", index + 1));
            let mut store = MemoryStore::new();
            let clock = clock();
            let step = MenuController::new(&mut console, &mut store, &clock)
                .step(MenuState::ViewSummarySubmenu)
                .unwrap();
            assert_eq!(step.next, MenuState::MainMenu);
            assert_eq!(step.outcome, Outcome::NotImplemented(view));
            assert!(output(console).contains(&format!("{} is not available yet.", view.label())));
        }
    }

    #[test]
    fn income_submenu_records_monthly_income() {
        let mut console = console("1\n\n1500.00\n");
        let mut store = MemoryStore::new();
        let clock = clock();
        let step = MenuController::new(&mut console, &mut store, &clock)
            .step(MenuState::IncomeSubmenu)
            .unwrap();

        assert_eq!(step.next, MenuState::MainMenu);
        match step.outcome {
            Outcome::EntryRecorded { kind, entry } => {
                assert_eq!(kind, EntryKind::PrimaryIncome);
                assert_eq!(entry.date, clock.today());
                assert_eq!(entry.description, "Monthly Income");
                assert_eq!(entry.category, "Monthly Income");
                assert_eq!(entry.amount, 1500.0);
            }
            other => panic!("Unexpected outcome: {:?}", other),
        }
        assert_eq!(store.rows(Table::Income).len(), 1);
    }

    #[test]
    fn exit_confirmation_reprompts_then_returns_to_main_menu() {
        let mut console = console("maybe\nn\n");
        let mut store = MemoryStore::new();
        let clock = clock();
        let step = MenuController::new(&mut console, &mut store, &clock)
            .step(MenuState::ExitConfirm)
            .unwrap();
        assert_eq!(step, Step::to(MenuState::MainMenu));

        let text = output(console);
        assert_eq!(text.matches(EXIT_PROMPT).count(), 2);
        assert_eq!(
            text.matches("Invalid input. Please enter 'y' or 'n'.").count(),
            1
        );
    }

    #[test]
    fn confirming_exit_terminates() {
        let mut console = console("Y\n");
        let mut store = MemoryStore::new();
        let clock = clock();
        let step = MenuController::new(&mut console, &mut store, &clock)
            .step(MenuState::ExitConfirm)
            .unwrap();
        assert_eq!(step.next, MenuState::Terminated);
        assert!(output(console).contains("Exiting the Budget Calculator."));
    }

    #[test]
    fn session_keeps_categories_between_expenses() {
        let script = [
            "2", "1", "", "Groceries", "1", "Food", "45.0", // first expense, new category
            "2", "1", "", "Takeaway", "1", "9.99", // second expense, reuse category
            "4", "y",
        ]
        .join("\n");
        let mut console = console(&format!("{script}\n"));
        let mut store = MemoryStore::new();
        let clock = clock();
        let mut menu = MenuController::new(&mut console, &mut store, &clock);
        menu.run().unwrap();
        assert_eq!(menu.registry().list_numbered(), vec![(1, "Food")]);

        let rows = store.rows(Table::Expenses);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2].to_string(), "Food");
    }

    #[test]
    fn store_failures_end_the_run() {
        let mut console = console("1\n2\n\nBonus\n10\n");
        let mut store = MemoryStore::failing("network unreachable");
        let clock = clock();
        let err = MenuController::new(&mut console, &mut store, &clock)
            .run()
            .unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn closed_input_ends_the_run() {
        let mut console = console("1\n");
        let mut store = MemoryStore::new();
        let clock = clock();
        let err = MenuController::new(&mut console, &mut store, &clock)
            .run()
            .unwrap_err();
        assert!(matches!(err, BudgetError::InputClosed));
    }
}
