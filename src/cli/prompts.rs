//! Reprompt loops built on the pure validators. None of these return until the
//! user supplies an acceptable value or the input stream fails.

use chrono::NaiveDate;

use crate::core::validator::{self, DateInput, ValidationError};
use crate::errors::Result;

use super::console::Console;

pub const CHOICE_PROMPT: &str = "Select your choice:";

fn read_until_valid<T>(
    console: &mut dyn Console,
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, ValidationError>,
) -> Result<T> {
    loop {
        let input = console.read_line(prompt)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(err) => console.warn(&err.message),
        }
    }
}

/// Reads a number from `valid_choices`, then clears the screen.
pub fn parse_menu_choice(
    console: &mut dyn Console,
    prompt: &str,
    valid_choices: &[u32],
) -> Result<u32> {
    let choice = read_until_valid(console, prompt, |input| {
        validator::parse_menu_choice(input, valid_choices)
    })?;
    console.clear()?;
    Ok(choice)
}

pub fn prompt_date(console: &mut dyn Console, today: NaiveDate) -> Result<NaiveDate> {
    let input = read_until_valid(console, "Date of entry (YYYY-MM-DD):", validator::parse_date)?;
    if input == DateInput::UseDefault {
        console.say(&format!(
            "The new entry is automatically saved on today's date: {}",
            today.format(validator::DATE_FORMAT)
        ));
    }
    Ok(input.or_default(today))
}

pub fn prompt_description(console: &mut dyn Console) -> Result<String> {
    read_until_valid(
        console,
        "Enter description (max 15 characters):",
        validator::validate_description,
    )
}

pub fn prompt_amount(console: &mut dyn Console) -> Result<f64> {
    read_until_valid(
        console,
        "Enter the amount (Post-Tax):",
        validator::parse_amount,
    )
}

pub fn prompt_category_name(console: &mut dyn Console) -> Result<String> {
    read_until_valid(
        console,
        "Enter the name of the new category:",
        validator::validate_category_name,
    )
}

pub fn confirm(console: &mut dyn Console, prompt: &str) -> Result<bool> {
    read_until_valid(console, prompt, validator::parse_confirmation)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::cli::stream::StreamConsole;

    fn console(input: &str) -> StreamConsole<Cursor<String>, Vec<u8>> {
        StreamConsole::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn transcript(console: StreamConsole<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn menu_choice_reprompts_until_valid() {
        let mut console = console("abc\n7\n2\n");
        let choice = parse_menu_choice(&mut console, CHOICE_PROMPT, &[1, 2, 3]).unwrap();
        assert_eq!(choice, 2);

        let output = transcript(console);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
        assert!(output.contains("Only numbers allowed"));
        assert!(output.contains("Please enter one of these numbers: [1, 2, 3]"));
    }

    #[test]
    fn blank_date_announces_default() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut console = console("\n");
        assert_eq!(prompt_date(&mut console, today).unwrap(), today);
        assert!(transcript(console)
            .contains("The new entry is automatically saved on today's date: 2024-06-01"));
    }

    #[test]
    fn bad_date_is_retried() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut console = console("01/05/2024\n2024-05-01\n");
        let date = prompt_date(&mut console, today).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(transcript(console)
            .contains("Invalid date format. Please enter the date in YYYY-MM-DD format."));
    }

    #[test]
    fn amount_loops_over_negative_and_malformed_values() {
        let mut console = console("-3\nlots\n12.75\n");
        assert_eq!(prompt_amount(&mut console).unwrap(), 12.75);
        let output = transcript(console);
        assert!(output.contains("Amount must be a positive number. Please try again."));
        assert!(output.contains("Invalid input. Please enter a number."));
    }

    #[test]
    fn description_rejects_empty_and_long_text() {
        let mut console = console("\nthis is far too long\nRent\n");
        assert_eq!(prompt_description(&mut console).unwrap(), "Rent");
        let output = transcript(console);
        assert!(output.contains("Description cannot be empty. Please enter a description."));
        assert!(output
            .contains("The description must be between 1 and 15 characters. Please try again."));
    }

    #[test]
    fn confirm_repeats_on_unknown_answer() {
        let mut console = console("maybe\nN\n");
        assert!(!confirm(&mut console, "Proceed? (y / n):").unwrap());
        let output = transcript(console);
        assert_eq!(output.matches("Invalid input. Please enter 'y' or 'n'.").count(), 1);
    }

    #[test]
    fn closed_input_stops_the_loop() {
        let mut console = console("nope\n");
        assert!(prompt_amount(&mut console).is_err());
    }
}
