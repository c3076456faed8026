//! Pure field validation for console input.
//!
//! Each function inspects one raw line and either produces the parsed value or
//! a [`ValidationError`] carrying the message shown before reprompting. The
//! reprompt loops themselves live in [`crate::cli::prompts`].

use std::fmt;

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DESCRIPTION_MAX_LEN: usize = 15;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of reading the date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// Blank input; the caller substitutes today's date.
    UseDefault,
    Date(NaiveDate),
}

impl DateInput {
    pub fn or_default(self, today: NaiveDate) -> NaiveDate {
        match self {
            DateInput::UseDefault => today,
            DateInput::Date(date) => date,
        }
    }
}

pub fn parse_menu_choice(input: &str, valid_choices: &[u32]) -> Result<u32, ValidationError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new("Only numbers allowed"))?;

    u32::try_from(value)
        .ok()
        .filter(|choice| valid_choices.contains(choice))
        .ok_or_else(|| {
            ValidationError::new(format!(
                "Please enter one of these numbers: {valid_choices:?}"
            ))
        })
}

pub fn parse_date(input: &str) -> Result<DateInput, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DateInput::UseDefault);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(DateInput::Date)
        .map_err(|_| {
            ValidationError::new("Invalid date format. Please enter the date in YYYY-MM-DD format.")
        })
}

pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::new("Invalid input. Please enter a number."))?;

    if value < 0.0 {
        Err(ValidationError::new(
            "Amount must be a positive number. Please try again.",
        ))
    } else {
        // Normalises "-0" to 0.
        Ok(value.abs())
    }
}

/// Accepts descriptions whose trimmed length is 1 to 15 characters and returns
/// the trimmed text.
pub fn validate_description(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            "Description cannot be empty. Please enter a description.",
        ));
    }
    if trimmed.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::new(format!(
            "The description must be between 1 and {DESCRIPTION_MAX_LEN} characters. Please try again."
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_category_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new("Category name cannot be empty."))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Case-insensitive `y`/`n` answer.
pub fn parse_confirmation(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(ValidationError::new("Invalid input. Please enter 'y' or 'n'.")),
    }
}
