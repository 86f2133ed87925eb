//! Text format for tasting dates (`MM/dd/yyyy`).

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// chrono pattern for `MM/dd/yyyy`.
pub const TASTING_DATE_FORMAT: &str = "%m/%d/%Y";

/// Tasting date text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    pub input: String,
    pub message: String,
}

impl Display for DateFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid tasting date `{}` (expected MM/dd/yyyy): {}",
            self.input, self.message
        )
    }
}

impl Error for DateFormatError {}

/// Renders a date as zero-padded `MM/dd/yyyy`.
pub fn format_tasting_date(date: NaiveDate) -> String {
    date.format(TASTING_DATE_FORMAT).to_string()
}

/// Parses `MM/dd/yyyy` text, ignoring surrounding whitespace.
pub fn parse_tasting_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, TASTING_DATE_FORMAT).map_err(|err| DateFormatError {
        input: trimmed.to_string(),
        message: err.to_string(),
    })
}
