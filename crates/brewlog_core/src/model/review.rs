//! Review domain model.
//!
//! # Responsibility
//! - Define the tasting review record and its stable identifier.
//! - Build the searchable text used by review filtering.
//! - Provide the editing rules for review drafts.
//!
//! # Invariants
//! - `category` identifies a category by id; the review service fills in
//!   the live row on reads.
//! - A `None` category is rendered as the sentinel name when searching.

use crate::model::category::{Category, UNDEFINED_CATEGORY_NAME};
use crate::model::tasting_date::format_tasting_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 5;
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 99;
pub const MIN_BEVERAGE_NAME_CHARS: usize = 3;

/// Separator between searchable fields. A search box cannot produce it, so a
/// filter never matches across two fields.
pub(crate) const SEARCH_FIELD_DELIMITER: char = '\t';

/// Store-assigned review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(u64);

impl ReviewId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Beverage tasting review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Assigned on first save.
    pub id: Option<ReviewId>,
    /// Rating, 1..=5 in editing flows.
    pub score: u32,
    /// Beverage name.
    pub name: String,
    /// Date of the last tasting.
    pub date: NaiveDate,
    /// Category by id; services fill in its live name on reads. `None` reads
    /// as the undefined category.
    pub category: Option<Category>,
    /// Times tasted.
    pub count: u32,
}

impl Review {
    /// Creates an unsaved review with score 1, count 1 and no category.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            score: MIN_SCORE,
            name: name.into(),
            date,
            category: None,
            count: MIN_COUNT,
        }
    }

    /// Blank review used to open an "add" form.
    pub fn draft(today: NaiveDate) -> Self {
        Self::new(String::new(), today)
    }

    /// Category name shown for this review, falling back to the sentinel name.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .unwrap_or(UNDEFINED_CATEGORY_NAME)
    }

    /// Lower-cased, delimiter-joined text matched by review filters.
    ///
    /// Field order: beverage name, category name, score, count, date.
    pub(crate) fn search_text(&self) -> String {
        let delimiter = SEARCH_FIELD_DELIMITER.to_string();
        [
            self.name.clone(),
            self.category_name().to_string(),
            self.score.to_string(),
            self.count.to_string(),
            format_tasting_date(self.date),
        ]
        .join(&delimiter)
        .to_lowercase()
    }

    /// Checks the editing rules for review drafts against `today`.
    ///
    /// # Errors
    /// Returns the first violated rule in field order: name, score, count,
    /// date, category.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ReviewValidationError> {
        let name_chars = self.name.trim().chars().count();
        if name_chars < MIN_BEVERAGE_NAME_CHARS {
            return Err(ReviewValidationError::NameTooShort {
                min_chars: MIN_BEVERAGE_NAME_CHARS,
            });
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(ReviewValidationError::ScoreOutOfRange(self.score));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(ReviewValidationError::CountOutOfRange(self.count));
        }
        if self.date < earliest_tasting_date() || self.date > today {
            return Err(ReviewValidationError::DateOutOfRange {
                date: self.date,
                today,
            });
        }
        if self.category.is_none() {
            return Err(ReviewValidationError::MissingCategory);
        }
        Ok(())
    }
}

/// Earliest accepted tasting date, 0001-01-01.
pub fn earliest_tasting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Review draft validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    NameTooShort { min_chars: usize },
    ScoreOutOfRange(u32),
    CountOutOfRange(u32),
    DateOutOfRange { date: NaiveDate, today: NaiveDate },
    MissingCategory,
}

impl Display for ReviewValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { min_chars } => write!(
                f,
                "beverage name must contain at least {min_chars} printable characters"
            ),
            Self::ScoreOutOfRange(score) => write!(
                f,
                "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
            ),
            Self::CountOutOfRange(count) => write!(
                f,
                "tasting count must be between {MIN_COUNT} and {MAX_COUNT}, got {count}"
            ),
            Self::DateOutOfRange { date, today } => write!(
                f,
                "tasting date {date} must be between 0001-01-01 and {today}"
            ),
            Self::MissingCategory => write!(f, "the category should be defined"),
        }
    }
}

impl Error for ReviewValidationError {}
