//! Category domain model.
//!
//! # Responsibility
//! - Define the beverage category record and its stable identifier.
//! - Provide the name rules used by category editing flows.
//!
//! # Invariants
//! - `id` is `None` only before the first save.
//! - The category named [`UNDEFINED_CATEGORY_NAME`] is the sentinel of a
//!   `CategoryService` and keeps that name for the service lifetime.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display name of the sentinel category that reviews fall back to.
pub const UNDEFINED_CATEGORY_NAME: &str = "Undefined";

/// Minimum number of characters of a trimmed category name.
pub const MIN_CATEGORY_NAME_CHARS: usize = 3;

/// Store-assigned category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Beverage category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Assigned on first save.
    pub id: Option<CategoryId>,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Creates an unsaved category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a category value carrying an existing id.
    ///
    /// Used by callers that reference a stored category without holding a
    /// copy fetched from the service.
    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Checks the editing rules for category names.
    ///
    /// # Errors
    /// - `NameTooShort` when the trimmed name has fewer than
    ///   [`MIN_CATEGORY_NAME_CHARS`] characters.
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let chars = self.name.trim().chars().count();
        if chars < MIN_CATEGORY_NAME_CHARS {
            return Err(CategoryValidationError::NameTooShort {
                min_chars: MIN_CATEGORY_NAME_CHARS,
                actual_chars: chars,
            });
        }
        Ok(())
    }

    /// Case-insensitive containment test against an already lower-cased filter.
    pub(crate) fn name_contains(&self, normalized_filter: &str) -> bool {
        self.name.to_lowercase().contains(normalized_filter)
    }
}

/// Category draft validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    NameTooShort {
        min_chars: usize,
        actual_chars: usize,
    },
}

impl Display for CategoryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { min_chars, .. } => write!(
                f,
                "category name must contain at least {min_chars} printable characters"
            ),
        }
    }
}

impl Error for CategoryValidationError {}
