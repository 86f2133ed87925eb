//! Starting data for the category and review services.
//!
//! # Responsibility
//! - Describe starting data through the swappable [`SeedSource`] interface.
//! - Provide the random demo generator and a fixed fixture source.
//!
//! # Invariants
//! - Seed reviews name their category by display name; the review service
//!   resolves it with the regular name lookup.

mod beverages;
mod demo;

pub use beverages::{demo_category_names, BEVERAGES};
pub use demo::{DemoSeed, DEMO_REVIEWS_MAX, DEMO_REVIEWS_MIN};

use chrono::NaiveDate;

/// One review to create while seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReview {
    pub beverage: String,
    /// Category display name, resolved through `find_category_or_throw`.
    pub category: String,
    pub score: u32,
    pub count: u32,
    pub date: NaiveDate,
}

/// Source of starting categories and reviews.
pub trait SeedSource {
    /// Category names in insertion order.
    fn category_names(&self) -> Vec<String>;

    /// Reviews to save once categories exist.
    fn reviews(&mut self) -> Vec<SeedReview>;
}

/// Fixed seed data, used by tests and by the `none` seed mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSeed {
    pub categories: Vec<String>,
    pub reviews: Vec<SeedReview>,
}

impl FixtureSeed {
    pub fn new(categories: Vec<String>, reviews: Vec<SeedReview>) -> Self {
        Self {
            categories,
            reviews,
        }
    }

    /// Seed with no categories (only the sentinel) and no reviews.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl SeedSource for FixtureSeed {
    fn category_names(&self) -> Vec<String> {
        self.categories.clone()
    }

    fn reviews(&mut self) -> Vec<SeedReview> {
        self.reviews.clone()
    }
}
