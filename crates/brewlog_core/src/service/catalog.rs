//! Catalog orchestration over the category and review services.
//!
//! # Responsibility
//! - Build both services once, categories strictly before reviews.
//! - Apply the editing rules of category/review forms before saving.
//! - Keep reviews pointed at live categories when a category is removed.
//!
//! # Invariants
//! - Removing a category re-points its reviews at the sentinel before the
//!   category disappears.
//! - The sentinel is rejected before any review is touched.

use crate::model::category::{Category, CategoryValidationError};
use crate::model::review::{Review, ReviewValidationError};
use crate::seed::SeedSource;
use crate::service::category_service::{
    CategoryService, CategoryServiceError, SENTINEL_REMOVE,
};
use crate::service::review_service::ReviewService;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Errors from catalog use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Category(CategoryServiceError),
    CategoryValidation(CategoryValidationError),
    ReviewValidation(ReviewValidationError),
    /// Another category name already contains the submitted name.
    DuplicateCategoryName(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category(err) => write!(f, "{err}"),
            Self::CategoryValidation(err) => write!(f, "{err}"),
            Self::ReviewValidation(err) => write!(f, "{err}"),
            Self::DuplicateCategoryName(name) => {
                write!(f, "category name must be unique: `{name}`")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Category(err) => Some(err),
            Self::CategoryValidation(err) => Some(err),
            Self::ReviewValidation(err) => Some(err),
            Self::DuplicateCategoryName(_) => None,
        }
    }
}

impl From<CategoryServiceError> for CatalogError {
    fn from(value: CategoryServiceError) -> Self {
        Self::Category(value)
    }
}

impl From<CategoryValidationError> for CatalogError {
    fn from(value: CategoryValidationError) -> Self {
        Self::CategoryValidation(value)
    }
}

impl From<ReviewValidationError> for CatalogError {
    fn from(value: ReviewValidationError) -> Self {
        Self::ReviewValidation(value)
    }
}

/// Process-wide context owning both services.
#[derive(Debug)]
pub struct Catalog {
    categories: Arc<CategoryService>,
    reviews: ReviewService,
}

impl Catalog {
    /// Wraps existing services. `reviews` should resolve through `categories`.
    pub fn new(categories: Arc<CategoryService>, reviews: ReviewService) -> Self {
        Self {
            categories,
            reviews,
        }
    }

    /// Builds both services from one seed source.
    ///
    /// # Errors
    /// Returns the category lookup error of the first seed review whose
    /// category name does not identify exactly one category.
    pub fn bootstrap(seed: &mut dyn SeedSource) -> Result<Self, CatalogError> {
        let categories = Arc::new(CategoryService::with_names(seed.category_names()));
        let reviews = ReviewService::seeded(Arc::clone(&categories), seed)?;
        info!(
            "event=catalog_bootstrap module=catalog status=ok categories={} reviews={}",
            categories.len(),
            reviews.len()
        );
        Ok(Self::new(categories, reviews))
    }

    pub fn categories(&self) -> &Arc<CategoryService> {
        &self.categories
    }

    pub fn reviews(&self) -> &ReviewService {
        &self.reviews
    }

    /// Validates and saves a category submitted from an editing form.
    ///
    /// The name is trimmed. It must not be contained in the name of any other
    /// category (case-insensitive). Reviews pick up a new name on their next
    /// read.
    ///
    /// # Errors
    /// - `CategoryValidation` for names that are too short.
    /// - `DuplicateCategoryName` for names matching another category.
    /// - `Category(InvalidOperation)` when renaming the sentinel.
    pub fn submit_category(&self, draft: &Category) -> Result<Category, CatalogError> {
        let mut category = draft.clone();
        category.name = draft.name.trim().to_string();
        category.validate()?;

        let clashes = self
            .categories
            .find_categories(category.name.as_str())
            .into_iter()
            .any(|existing| existing.id != category.id);
        if clashes {
            return Err(CatalogError::DuplicateCategoryName(category.name));
        }

        Ok(self.categories.save_category(&category)?)
    }

    /// Removes a category after moving its reviews to the sentinel.
    ///
    /// Returns how many reviews were re-pointed.
    ///
    /// # Errors
    /// - `Category(InvalidOperation)` for the sentinel; nothing is changed.
    pub fn remove_category(&self, category: &Category) -> Result<usize, CatalogError> {
        if self.categories.is_undefined(category) {
            warn!("event=category_removed module=catalog status=rejected reason=sentinel_remove");
            return Err(CategoryServiceError::InvalidOperation(SENTINEL_REMOVE).into());
        }
        let Some(id) = category.id else {
            return Ok(0);
        };

        let undefined = self.categories.undefined_category();
        let affected = self.reviews.reviews_in_category(id);
        for review in &affected {
            let mut moved = review.clone();
            moved.category = Some(undefined.clone());
            self.reviews.save_review(&moved);
        }

        if !self.categories.delete_category(category)? {
            warn!(
                "event=category_removed module=catalog status=missing id={} repointed={}",
                id,
                affected.len()
            );
        }
        Ok(affected.len())
    }

    /// Validates and saves a review submitted from an editing form.
    ///
    /// # Errors
    /// - `ReviewValidation` when a form rule is violated against `today`.
    pub fn submit_review(&self, draft: &Review, today: NaiveDate) -> Result<Review, CatalogError> {
        let mut review = draft.clone();
        review.name = draft.name.trim().to_string();
        review.validate(today)?;
        Ok(self.reviews.save_review(&review))
    }

    pub fn remove_review(&self, review: &Review) -> bool {
        self.reviews.delete_review(review)
    }

    /// Reviews shown under `category`, newest first.
    ///
    /// Reviews without a category are listed under the sentinel.
    pub fn reviews_for(&self, category: &Category) -> Vec<Review> {
        let Some(id) = category.id else {
            return Vec::new();
        };
        let mut reviews = self.reviews.reviews_in_category(id);
        if self.categories.is_undefined(category) {
            reviews.extend(self.reviews.uncategorized_reviews());
            reviews.sort_by_key(|review| std::cmp::Reverse(review.id));
        }
        reviews
    }

    /// Total times tasted across the reviews shown under `category`.
    pub fn tasted_count(&self, category: &Category) -> u64 {
        self.reviews_for(category)
            .iter()
            .map(|review| u64::from(review.count))
            .sum()
    }
}
