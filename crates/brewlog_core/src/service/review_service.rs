//! Review use-case service.
//!
//! # Responsibility
//! - Own the review table and its id sequence.
//! - Filter reviews through their delimiter-joined search text.
//! - Re-resolve each review's category against `CategoryService` on save.
//! - Show the live category name on every read.
//!
//! # Invariants
//! - After a save, a `Some` category was present in `CategoryService` at that
//!   moment; an id that no longer resolves is stored as `None`.
//! - Reads replace the stored category with the live row of the same id; a
//!   deleted category keeps its last known name until the review is saved.
//! - Category lookups complete before or after the review table is locked,
//!   never while the review lock is held.
//! - Search results are ordered by descending id (most recently created first).

use crate::model::category::{Category, CategoryId};
use crate::model::review::{Review, ReviewId};
use crate::seed::SeedSource;
use crate::service::category_service::{CategoryService, CategoryServiceError};
use crate::store::{EntityTable, IdSequence};
use log::{debug, info};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

/// Authoritative in-memory store of reviews.
#[derive(Debug)]
pub struct ReviewService {
    reviews: EntityTable<ReviewId, Review>,
    ids: IdSequence,
    categories: Arc<CategoryService>,
}

impl ReviewService {
    /// Creates an empty review store resolving categories through `categories`.
    pub fn new(categories: Arc<CategoryService>) -> Self {
        Self {
            reviews: EntityTable::new(),
            ids: IdSequence::new(),
            categories,
        }
    }

    /// Creates a review store populated from `seed`.
    ///
    /// Every seeded review goes through [`ReviewService::save_review`], so it
    /// obeys the same resolution rules as runtime saves.
    ///
    /// # Errors
    /// Returns the lookup error when a seed category name does not identify
    /// exactly one stored category.
    pub fn seeded(
        categories: Arc<CategoryService>,
        seed: &mut dyn SeedSource,
    ) -> Result<Self, CategoryServiceError> {
        let service = Self::new(categories);
        for entry in seed.reviews() {
            let category = service
                .categories
                .find_category_or_throw(entry.category.as_str())?;
            let mut review = Review::new(entry.beverage, entry.date);
            review.score = entry.score;
            review.count = entry.count;
            review.category = Some(category);
            service.save_review(&review);
        }

        info!(
            "event=review_seed module=review status=ok count={}",
            service.len()
        );
        Ok(service)
    }

    /// Returns reviews whose search text contains `filter`, ignoring case.
    ///
    /// The search text joins beverage name, category name (or "Undefined"),
    /// score, count and `MM/dd/yyyy` date with a tab. An empty filter matches
    /// everything.
    pub fn find_reviews(&self, filter: &str) -> Vec<Review> {
        let normalized = filter.to_lowercase();
        let live = self.live_categories();
        let mut matches = self.reviews.collect_where(|_| true);
        for review in &mut matches {
            attach_live_category(review, &live);
        }
        matches.retain(|review| review.search_text().contains(normalized.as_str()));
        sort_newest_first(&mut matches);
        matches
    }

    pub fn find_review_by_id(&self, id: ReviewId) -> Option<Review> {
        let mut review = self.reviews.get(id)?;
        let live = review
            .category
            .as_ref()
            .and_then(|category| category.id)
            .and_then(|category_id| self.categories.find_category_by_id(category_id));
        if live.is_some() {
            review.category = live;
        }
        Some(review)
    }

    /// Returns reviews whose stored category carries `category_id`, newest first.
    pub fn reviews_in_category(&self, category_id: CategoryId) -> Vec<Review> {
        let mut matches = self.reviews.collect_where(|review| {
            review
                .category
                .as_ref()
                .is_some_and(|category| category.id == Some(category_id))
        });
        if let Some(live) = self.categories.find_category_by_id(category_id) {
            for review in &mut matches {
                review.category = Some(live.clone());
            }
        }
        sort_newest_first(&mut matches);
        matches
    }

    /// Returns reviews stored without a category, newest first.
    pub fn uncategorized_reviews(&self) -> Vec<Review> {
        let mut matches = self
            .reviews
            .collect_where(|review| review.category.is_none());
        sort_newest_first(&mut matches);
        matches
    }

    /// Inserts or updates a review and returns the stored copy.
    ///
    /// - The category is re-fetched by id; an id that no longer exists, or a
    ///   category without an id, resolves to `None`.
    /// - `dto.id` absent or unknown: a new id is assigned and a copy inserted.
    /// - `dto.id` known: score, name, date and count are replaced and the
    ///   category is overwritten with the resolved value, `None` included.
    pub fn save_review(&self, dto: &Review) -> Review {
        let category = self.resolve_category(dto.category.as_ref());

        let (saved, created) = self.reviews.write_with(|rows| {
            if let Some(entity) = dto.id.and_then(|id| rows.get_mut(&id)) {
                entity.score = dto.score;
                entity.name = dto.name.clone();
                entity.date = dto.date;
                entity.count = dto.count;
                entity.category = category;
                return (entity.clone(), false);
            }

            let id = ReviewId::new(self.ids.next());
            let entity = Review {
                id: Some(id),
                category,
                ..dto.clone()
            };
            rows.insert(id, entity.clone());
            (entity, true)
        });

        debug!(
            "event=review_saved module=review status=ok id={} created={} category_resolved={}",
            saved.id.map(ReviewId::get).unwrap_or_default(),
            created,
            saved.category.is_some()
        );
        saved
    }

    /// Removes a review by id and reports whether anything was removed.
    pub fn delete_review(&self, review: &Review) -> bool {
        let Some(id) = review.id else {
            return false;
        };
        let removed = self.reviews.remove(id).is_some();
        debug!(
            "event=review_deleted module=review status=ok id={} removed={}",
            id, removed
        );
        removed
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.len() == 0
    }

    fn resolve_category(&self, category: Option<&Category>) -> Option<Category> {
        // A category that was never saved has no id and cannot resolve.
        let id = category?.id?;
        self.categories.find_category_by_id(id)
    }

    fn live_categories(&self) -> HashMap<CategoryId, Category> {
        self.categories
            .find_categories("")
            .into_iter()
            .filter_map(|category| category.id.map(|id| (id, category)))
            .collect()
    }
}

fn attach_live_category(review: &mut Review, live: &HashMap<CategoryId, Category>) {
    let current = review
        .category
        .as_ref()
        .and_then(|category| category.id)
        .and_then(|id| live.get(&id));
    if let Some(current) = current {
        review.category = Some(current.clone());
    }
}

fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by_key(|review| Reverse(review.id));
}
