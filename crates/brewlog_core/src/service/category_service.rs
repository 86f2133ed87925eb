//! Category use-case service.
//!
//! # Responsibility
//! - Own the category table and its id sequence.
//! - Answer name filters and by-id lookups with independent copies.
//! - Guard the "Undefined" sentinel against rename and removal.
//!
//! # Invariants
//! - The sentinel exists for the whole service lifetime and keeps its name.
//! - Ids are issued by the service only; a caller-provided id that is not
//!   stored gets a fresh id instead of being inserted as-is.
//! - Never calls into `ReviewService`.

use crate::model::category::{Category, CategoryId, UNDEFINED_CATEGORY_NAME};
use crate::store::{EntityTable, IdSequence};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SENTINEL_RENAME: &str = "undefined category may not be renamed";
pub(crate) const SENTINEL_REMOVE: &str = "undefined category may not be removed";

/// Errors from category lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryServiceError {
    /// A name lookup matched more than one category.
    AmbiguousResult { filter: String, matches: usize },
    /// A name lookup matched no category.
    NotFound(String),
    /// Attempt to rename or remove the sentinel category.
    InvalidOperation(&'static str),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousResult { filter, matches } => {
                write!(f, "category `{filter}` is ambiguous ({matches} matches)")
            }
            Self::NotFound(name) => write!(f, "category `{name}` does not exist"),
            Self::InvalidOperation(reason) => write!(f, "invalid operation: {reason}"),
        }
    }
}

impl Error for CategoryServiceError {}

/// Authoritative in-memory store of categories.
#[derive(Debug)]
pub struct CategoryService {
    categories: EntityTable<CategoryId, Category>,
    ids: IdSequence,
    undefined_id: CategoryId,
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryService {
    /// Creates a service holding only the sentinel category.
    pub fn new() -> Self {
        Self::with_names(std::iter::empty::<String>())
    }

    /// Creates a service seeded with `names`, in order.
    ///
    /// Duplicate names are skipped. The name equal to
    /// [`UNDEFINED_CATEGORY_NAME`] becomes the sentinel; when absent, the
    /// sentinel is appended after all other names.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = EntityTable::new();
        let ids = IdSequence::new();
        let mut seen = HashSet::new();
        let mut undefined_id = None;

        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                continue;
            }
            let id = insert_new(&categories, &ids, name.as_str());
            if name == UNDEFINED_CATEGORY_NAME {
                undefined_id = Some(id);
            }
        }
        let undefined_id = undefined_id
            .unwrap_or_else(|| insert_new(&categories, &ids, UNDEFINED_CATEGORY_NAME));

        debug!(
            "event=category_service_init module=category status=ok count={} undefined_id={}",
            categories.len(),
            undefined_id
        );

        Self {
            categories,
            ids,
            undefined_id,
        }
    }

    /// Returns categories whose name contains `filter`, ignoring case.
    ///
    /// An empty filter matches everything. Results are sorted by name,
    /// case-insensitively.
    pub fn find_categories(&self, filter: &str) -> Vec<Category> {
        let normalized = filter.to_lowercase();
        let mut matches = self
            .categories
            .collect_where(|category| category.name_contains(normalized.as_str()));
        matches.sort_by_cached_key(|category| category.name.to_lowercase());
        matches
    }

    /// Looks up the single category whose name contains `name`.
    ///
    /// This is a containment match: `"Tea"` also matches `"Green Tea"`.
    /// Callers that need exact lookup must pre-filter.
    ///
    /// # Errors
    /// - `AmbiguousResult` when more than one category matches.
    pub fn find_category_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Category>, CategoryServiceError> {
        let mut matches = self.find_categories(name);
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            count => Err(CategoryServiceError::AmbiguousResult {
                filter: name.to_string(),
                matches: count,
            }),
        }
    }

    /// Like [`CategoryService::find_category_by_name`], but a missing match is
    /// an error.
    ///
    /// # Errors
    /// - `AmbiguousResult` when more than one category matches.
    /// - `NotFound` when no category matches.
    pub fn find_category_or_throw(&self, name: &str) -> Result<Category, CategoryServiceError> {
        self.find_category_by_name(name)?
            .ok_or_else(|| CategoryServiceError::NotFound(name.to_string()))
    }

    pub fn find_category_by_id(&self, id: CategoryId) -> Option<Category> {
        self.categories.get(id)
    }

    /// Inserts or updates a category and returns the stored copy.
    ///
    /// - `dto.id` absent or unknown: a new id is assigned and a copy inserted.
    /// - `dto.id` known: the stored name is replaced.
    ///
    /// # Errors
    /// - `InvalidOperation` when renaming the sentinel; nothing is changed.
    pub fn save_category(&self, dto: &Category) -> Result<Category, CategoryServiceError> {
        let undefined_id = self.undefined_id;
        let outcome = self.categories.write_with(|rows| {
            if let Some(entity) = dto.id.and_then(|id| rows.get_mut(&id)) {
                if entity.id == Some(undefined_id) && entity.name != dto.name {
                    return Err(CategoryServiceError::InvalidOperation(SENTINEL_RENAME));
                }
                entity.name = dto.name.clone();
                return Ok((entity.clone(), false));
            }

            let id = CategoryId::new(self.ids.next());
            let entity = Category::with_id(id, dto.name.clone());
            rows.insert(id, entity.clone());
            Ok((entity, true))
        });

        match outcome {
            Ok((saved, created)) => {
                debug!(
                    "event=category_saved module=category status=ok id={} created={}",
                    display_id(saved.id),
                    created
                );
                Ok(saved)
            }
            Err(err) => {
                warn!(
                    "event=category_saved module=category status=rejected id={} reason=sentinel_rename",
                    undefined_id
                );
                Err(err)
            }
        }
    }

    /// Removes a category by id and reports whether anything was removed.
    ///
    /// # Errors
    /// - `InvalidOperation` when `category` is the sentinel.
    pub fn delete_category(&self, category: &Category) -> Result<bool, CategoryServiceError> {
        let Some(id) = category.id else {
            return Ok(false);
        };
        if id == self.undefined_id {
            warn!(
                "event=category_deleted module=category status=rejected id={} reason=sentinel_remove",
                id
            );
            return Err(CategoryServiceError::InvalidOperation(SENTINEL_REMOVE));
        }

        let removed = self.categories.remove(id).is_some();
        debug!(
            "event=category_deleted module=category status=ok id={} removed={}",
            id, removed
        );
        Ok(removed)
    }

    /// Returns the sentinel category.
    pub fn undefined_category(&self) -> Category {
        // The sentinel is neither removable nor renamable, so the fallback
        // is identical to the stored row.
        self.categories
            .get(self.undefined_id)
            .unwrap_or_else(|| Category::with_id(self.undefined_id, UNDEFINED_CATEGORY_NAME))
    }

    /// Whether `category` carries the sentinel id.
    pub fn is_undefined(&self, category: &Category) -> bool {
        category.id == Some(self.undefined_id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.len() == 0
    }
}

fn insert_new(
    categories: &EntityTable<CategoryId, Category>,
    ids: &IdSequence,
    name: &str,
) -> CategoryId {
    let id = CategoryId::new(ids.next());
    categories.write_with(|rows| rows.insert(id, Category::with_id(id, name)));
    id
}

fn display_id(id: Option<CategoryId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string())
}
