//! Core domain logic for brewlog.
//! This crate is the single source of truth for category/review invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
mod store;

pub use config::{ConfigError, CoreConfig, SeedMode};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{
    Category, CategoryId, CategoryValidationError, UNDEFINED_CATEGORY_NAME,
};
pub use model::review::{Review, ReviewId, ReviewValidationError};
pub use model::tasting_date::{format_tasting_date, parse_tasting_date, DateFormatError};
pub use seed::{DemoSeed, FixtureSeed, SeedReview, SeedSource};
pub use service::catalog::{Catalog, CatalogError};
pub use service::category_service::{CategoryService, CategoryServiceError};
pub use service::review_service::ReviewService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
