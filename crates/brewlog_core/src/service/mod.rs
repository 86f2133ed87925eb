//! Core use-case services.
//!
//! # Responsibility
//! - Own the category and review tables behind their invariants.
//! - Offer the catalog context that presentation code talks to.
//!
//! # Invariants
//! - `CategoryService` never depends on `ReviewService`.
//! - Both services are `Send + Sync` and shareable across threads.

pub mod catalog;
pub mod category_service;
pub mod review_service;
