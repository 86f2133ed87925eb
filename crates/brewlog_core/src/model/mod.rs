//! Domain model for beverage categories and tasting reviews.
//!
//! # Responsibility
//! - Define the value types exchanged between services and their callers.
//! - Hold the draft validation rules applied by editing flows.
//!
//! # Invariants
//! - Ids are assigned by the owning service and never reused.
//! - Entities cross API boundaries by value; stored state is never shared.

pub mod category;
pub mod review;
pub mod tasting_date;
