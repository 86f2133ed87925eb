//! Shared in-memory state primitives used by the services.
//!
//! # Responsibility
//! - Hand out process-lifetime unique ids.
//! - Guard entity maps behind a reader/writer lock.
//!
//! # Invariants
//! - Issued ids are strictly increasing and never reused.
//! - Table mutations are serialized; reads may run concurrently.
//! - Lock poisoning is recovered instead of propagated as a panic.

mod id_sequence;
mod table;

pub(crate) use id_sequence::IdSequence;
pub(crate) use table::EntityTable;
