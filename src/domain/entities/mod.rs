//! Core domain entities representing the business data model.
//!
//! The service has a single entity: [`Link`], the mapping from a short code
//! to its target URL plus click counters. Entities are plain data
//! structures without business logic.
//!
//! # Design Pattern
//!
//! Creation uses a separate input struct ([`NewLink`]) so counters and
//! store-assigned timestamps never appear in caller-supplied data.

pub mod link;

pub use link::{Link, NewLink};
