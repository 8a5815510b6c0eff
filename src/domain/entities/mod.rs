//! Core domain entities representing the persisted data model.
//!
//! Entities are plain data structures without business logic. The `company`
//! and `financials` tables are owned by an external ingestion process and
//! only ever read here; `users` is the one table this service writes.

pub mod company;
pub mod user;

pub use company::{Company, CompanySummary};
pub use user::{NewUser, User};
