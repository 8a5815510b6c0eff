//! Domain layer: entities, repository contracts and pure business rules.
//!
//! Nothing in this module touches the database or the HTTP stack. Repository
//! traits are implemented by the infrastructure layer; services in
//! [`crate::application`] orchestrate them.
//!
//! - [`entities`] - persisted data structures
//! - [`repositories`] - data-access trait definitions
//! - [`sectors`] - the fixed A–T sector code↔name table
//! - [`session`] - the landing → auth → dashboard state machine

pub mod entities;
pub mod repositories;
pub mod sectors;
pub mod session;
