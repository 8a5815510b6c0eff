//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer. The single backing
//! store is a local SQLite file; there is no cache layer, every read
//! recomputes from the store.

pub mod persistence;
