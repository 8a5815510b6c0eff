//! Request and response DTOs for the JSON API.
//!
//! Aggregation result rows (trends, history, gems, …) serialize straight from
//! the domain repository types; DTOs here cover request parsing, validation
//! and the handful of response shapes that are not plain row sequences.

pub mod auth;
pub mod companies;
pub mod filters;
pub mod sectors;
