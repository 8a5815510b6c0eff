//! Web dashboard layer for browser-based UI.
//!
//! Server-side rendered shells via Askama; the pages fetch their data from
//! the JSON API with the session cookie doubling as the Bearer token.
//!
//! # Modules
//!
//! - [`handlers`] - template rendering handlers
//! - [`middleware`] - cookie-session middleware
//! - [`routes`] - dashboard route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
