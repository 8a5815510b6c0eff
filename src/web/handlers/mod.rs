//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod landing;
mod login;

pub use dashboard::dashboard_handler;
pub use landing::landing_handler;
pub use login::login_handler;
