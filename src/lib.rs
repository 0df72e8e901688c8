//! In-memory user directory REST service.
//!
//! The store and the HTTP surface are factored into library modules so
//! integration tests can build the router against a fresh directory without
//! going through the binary.

pub mod api;
pub mod directory;

pub use api::{build_router, AppState};
pub use directory::{Directory, User};
