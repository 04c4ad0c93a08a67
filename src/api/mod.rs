//! HTTP API module for the person validation service.
//!
//! This module provides the REST endpoints that validate employee and
//! staff records.

mod handlers;
mod response;
mod state;

pub use handlers::{create_router, handle_post};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
