//! HTTP surface: public trace lookups and the admin batch API.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{error_codes, ApiError, ApiResult};
pub use routes::{create_router, DEFAULT_BODY_LIMIT};
pub use state::{AppState, SharedState};
