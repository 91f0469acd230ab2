pub mod auth;
pub mod config;
pub mod http;
pub mod logging;

pub use auth::JwtAuthGate;
pub use config::{ConfigLoadError, ServerConfig};
pub use http::{create_router, AppState, SharedState};
