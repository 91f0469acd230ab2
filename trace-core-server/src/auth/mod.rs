//! Bearer-token authentication for the admin routes.

pub mod extractor;
pub mod jwt_gate;

pub use extractor::{bearer_token, AdminActor};
pub use jwt_gate::{Claims, JwtAuthGate};
