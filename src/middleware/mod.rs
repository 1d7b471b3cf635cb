//! HTTP middleware.

pub mod auth_middleware;
pub mod request_ext;

pub use auth_middleware::AuthMiddleware;
pub use request_ext::RequestExt;
