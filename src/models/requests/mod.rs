//! Request payload models.

pub mod auth;
pub mod bid;

pub use auth::*;
pub use bid::*;
