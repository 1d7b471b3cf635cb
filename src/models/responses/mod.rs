//! Response models.

pub mod acks;
pub mod api;

pub use acks::*;
pub use api::*;
