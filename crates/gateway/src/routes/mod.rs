//! HTTP route handlers.

pub mod events;
pub mod status;
