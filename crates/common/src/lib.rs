//! Shared identifiers used across the notifier workspace.

mod types;

pub use types::{OrderId, StoreId};
