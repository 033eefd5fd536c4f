//! Domain layer for the order risk notifier.
//!
//! This crate provides the read-only view of a platform order that the
//! notifiers operate on:
//! - `OrderState` with the platform's state codes
//! - `OrderSnapshot`, built per event by the host adapter
//! - Customer and line-item value objects

pub mod error;
pub mod order;

pub use error::OrderError;
pub use order::{BillingAddress, LineItem, OrderSnapshot, OrderSnapshotBuilder, OrderState};
